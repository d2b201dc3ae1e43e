//! Business logic use cases
//!
//! Split by device role: `session` and `relay` run on the primary
//! device (session owner), `scanner` runs on the secondary device
//! (the phone acting as a remote scanner).

pub mod relay;
pub mod scanner;
pub mod session;

pub use relay::{SessionWatcher, WatchGuard, WatchSessionConfig};
pub use scanner::{ScannerConfig, ScannerOrchestrator, SelectCamera};
pub use session::{CreateSession, TeardownSession};
