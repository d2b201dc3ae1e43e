pub mod watch_session;

pub use watch_session::{SessionWatcher, WatchGuard, WatchSessionConfig};
