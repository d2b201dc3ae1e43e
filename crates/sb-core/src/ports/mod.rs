//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal
//! Architecture principles, allowing the core business logic to remain
//! independent of external dependencies.

pub mod camera;
mod clock;
pub mod errors;
pub mod notifier;
pub mod pairing_store;
pub mod product;
pub mod relay;
pub mod settings;

pub use clock::*;

pub use camera::CameraPort;
pub use errors::{CameraError, PairingStoreError, RelayStoreError};
pub use notifier::{NoticeKind, NotifierPort};
pub use pairing_store::PairingStorePort;
pub use product::{Product, ProductLookupPort};
pub use relay::RelayStorePort;
pub use settings::SettingsPort;
