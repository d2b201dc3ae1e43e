//! Infrastructure adapters for ScanBridge.

pub mod pairing_store;
pub mod product;
pub mod relay;
pub mod settings;
pub mod time;

pub use pairing_store::{FilePairingStore, InMemoryPairingStore};
pub use product::InMemoryProductCatalog;
pub use relay::InMemoryRelayStore;
pub use settings::FileSettingsRepository;
pub use time::SystemClock;
