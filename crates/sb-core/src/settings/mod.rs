pub mod defaults;
pub mod model;

pub use model::{RelaySettings, ScanSettings, Settings, CURRENT_SCHEMA_VERSION};
