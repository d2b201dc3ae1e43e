use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Minimum interval before an identical payload is accepted again
    /// from the same scanning device.
    ///
    /// One parameter for every call site; the observed 2000/3000 ms
    /// split is deliberately reconciled here.
    pub debounce_window_ms: i64,

    /// Duration of the haptic acknowledgement on an accepted scan.
    pub ack_vibrate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySettings {
    /// Maximum age a relayed event may have, at delivery time, to be
    /// surfaced to the primary device's subscriber.
    pub freshness_window_ms: i64,

    /// Base of the pairing URL rendered into the QR code.
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub scan: ScanSettings,

    #[serde(default)]
    pub relay: RelaySettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}
