use super::model::*;

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            debounce_window_ms: 2_000,
            ack_vibrate_ms: 100,
        }
    }
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            freshness_window_ms: 5_000,
            base_url: "https://app.scanbridge.dev".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            scan: ScanSettings::default(),
            relay: RelaySettings::default(),
        }
    }
}
