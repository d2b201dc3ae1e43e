use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use sb_core::ids::SessionId;
use sb_core::ports::RelayStorePort;

/// Best-effort session teardown, invoked when the owning view on the
/// primary device goes away.
///
/// Not required for correctness: relay reads tolerate a dead session,
/// it simply never receives more events.
pub struct TeardownSession {
    relay: Arc<dyn RelayStorePort>,
}

impl TeardownSession {
    pub fn new(relay: Arc<dyn RelayStorePort>) -> Self {
        Self { relay }
    }

    /// Idempotent: tearing down an unknown or already removed session
    /// succeeds.
    pub async fn execute(&self, id: &SessionId) -> Result<()> {
        self.relay
            .teardown_session(id)
            .await
            .context("teardown pairing session")?;

        info!(session_id = %id, "pairing session torn down");
        Ok(())
    }
}
