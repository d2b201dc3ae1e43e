use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use sb_core::ids::{DeviceId, SessionId};
use sb_core::ports::RelayStorePort;
use sb_core::session::Session;

/// Mint a pairing session on the primary device and make it
/// discoverable through the relay store.
pub struct CreateSession {
    relay: Arc<dyn RelayStorePort>,
}

impl CreateSession {
    pub fn new(relay: Arc<dyn RelayStorePort>) -> Self {
        Self { relay }
    }

    /// Fails when the relay store is unreachable; the caller decides
    /// whether to retry, the use case itself does not.
    pub async fn execute(&self, owner_id: DeviceId) -> Result<Session> {
        let session = Session::new(SessionId::generate(), owner_id, Utc::now());

        self.relay
            .create_session(&session)
            .await
            .context("create pairing session")?;

        info!(session_id = %session.id, "pairing session created");
        Ok(session)
    }
}
