use async_trait::async_trait;
use tokio::sync::Mutex;

use sb_core::ids::SessionId;
use sb_core::ports::{PairingStoreError, PairingStorePort};

/// In-memory pairing store for tests and ephemeral sessions.
#[derive(Default)]
pub struct InMemoryPairingStore {
    record: Mutex<Option<SessionId>>,
}

impl InMemoryPairingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PairingStorePort for InMemoryPairingStore {
    async fn save(&self, session_id: &SessionId) -> Result<(), PairingStoreError> {
        *self.record.lock().await = Some(session_id.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<SessionId>, PairingStoreError> {
        Ok(self.record.lock().await.clone())
    }

    async fn clear(&self) -> Result<(), PairingStoreError> {
        *self.record.lock().await = None;
        Ok(())
    }
}
