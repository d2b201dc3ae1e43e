use async_trait::async_trait;

use super::errors::PairingStoreError;
use crate::ids::SessionId;

/// Device-scoped persisted pairing record.
///
/// Lets a secondary device survive a reload without rescanning the
/// pairing code. Injectable rather than a well-known global key, so
/// tests can substitute an in-memory store. Owned exclusively by the
/// device it resides on; never synchronized. Only the secondary role
/// consults `load()` at startup.
#[async_trait]
pub trait PairingStorePort: Send + Sync {
    async fn save(&self, session_id: &SessionId) -> Result<(), PairingStoreError>;

    async fn load(&self) -> Result<Option<SessionId>, PairingStoreError>;

    async fn clear(&self) -> Result<(), PairingStoreError>;
}
