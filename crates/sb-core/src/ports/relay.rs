//! Relay store port - the pub/sub surface between the two devices
//!
//! Abstracts the backing document store used purely as a message relay:
//! the secondary device appends scan events under a session id, the
//! primary device subscribes and receives them in store-commit order.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::errors::RelayStoreError;
use crate::ids::SessionId;
use crate::scan::ScanEvent;
use crate::session::Session;

#[async_trait]
pub trait RelayStorePort: Send + Sync {
    /// Write a freshly minted session record under its id.
    async fn create_session(&self, session: &Session) -> Result<(), RelayStoreError>;

    /// Best-effort delete of a session record. Idempotent; a session
    /// that was never created (or already torn down) is not an error.
    async fn teardown_session(&self, id: &SessionId) -> Result<(), RelayStoreError>;

    /// Append one scan event. At-most-once from the caller's view: on
    /// failure the event is lost and the caller surfaces the failure.
    async fn append_event(&self, event: &ScanEvent) -> Result<(), RelayStoreError>;

    /// Register a live listener for events under `id`, delivered in
    /// commit order. Stores with realtime semantics may replay recent
    /// history into a fresh subscription; subscribers must filter by
    /// freshness. Dropping the receiver tears the subscription down.
    async fn subscribe(&self, id: &SessionId) -> Result<mpsc::Receiver<ScanEvent>, RelayStoreError>;
}
