//! In-memory relay store
//!
//! Models a document store with realtime subscriptions: events append
//! under a session id, live subscribers get them in commit order, and a
//! fresh subscription replays the session's backlog first, the way
//! realtime stores replay recent history on (re)attach. That replay is
//! exactly what the primary-side freshness filter defends against.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use sb_core::ids::SessionId;
use sb_core::ports::{RelayStoreError, RelayStorePort};
use sb_core::scan::ScanEvent;
use sb_core::session::Session;

const SUBSCRIBER_BUFFER: usize = 64;

#[derive(Default)]
struct SessionDoc {
    session: Option<Session>,
    events: Vec<ScanEvent>,
    subscribers: Vec<mpsc::Sender<ScanEvent>>,
}

pub struct InMemoryRelayStore {
    docs: Mutex<HashMap<SessionId, SessionDoc>>,
    /// Simulates the backing store being unreachable.
    offline: AtomicBool,
}

impl InMemoryRelayStore {
    pub fn new() -> Self {
        Self {
            docs: Mutex::new(HashMap::new()),
            offline: AtomicBool::new(false),
        }
    }

    /// Toggle simulated connectivity loss.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub async fn session(&self, id: &SessionId) -> Option<Session> {
        self.docs.lock().await.get(id).and_then(|doc| doc.session.clone())
    }

    pub async fn event_count(&self, id: &SessionId) -> usize {
        self.docs
            .lock()
            .await
            .get(id)
            .map(|doc| doc.events.len())
            .unwrap_or(0)
    }

    fn ensure_online(&self) -> Result<(), RelayStoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(RelayStoreError::Unavailable("relay store offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Default for InMemoryRelayStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelayStorePort for InMemoryRelayStore {
    async fn create_session(&self, session: &Session) -> Result<(), RelayStoreError> {
        self.ensure_online()?;
        let mut docs = self.docs.lock().await;
        docs.entry(session.id.clone()).or_default().session = Some(session.clone());
        Ok(())
    }

    async fn teardown_session(&self, id: &SessionId) -> Result<(), RelayStoreError> {
        self.ensure_online()?;
        self.docs.lock().await.remove(id);
        Ok(())
    }

    async fn append_event(&self, event: &ScanEvent) -> Result<(), RelayStoreError> {
        self.ensure_online()?;
        let mut docs = self.docs.lock().await;
        // The store does not validate that the session still exists;
        // an append against a torn-down id is simply unobserved.
        let doc = docs.entry(event.session_id.clone()).or_default();
        doc.events.push(event.clone());
        doc.subscribers.retain(|tx| match tx.try_send(event.clone()) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                debug!("slow relay subscriber, event dropped");
                true
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        });
        Ok(())
    }

    async fn subscribe(
        &self,
        id: &SessionId,
    ) -> Result<mpsc::Receiver<ScanEvent>, RelayStoreError> {
        self.ensure_online()?;
        let (tx, rx) = mpsc::channel(SUBSCRIBER_BUFFER);
        let mut docs = self.docs.lock().await;
        let doc = docs.entry(id.clone()).or_default();
        for event in &doc.events {
            let _ = tx.try_send(event.clone());
        }
        doc.subscribers.push(tx);
        Ok(rx)
    }
}
