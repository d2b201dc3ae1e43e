//! Primary-side session watcher
//!
//! Subscribes to the relay for one session, filters out stale replayed
//! events, resolves payloads against the product catalog and fans the
//! accepted scans out to the presentation layer.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::AbortHandle;
use tracing::{debug, warn};

use sb_core::ids::SessionId;
use sb_core::ports::{ClockPort, NoticeKind, NotifierPort, ProductLookupPort, RelayStorePort};
use sb_core::scan::ScanEvent;
use sb_core::settings::Settings;

use crate::events::{ScannerEvent, ScannerEventPort};

#[derive(Debug, Clone)]
pub struct WatchSessionConfig {
    /// Maximum event age at delivery time (ms). Anything older is a
    /// replay artifact, not a live scan, and must not be surfaced.
    pub freshness_window_ms: i64,
}

impl Default for WatchSessionConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl WatchSessionConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            freshness_window_ms: settings.relay.freshness_window_ms.max(0),
        }
    }
}

/// Watches one session's scan events on the primary device.
pub struct SessionWatcher {
    config: WatchSessionConfig,
    relay: Arc<dyn RelayStorePort>,
    products: Arc<dyn ProductLookupPort>,
    notifier: Arc<dyn NotifierPort>,
    clock: Arc<dyn ClockPort>,
    event_senders: Arc<Mutex<Vec<mpsc::Sender<ScannerEvent>>>>,
}

impl SessionWatcher {
    pub fn new(
        config: WatchSessionConfig,
        relay: Arc<dyn RelayStorePort>,
        products: Arc<dyn ProductLookupPort>,
        notifier: Arc<dyn NotifierPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            config,
            relay,
            products,
            notifier,
            clock,
            event_senders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Start watching `session_id`.
    ///
    /// Returns a guard that cancels the subscription when dropped, so
    /// teardown is paired 1:1 with setup on every exit path of the
    /// owning view.
    pub async fn watch(&self, session_id: &SessionId) -> Result<WatchGuard> {
        let mut events = self
            .relay
            .subscribe(session_id)
            .await
            .context("subscribe to scan relay")?;

        let freshness_window_ms = self.config.freshness_window_ms;
        let products = self.products.clone();
        let notifier = self.notifier.clone();
        let clock = self.clock.clone();
        let event_senders = self.event_senders.clone();

        let task = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                Self::deliver(
                    event,
                    freshness_window_ms,
                    &products,
                    &notifier,
                    &clock,
                    &event_senders,
                )
                .await;
            }
        });

        Ok(WatchGuard {
            abort: task.abort_handle(),
        })
    }

    async fn deliver(
        event: ScanEvent,
        freshness_window_ms: i64,
        products: &Arc<dyn ProductLookupPort>,
        notifier: &Arc<dyn NotifierPort>,
        clock: &Arc<dyn ClockPort>,
        event_senders: &Arc<Mutex<Vec<mpsc::Sender<ScannerEvent>>>>,
    ) {
        let now = clock.now_ms();
        if !event.is_fresh(now, freshness_window_ms) {
            debug!(age_ms = event.age_ms(now), "stale scan event discarded");
            return;
        }

        // A catalog miss is not an error: the reference is surfaced
        // verbatim and the operator decides what to do with it.
        let product_id = match products.get_by_id(&event.payload).await {
            Ok(Some(product)) => product.id,
            Ok(None) => event.payload.clone(),
            Err(e) => {
                warn!(error = %e, "product lookup failed, using payload verbatim");
                event.payload.clone()
            }
        };

        if let Err(e) = notifier
            .notify(NoticeKind::Success, &format!("Scanned {product_id}"))
            .await
        {
            debug!(error = %e, "notifier unavailable");
        }

        let accepted = ScannerEvent::ScanAccepted {
            payload: event.payload,
            product_id,
        };
        let senders = { event_senders.lock().await.clone() };
        for sender in senders {
            if sender.send(accepted.clone()).await.is_err() {
                debug!("scan event receiver dropped");
            }
        }
    }
}

#[async_trait]
impl ScannerEventPort for SessionWatcher {
    async fn subscribe(&self) -> Result<mpsc::Receiver<ScannerEvent>> {
        let (tx, rx) = mpsc::channel(32);
        self.event_senders.lock().await.push(tx);
        Ok(rx)
    }
}

/// Cancellation handle for a live session watch.
///
/// Aborting the watch task drops the relay receiver, which releases
/// the underlying subscription. Dropping the guard cancels too, so a
/// panicking or early-returning owner still cleans up.
pub struct WatchGuard {
    abort: AbortHandle,
}

impl WatchGuard {
    pub fn cancel(self) {
        // Drop does the work.
    }
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
