//! Scanner orchestrator
//!
//! Runs on the secondary device. Converts decoded camera frames into
//! pairing transitions and relayed scan events:
//!
//! ```text
//! Camera frames / User input / Startup restore
//!   ↓
//! ScannerOrchestrator (debounce, classify)
//!   ↓
//! PairingDomain (pure state transitions)
//!   ↓
//! DomainDecision (executed by orchestrator)
//!   ↓
//! Relay store / Pairing store / Notifier side effects
//! ```

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use sb_core::decision::DomainDecision;
use sb_core::ids::{DeviceId, SessionId};
use sb_core::pairing::{PairingDomain, PairingEvent, PairingState};
use sb_core::ports::{ClockPort, NoticeKind, NotifierPort, PairingStorePort, RelayStorePort};
use sb_core::scan::{classify, ScanDebouncer, ScanEvent, ScanPayload};
use sb_core::settings::Settings;

use crate::events::{ScannerEvent, ScannerEventPort};

/// Scanner orchestrator configuration
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Debounce window for repeated identical payloads (ms)
    pub debounce_window_ms: i64,
    /// Haptic acknowledgement duration on an accepted scan (ms)
    pub ack_vibrate_ms: u64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl ScannerConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            debounce_window_ms: settings.scan.debounce_window_ms.max(0),
            ack_vibrate_ms: settings.scan.ack_vibrate_ms,
        }
    }
}

/// Scanner orchestrator
///
/// Owns the pure pairing domain and the debouncer, and executes the
/// decisions they return against the injected ports.
pub struct ScannerOrchestrator {
    config: ScannerConfig,
    domain: Mutex<PairingDomain>,
    debouncer: Mutex<ScanDebouncer>,
    relay: Arc<dyn RelayStorePort>,
    pairing_store: Arc<dyn PairingStorePort>,
    notifier: Arc<dyn NotifierPort>,
    clock: Arc<dyn ClockPort>,
    /// This device, stamped onto published events for provenance.
    device_id: DeviceId,
    event_senders: Arc<Mutex<Vec<mpsc::Sender<ScannerEvent>>>>,
}

impl ScannerOrchestrator {
    pub fn new(
        config: ScannerConfig,
        relay: Arc<dyn RelayStorePort>,
        pairing_store: Arc<dyn PairingStorePort>,
        notifier: Arc<dyn NotifierPort>,
        clock: Arc<dyn ClockPort>,
        device_id: DeviceId,
    ) -> Self {
        let debouncer = ScanDebouncer::new(config.debounce_window_ms);
        Self {
            config,
            domain: Mutex::new(PairingDomain::new()),
            debouncer: Mutex::new(debouncer),
            relay,
            pairing_store,
            notifier,
            clock,
            device_id,
            event_senders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Current pairing state snapshot.
    pub async fn pairing_state(&self) -> PairingState {
        self.domain.lock().await.state().clone()
    }

    /// Re-enter `Paired` from the record a previous run persisted.
    ///
    /// Secondary role only; called once at startup, before the camera
    /// starts delivering frames. A store failure is non-fatal: the
    /// device simply starts unpaired.
    pub async fn restore_pairing(&self) -> Result<Option<SessionId>> {
        let record = match self.pairing_store.load().await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "pairing record unavailable, starting unpaired");
                return Ok(None);
            }
        };

        let Some(session_id) = record else {
            return Ok(None);
        };

        let decision = self.domain.lock().await.apply(PairingEvent::PairingRestored {
            session_id: session_id.clone(),
        });
        self.execute_decision(decision).await?;
        Ok(Some(session_id))
    }

    /// One decoded camera frame.
    ///
    /// Debounces, classifies, folds into the pairing domain and
    /// executes the resulting decision. Unrecognized payloads are
    /// dropped silently: a QR code in view may simply not be ours.
    pub async fn handle_decoded(&self, decoded: &str) -> Result<()> {
        let now = self.clock.now_ms();
        if !self.debouncer.lock().await.should_accept(decoded, now) {
            debug!("duplicate frame suppressed");
            return Ok(());
        }

        let event = match classify(decoded) {
            ScanPayload::Pairing(session_id) => PairingEvent::PairingPayloadDecoded { session_id },
            ScanPayload::ProductRef(reference) => PairingEvent::ProductPayloadDecoded { reference },
            ScanPayload::Unrecognized => {
                debug!("unrecognized payload dropped");
                return Ok(());
            }
        };

        let decision = self.domain.lock().await.apply(event);
        self.execute_decision(decision).await
    }

    /// Explicit user unpair.
    pub async fn unpair(&self) -> Result<()> {
        let decision = self.domain.lock().await.apply(PairingEvent::UserUnpaired);
        self.execute_decision(decision).await
    }

    async fn execute_decision(&self, decision: DomainDecision) -> Result<()> {
        match decision {
            DomainDecision::Ignore => Ok(()),

            DomainDecision::EstablishPairing { session_id } => {
                // A persist failure must not undo the pairing; it only
                // means the join does not survive a reload.
                if let Err(e) = self.pairing_store.save(&session_id).await {
                    warn!(error = %e, "pairing record not persisted");
                }
                self.ack_scan().await;
                self.notify(NoticeKind::Success, "Scanner paired").await;
                self.emit_event(ScannerEvent::Paired { session_id }).await;
                Ok(())
            }

            DomainDecision::ResumePairing { session_id } => {
                debug!(session_id = %session_id, "pairing restored from local record");
                self.emit_event(ScannerEvent::Paired { session_id }).await;
                Ok(())
            }

            DomainDecision::PublishScan {
                session_id,
                reference,
            } => {
                let event = ScanEvent {
                    session_id,
                    payload: reference,
                    actor_id: Some(self.device_id.clone()),
                    timestamp: self.clock.now_ms(),
                };

                if let Err(e) = self.relay.append_event(&event).await {
                    // At-most-once: the event is lost. Scanning stays
                    // enabled, so the user can simply scan again.
                    self.notify(NoticeKind::Warning, "Scan not delivered, store unreachable")
                        .await;
                    return Err(e).context("publish scan event");
                }

                self.ack_scan().await;
                Ok(())
            }

            DomainDecision::RejectScan { reference } => {
                self.notify(NoticeKind::Warning, "Not paired, scan a pairing code first")
                    .await;
                self.emit_event(ScannerEvent::ScanRejected { payload: reference })
                    .await;
                Ok(())
            }

            DomainDecision::ClearPairing => {
                if let Err(e) = self.pairing_store.clear().await {
                    warn!(error = %e, "pairing record not cleared");
                }
                self.notify(NoticeKind::Info, "Scanner unpaired").await;
                self.emit_event(ScannerEvent::Unpaired).await;
                Ok(())
            }
        }
    }

    /// Haptic acknowledgement of an accepted scan, best-effort.
    async fn ack_scan(&self) {
        if let Err(e) = self.notifier.vibrate(self.config.ack_vibrate_ms).await {
            debug!(error = %e, "haptic ack unavailable");
        }
    }

    async fn notify(&self, kind: NoticeKind, message: &str) {
        if let Err(e) = self.notifier.notify(kind, message).await {
            debug!(error = %e, "notifier unavailable");
        }
    }

    async fn emit_event(&self, event: ScannerEvent) {
        let senders = { self.event_senders.lock().await.clone() };
        for sender in senders {
            if sender.send(event.clone()).await.is_err() {
                debug!("scanner event receiver dropped");
            }
        }
    }
}

#[async_trait]
impl ScannerEventPort for ScannerOrchestrator {
    async fn subscribe(&self) -> Result<mpsc::Receiver<ScannerEvent>> {
        let (tx, rx) = mpsc::channel(32);
        self.event_senders.lock().await.push(tx);
        Ok(rx)
    }
}
