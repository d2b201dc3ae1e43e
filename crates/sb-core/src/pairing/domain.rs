use tracing::debug;

use super::{PairingEvent, PairingState};
use crate::decision::DomainDecision;

/// Pure pairing domain: folds classified-scan facts into the pairing
/// state and returns the business decision for the application layer
/// to execute.
pub struct PairingDomain {
    state: PairingState,
}

impl PairingDomain {
    pub fn new() -> Self {
        Self {
            state: PairingState::Unpaired,
        }
    }

    pub fn state(&self) -> &PairingState {
        &self.state
    }

    pub fn apply(&mut self, event: PairingEvent) -> DomainDecision {
        match (&self.state, event) {
            // Pairing payloads always win, even while already paired:
            // last writer takes the device to the new session.
            (_, PairingEvent::PairingPayloadDecoded { session_id }) => {
                debug!(session_id = %session_id, "pairing payload accepted");
                self.state = PairingState::Paired {
                    session_id: session_id.clone(),
                };
                DomainDecision::EstablishPairing { session_id }
            }

            (PairingState::Unpaired, PairingEvent::PairingRestored { session_id }) => {
                self.state = PairingState::Paired {
                    session_id: session_id.clone(),
                };
                DomainDecision::ResumePairing { session_id }
            }

            // A live pairing outranks a stale record read at startup.
            (PairingState::Paired { .. }, PairingEvent::PairingRestored { .. }) => {
                DomainDecision::Ignore
            }

            (PairingState::Paired { session_id }, PairingEvent::ProductPayloadDecoded { reference }) => {
                DomainDecision::PublishScan {
                    session_id: session_id.clone(),
                    reference,
                }
            }

            (PairingState::Unpaired, PairingEvent::ProductPayloadDecoded { reference }) => {
                DomainDecision::RejectScan { reference }
            }

            (PairingState::Paired { .. }, PairingEvent::UserUnpaired) => {
                debug!("pairing cleared by user");
                self.state = PairingState::Unpaired;
                DomainDecision::ClearPairing
            }

            (PairingState::Unpaired, PairingEvent::UserUnpaired) => DomainDecision::Ignore,
        }
    }
}

impl Default for PairingDomain {
    fn default() -> Self {
        Self::new()
    }
}
