use serde::{Deserialize, Serialize};

use crate::ids::SessionId;

/// Pairing state of a secondary (scanner) device.
///
/// Design principle: this is a pure type state machine with only state
/// definitions and inspection helpers. Persistence, relay publishing and
/// notifications are handled by the application layer (sb-app).
///
/// State transitions:
/// ```text
///   Unpaired
///    │ decoded pairing payload
///    ▼
///   Paired { session_id }
///    │ explicit unpair (user action)
///    ▼
///   Unpaired
/// ```
///
/// A pairing payload decoded while already `Paired` re-pairs to the new
/// session (last writer wins). A restart re-enters `Paired` from the
/// local pairing store without rescanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairingState {
    /// Not joined to any session; product scans cannot be relayed.
    Unpaired,

    /// Joined to a session; product scans are published against it.
    Paired { session_id: SessionId },
}

impl PairingState {
    pub fn is_paired(&self) -> bool {
        matches!(self, Self::Paired { .. })
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        match self {
            Self::Paired { session_id } => Some(session_id),
            Self::Unpaired => None,
        }
    }
}

impl Default for PairingState {
    fn default() -> Self {
        Self::Unpaired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unpaired() {
        assert_eq!(PairingState::default(), PairingState::Unpaired);
        assert!(!PairingState::default().is_paired());
    }

    #[test]
    fn test_paired_exposes_session_id() {
        let state = PairingState::Paired {
            session_id: SessionId::from("s1"),
        };
        assert!(state.is_paired());
        assert_eq!(state.session_id(), Some(&SessionId::from("s1")));
    }
}
