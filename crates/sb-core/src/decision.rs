use crate::ids::SessionId;

/// The unified business decision the domain hands back to the
/// application layer.
///
/// Contains no IO, no async, no clock reads; the orchestrator executes
/// whatever side effects the decision calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainDecision {
    /// Nothing to do.
    Ignore,

    /// Pairing was established (or re-established with a new session);
    /// persist the record and announce `Paired`.
    EstablishPairing { session_id: SessionId },

    /// Pairing from a previous run was restored; announce `Paired`
    /// without rewriting the record.
    ResumePairing { session_id: SessionId },

    /// A product scan was accepted while paired; publish it on the
    /// relay and acknowledge the scan.
    PublishScan {
        session_id: SessionId,
        reference: String,
    },

    /// A product scan arrived while unpaired; inform the user, publish
    /// nothing.
    RejectScan { reference: String },

    /// The user unpaired; delete the record and announce `Unpaired`.
    ClearPairing,
}
