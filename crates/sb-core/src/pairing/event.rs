use crate::ids::SessionId;

/// Facts the pairing domain reacts to.
///
/// Each variant describes something that has already happened, never a
/// command: a frame was decoded and classified, a record was read from
/// the local store, the user acted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingEvent {
    /// A decoded frame classified as a pairing payload.
    PairingPayloadDecoded { session_id: SessionId },

    /// A decoded frame classified as a product reference.
    ProductPayloadDecoded { reference: String },

    /// A pairing record from a previous run was read at startup.
    PairingRestored { session_id: SessionId },

    /// The user explicitly unpaired the device.
    UserUnpaired,
}
