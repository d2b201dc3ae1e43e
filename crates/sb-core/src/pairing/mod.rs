//! Pairing domain models and state machine.

pub mod domain;
pub mod event;
pub mod state;

pub use domain::PairingDomain;
pub use event::PairingEvent;
pub use state::PairingState;
