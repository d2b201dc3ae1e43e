//! # sb-core
//!
//! Core domain models and business logic for ScanBridge.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod camera;
pub mod decision;
pub mod ids;
pub mod pairing;
pub mod ports;
pub mod scan;
pub mod session;
pub mod settings;

// Re-export commonly used types at the crate root
pub use camera::CameraDevice;
pub use decision::DomainDecision;
pub use ids::{DeviceId, SessionId};
pub use pairing::{PairingDomain, PairingEvent, PairingState};
pub use scan::{classify, ScanDebouncer, ScanEvent, ScanPayload};
pub use session::Session;
pub use settings::Settings;
