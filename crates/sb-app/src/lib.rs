//! ScanBridge Application Orchestration Layer
//!
//! This crate contains business logic use cases and runtime orchestration
//! for the device-pairing and scan-relay subsystem.

pub mod events;
pub mod usecases;

pub use events::{ScannerEvent, ScannerEventPort};
