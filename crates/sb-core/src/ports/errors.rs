use thiserror::Error;

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("no camera device available")]
    NoCameraFound,

    #[error("camera permission denied")]
    PermissionDenied,
}

/// Transient backing-store failure during session creation, publish or
/// subscribe. Propagated to the caller; the core never retries.
#[derive(Debug, Error)]
pub enum RelayStoreError {
    #[error("relay store unavailable: {0}")]
    Unavailable(String),
}

/// Local pairing store failure. Non-fatal to callers: pairing simply
/// does not persist across a reload.
#[derive(Debug, Error)]
pub enum PairingStoreError {
    #[error("pairing storage error: {0}")]
    Storage(String),
}
