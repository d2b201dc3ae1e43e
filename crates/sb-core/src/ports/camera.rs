use async_trait::async_trait;

use super::errors::CameraError;
use crate::camera::CameraDevice;

/// Platform media-device enumeration on the scanning device.
#[async_trait]
pub trait CameraPort: Send + Sync {
    /// Enumerate cameras in platform order. Fails with
    /// `PermissionDenied` when the platform refuses media access;
    /// recoverable only by the user granting permission and retrying.
    async fn list_devices(&self) -> Result<Vec<CameraDevice>, CameraError>;
}
