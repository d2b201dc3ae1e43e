use std::sync::Arc;
use tracing::debug;

use sb_core::camera::{select_scanning_camera, CameraDevice};
use sb_core::ports::{CameraError, CameraPort};

/// Pick the lens to scan with, without user interaction.
///
/// Runs once at scanner setup time. Enumeration failures (permission
/// denied, zero devices) are fatal for the scanning flow on this
/// device and surface to the user; there is no in-core retry loop.
pub struct SelectCamera {
    camera: Arc<dyn CameraPort>,
}

impl SelectCamera {
    pub fn new(camera: Arc<dyn CameraPort>) -> Self {
        Self { camera }
    }

    pub async fn execute(&self) -> Result<CameraDevice, CameraError> {
        let devices = self.camera.list_devices().await?;
        let selected = select_scanning_camera(&devices)
            .cloned()
            .ok_or(CameraError::NoCameraFound)?;

        debug!(camera = %selected.label, "scanning camera selected");
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedCameras(Vec<CameraDevice>);

    #[async_trait]
    impl CameraPort for FixedCameras {
        async fn list_devices(&self) -> Result<Vec<CameraDevice>, CameraError> {
            Ok(self.0.clone())
        }
    }

    struct DeniedCameras;

    #[async_trait]
    impl CameraPort for DeniedCameras {
        async fn list_devices(&self) -> Result<Vec<CameraDevice>, CameraError> {
            Err(CameraError::PermissionDenied)
        }
    }

    #[tokio::test]
    async fn test_selects_back_wide_lens() {
        let use_case = SelectCamera::new(Arc::new(FixedCameras(vec![
            CameraDevice::new("c1", "Front Camera"),
            CameraDevice::new("c2", "Back Wide Camera"),
            CameraDevice::new("c3", "Back Ultra Wide Camera"),
        ])));

        let selected = use_case.execute().await.unwrap();
        assert_eq!(selected.id, "c2");
    }

    #[tokio::test]
    async fn test_no_devices_is_no_camera_found() {
        let use_case = SelectCamera::new(Arc::new(FixedCameras(vec![])));
        assert!(matches!(
            use_case.execute().await,
            Err(CameraError::NoCameraFound)
        ));
    }

    #[tokio::test]
    async fn test_permission_denied_propagates() {
        let use_case = SelectCamera::new(Arc::new(DeniedCameras));
        assert!(matches!(
            use_case.execute().await,
            Err(CameraError::PermissionDenied)
        ));
    }
}
