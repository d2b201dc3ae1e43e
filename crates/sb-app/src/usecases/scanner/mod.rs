pub mod orchestrator;
pub mod select_camera;

pub use orchestrator::{ScannerConfig, ScannerOrchestrator};
pub use select_camera::SelectCamera;
