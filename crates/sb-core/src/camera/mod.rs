//! Camera device model and lens selection heuristic.

pub mod device;
pub mod selector;

pub use device::CameraDevice;
pub use selector::select_scanning_camera;
