//! Port definition for camera metadata lookups.

use crate::domain::entities::DeviceLabel;

/// Port for reading camera metadata from the vendor overview.
#[cfg_attr(test, mockall::automock)]
pub trait CameraMetadataPort: Send + Sync {
    /// Labels of every image-capable camera on the installation.
    fn camera_labels(&self) -> Vec<DeviceLabel>;

    /// Area the camera is installed in, if the device is known.
    fn area_name(&self, device: &DeviceLabel) -> Option<String>;
}
