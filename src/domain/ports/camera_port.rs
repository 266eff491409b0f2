//! Port exposed to the host platform for each camera.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::entities::DeviceLabel;

/// Still-image camera as seen by the host.
#[async_trait]
pub trait CameraPort: Send + Sync {
    /// Device this camera represents.
    fn device(&self) -> &DeviceLabel;

    /// Human-readable camera name.
    fn name(&self) -> Option<String>;

    /// Latest image bytes, or `None` when nothing can be served.
    /// Never fails; errors are logged by the implementation.
    async fn camera_image(&self) -> Option<Bytes>;
}
