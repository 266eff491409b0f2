mod camera_metadata_port;
mod camera_port;
mod image_series_port;
mod shutdown_port;

pub use camera_metadata_port::CameraMetadataPort;
pub use camera_port::CameraPort;
pub use image_series_port::ImageSeriesPort;
pub use shutdown_port::{ShutdownHook, ShutdownRegistry};
