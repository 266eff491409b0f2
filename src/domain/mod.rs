//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{DeviceLabel, SmartcamImageId};
pub use errors::SmartcamError;
pub use ports::{CameraMetadataPort, CameraPort, ImageSeriesPort, ShutdownHook, ShutdownRegistry};
