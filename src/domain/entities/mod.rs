//! Domain entity definitions.

mod device;
mod image;

pub use device::DeviceLabel;
pub use image::{IMAGE_EXTENSION, IN_PROGRESS_IMAGE_ID, SmartcamImageId};
