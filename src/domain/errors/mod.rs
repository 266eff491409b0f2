//! Domain error types.

mod smartcam_error;

pub use smartcam_error::SmartcamError;
