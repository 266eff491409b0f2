//! Data transfer objects for the application layer.

mod smartcam_dto;

pub use smartcam_dto::SmartcamSettings;
