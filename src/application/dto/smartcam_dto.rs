//! Smartcam setup DTOs.

use std::path::PathBuf;

/// Settings needed to set up the Smartcam platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartcamSettings {
    /// Whether Smartcam cameras are set up at all.
    pub enabled: bool,
    /// Directory holding one cached image per camera.
    pub storage_dir: PathBuf,
}

impl SmartcamSettings {
    /// Creates enabled settings for the given directory.
    #[must_use]
    pub const fn new(storage_dir: PathBuf) -> Self {
        Self {
            enabled: true,
            storage_dir,
        }
    }

    /// Creates disabled settings.
    #[must_use]
    pub const fn disabled(storage_dir: PathBuf) -> Self {
        Self {
            enabled: false,
            storage_dir,
        }
    }
}
