//! Smartcam image identity.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::string_or_number;

/// Image id the vendor reports while a capture is still being processed.
pub const IN_PROGRESS_IMAGE_ID: &str = "-1";

/// Extension of every cached image file.
pub const IMAGE_EXTENSION: &str = "jpg";

/// Identifier of one captured image in a camera's image series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SmartcamImageId(#[serde(deserialize_with = "string_or_number::deserialize")] String);

impl SmartcamImageId {
    /// Creates a new `SmartcamImageId` from any string-like input.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the placeholder id used for captures still being processed.
    #[must_use]
    pub fn in_progress() -> Self {
        Self::new(IN_PROGRESS_IMAGE_ID)
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the vendor has not finished processing this capture.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.0 == IN_PROGRESS_IMAGE_ID
    }

    /// Returns true if the id can name a file directly inside a directory:
    /// not empty, not `.` or `..`, and free of path separators.
    #[must_use]
    pub fn is_plain_file_stem(&self) -> bool {
        !matches!(self.0.as_str(), "" | "." | "..")
            && !self.0.contains(['/', '\\', '\0'])
            && Path::new(&self.0).is_relative()
    }

    /// File name of the cached copy, `<id>.jpg`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{IMAGE_EXTENSION}", self.0)
    }

    /// Path of the cached copy inside `storage_dir`.
    #[must_use]
    pub fn cache_path(&self, storage_dir: &Path) -> PathBuf {
        storage_dir.join(self.file_name())
    }
}

impl std::fmt::Display for SmartcamImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SmartcamImageId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SmartcamImageId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
