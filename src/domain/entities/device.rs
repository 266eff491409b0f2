//! Camera device identity.

use serde::{Deserialize, Serialize};

/// Vendor label identifying a physical Smartcam.
/// Opaque to this crate and fixed for the lifetime of a camera.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceLabel(String);

impl DeviceLabel {
    /// Creates a new `DeviceLabel` from any string-like input.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeviceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DeviceLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DeviceLabel {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
