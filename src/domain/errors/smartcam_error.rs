//! Smartcam error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Smartcam error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SmartcamError {
    #[error("storage directory {} is not usable: {reason}", path.display())]
    Configuration { path: PathBuf, reason: String },

    #[error("vendor session unavailable: {message}")]
    ProviderUnavailable { message: String },

    #[error("local I/O error on {}: {source}", path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SmartcamError {
    /// Creates configuration error.
    #[must_use]
    pub fn configuration(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Creates provider unavailable error.
    #[must_use]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            message: message.into(),
        }
    }

    /// Creates local I/O error.
    #[must_use]
    pub fn local_io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::LocalIo {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns whether a later retry may succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::ProviderUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_provider_errors_are_recoverable() {
        assert!(SmartcamError::provider("timeout").is_recoverable());
        assert!(!SmartcamError::configuration("/nope", "missing").is_recoverable());
        assert!(
            !SmartcamError::local_io("/x.jpg", std::io::Error::other("disk")).is_recoverable()
        );
    }

    #[test]
    fn test_display_includes_path() {
        let err = SmartcamError::configuration("/srv/cams", "not writable");
        assert_eq!(
            err.to_string(),
            "storage directory /srv/cams is not usable: not writable"
        );
    }
}
