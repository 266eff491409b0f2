//! Smartcam platform setup use case.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::dto::SmartcamSettings;
use crate::application::services::SmartcamImageCache;
use crate::domain::errors::SmartcamError;
use crate::domain::ports::{CameraMetadataPort, ImageSeriesPort, ShutdownRegistry};

/// Creates one image cache per Smartcam on the installation.
pub struct SetupSmartcamsUseCase {
    series: Arc<dyn ImageSeriesPort>,
    metadata: Arc<dyn CameraMetadataPort>,
    shutdown: Arc<dyn ShutdownRegistry>,
}

impl SetupSmartcamsUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(
        series: Arc<dyn ImageSeriesPort>,
        metadata: Arc<dyn CameraMetadataPort>,
        shutdown: Arc<dyn ShutdownRegistry>,
    ) -> Self {
        Self {
            series,
            metadata,
            shutdown,
        }
    }

    /// Sets up the cameras.
    ///
    /// Returns no cameras when the platform is disabled.
    ///
    /// # Errors
    /// Returns `Configuration` if the storage directory cannot be read and
    /// written. No camera is created in that case.
    pub fn execute(
        &self,
        settings: &SmartcamSettings,
    ) -> Result<Vec<SmartcamImageCache>, SmartcamError> {
        if !settings.enabled {
            info!("Smartcam platform disabled");
            return Ok(Vec::new());
        }

        if let Err(e) = validate_storage_dir(&settings.storage_dir) {
            error!(error = %e, "Smartcam storage directory rejected");
            return Err(e);
        }

        let cameras: Vec<_> = self
            .metadata
            .camera_labels()
            .into_iter()
            .map(|device| {
                debug!(device = %device, "Adding Smartcam");
                SmartcamImageCache::new(
                    device,
                    settings.storage_dir.clone(),
                    Arc::clone(&self.series),
                    Arc::clone(&self.metadata),
                    self.shutdown.as_ref(),
                )
            })
            .collect();

        info!(
            count = cameras.len(),
            dir = %settings.storage_dir.display(),
            "Smartcam platform ready"
        );
        Ok(cameras)
    }
}

/// Checks that `dir` is a directory we can list and create files in.
fn validate_storage_dir(dir: &Path) -> Result<(), SmartcamError> {
    let meta = std::fs::metadata(dir)
        .map_err(|e| SmartcamError::configuration(dir, format!("cannot access: {e}")))?;
    if !meta.is_dir() {
        return Err(SmartcamError::configuration(dir, "not a directory"));
    }

    std::fs::read_dir(dir)
        .map_err(|e| SmartcamError::configuration(dir, format!("not readable: {e}")))?;

    tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| SmartcamError::configuration(dir, format!("not writable: {e}")))?;

    Ok(())
}
