//! Single-slot image cache for one Smartcam.
//!
//! Every read asks the vendor session for the newest capture of the device.
//! A new capture is downloaded to `<storage_dir>/<image_id>.jpg` before the
//! previous file is removed, so a failed download keeps the old image
//! servable. At most one file per camera lives in the storage directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::domain::entities::{DeviceLabel, SmartcamImageId};
use crate::domain::errors::SmartcamError;
use crate::domain::ports::{CameraMetadataPort, CameraPort, ImageSeriesPort, ShutdownRegistry};

/// Result of a single refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The vendor lists no capture for this camera yet.
    Empty,
    /// The newest capture is still being processed.
    Pending,
    /// The newest capture is already cached.
    Unchanged,
    /// A new capture was downloaded and replaced the cached one.
    Downloaded(SmartcamImageId),
}

/// Currently cached capture.
#[derive(Debug, Default, Clone)]
struct CacheSlot {
    image_id: Option<SmartcamImageId>,
    image_path: Option<PathBuf>,
}

/// Read-through cache of size one for a single camera.
pub struct SmartcamImageCache {
    device: DeviceLabel,
    storage_dir: PathBuf,
    series: Arc<dyn ImageSeriesPort>,
    metadata: Arc<dyn CameraMetadataPort>,
    slot: Arc<Mutex<CacheSlot>>,
    refresh_gate: tokio::sync::Mutex<()>,
}

impl SmartcamImageCache {
    /// Creates an empty cache and registers its shutdown cleanup.
    #[must_use]
    pub fn new(
        device: DeviceLabel,
        storage_dir: PathBuf,
        series: Arc<dyn ImageSeriesPort>,
        metadata: Arc<dyn CameraMetadataPort>,
        shutdown: &dyn ShutdownRegistry,
    ) -> Self {
        let slot = Arc::new(Mutex::new(CacheSlot::default()));

        let hook_slot = Arc::clone(&slot);
        let hook_device = device.clone();
        shutdown.register(Box::new(move || {
            debug!(device = %hook_device, "Removing cached image on shutdown");
            evict(&hook_slot)
        }));

        Self {
            device,
            storage_dir,
            series,
            metadata,
            slot,
            refresh_gate: tokio::sync::Mutex::new(()),
        }
    }

    /// Device served by this cache.
    #[must_use]
    pub fn device(&self) -> &DeviceLabel {
        &self.device
    }

    /// Id of the cached capture, if any.
    #[must_use]
    pub fn current_image_id(&self) -> Option<SmartcamImageId> {
        self.slot.lock().image_id.clone()
    }

    /// Path of the cached capture, if any. The file may have been removed.
    #[must_use]
    pub fn current_image_path(&self) -> Option<PathBuf> {
        self.slot.lock().image_path.clone()
    }

    /// Area name of the camera, looked up on every call.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.metadata.area_name(&self.device)
    }

    /// Brings the cache in line with the newest capture listed by the vendor.
    ///
    /// # Errors
    /// Returns `ProviderUnavailable` if updating, listing or downloading fails,
    /// or if the newest id is not a plain file name; the cached capture is left
    /// untouched. Returns `LocalIo` if the previous file cannot be removed, in
    /// which case the cache keeps pointing at it.
    pub async fn refresh(&self) -> Result<RefreshOutcome, SmartcamError> {
        let _gate = self.refresh_gate.lock().await;

        self.series.update_image_series().await?;
        let image_ids = self.series.image_ids(&self.device).await?;

        let Some(newest) = image_ids.into_iter().next() else {
            debug!(device = %self.device, "No images listed yet");
            return Ok(RefreshOutcome::Empty);
        };

        if newest.is_in_progress() {
            debug!(device = %self.device, "Newest image is still being processed");
            return Ok(RefreshOutcome::Pending);
        }

        if self.slot.lock().image_id.as_ref() == Some(&newest) {
            debug!(device = %self.device, image_id = %newest, "Image unchanged");
            return Ok(RefreshOutcome::Unchanged);
        }

        if !newest.is_plain_file_stem() {
            warn!(device = %self.device, image_id = %newest, "Rejecting unsafe image id");
            return Err(SmartcamError::provider(format!(
                "image id {newest:?} is not a plain file name"
            )));
        }

        let new_path = newest.cache_path(&self.storage_dir);
        info!(
            device = %self.device,
            image_id = %newest,
            path = %new_path.display(),
            "Downloading new image"
        );
        self.series
            .download_image(&self.device, &newest, &new_path)
            .await?;

        self.delete_cached_image().await?;

        let mut slot = self.slot.lock();
        slot.image_id = Some(newest.clone());
        slot.image_path = Some(new_path);

        Ok(RefreshOutcome::Downloaded(newest))
    }

    /// Reads the cached capture without contacting the vendor.
    ///
    /// # Errors
    /// Returns `LocalIo` if the file exists but cannot be read.
    pub async fn cached_image(&self) -> Result<Option<Bytes>, SmartcamError> {
        let Some(path) = self.current_image_path() else {
            debug!(device = %self.device, "No image to display");
            return Ok(None);
        };

        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(Bytes::from(bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(device = %self.device, path = %path.display(), "Cached image is missing");
                Ok(None)
            }
            Err(e) => Err(SmartcamError::local_io(&path, e)),
        }
    }

    /// Refreshes, then returns the cached capture.
    ///
    /// # Errors
    /// Propagates refresh and read failures to the caller.
    pub async fn camera_image(&self) -> Result<Option<Bytes>, SmartcamError> {
        self.refresh().await?;
        self.cached_image().await
    }

    /// Removes the cached file. A file that is already gone is not an error.
    ///
    /// # Errors
    /// Returns `LocalIo` for any other filesystem failure.
    pub async fn delete_cached_image(&self) -> Result<(), SmartcamError> {
        let Some(path) = self.current_image_path() else {
            return Ok(());
        };
        removal_result(&path, fs::remove_file(&path).await)
    }
}

#[async_trait]
impl CameraPort for SmartcamImageCache {
    fn device(&self) -> &DeviceLabel {
        &self.device
    }

    fn name(&self) -> Option<String> {
        SmartcamImageCache::name(self)
    }

    async fn camera_image(&self) -> Option<Bytes> {
        if let Err(e) = self.refresh().await {
            warn!(device = %self.device, error = %e, "Refresh failed, serving cached image");
        }

        match self.cached_image().await {
            Ok(image) => image,
            Err(e) => {
                warn!(device = %self.device, error = %e, "Failed to read cached image");
                None
            }
        }
    }
}

/// Removes the slot's file from a synchronous shutdown hook, keeping the
/// pointers as they are.
fn evict(slot: &Mutex<CacheSlot>) -> Result<(), SmartcamError> {
    let Some(path) = slot.lock().image_path.clone() else {
        return Ok(());
    };
    removal_result(&path, std::fs::remove_file(&path))
}

fn removal_result(path: &Path, result: std::io::Result<()>) -> Result<(), SmartcamError> {
    match result {
        Ok(()) => {
            info!(path = %path.display(), "Deleted old image");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SmartcamError::local_io(path, e)),
    }
}
