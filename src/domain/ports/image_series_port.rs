//! Port definition for the vendor's Smartcam image series.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::entities::{DeviceLabel, SmartcamImageId};
use crate::domain::errors::SmartcamError;

/// Port for listing and downloading Smartcam captures.
#[async_trait]
pub trait ImageSeriesPort: Send + Sync {
    /// Asks the vendor session to refresh its image series.
    async fn update_image_series(&self) -> Result<(), SmartcamError>;

    /// Returns the image ids known for the device, newest first.
    /// An empty list is valid, e.g. before the first capture.
    async fn image_ids(&self, device: &DeviceLabel) -> Result<Vec<SmartcamImageId>, SmartcamError>;

    /// Downloads one capture to `dest`.
    async fn download_image(
        &self,
        device: &DeviceLabel,
        image_id: &SmartcamImageId,
        dest: &Path,
    ) -> Result<(), SmartcamError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Bytes the mock writes for a downloaded capture.
    pub fn image_bytes(image_id: &str) -> Vec<u8> {
        format!("jpeg:{image_id}").into_bytes()
    }

    /// Scripted image series for testing.
    #[derive(Default)]
    pub struct MockImageSeries {
        image_ids: Mutex<Vec<SmartcamImageId>>,
        downloads: Mutex<Vec<SmartcamImageId>>,
        fail_updates: AtomicBool,
        fail_listing: AtomicBool,
        fail_downloads: AtomicBool,
        updates: AtomicUsize,
    }

    impl MockImageSeries {
        /// Creates a series with the given ids, newest first.
        pub fn with_ids(ids: &[&str]) -> Self {
            let series = Self::default();
            series.set_image_ids(ids);
            series
        }

        /// Replaces the listed ids.
        pub fn set_image_ids(&self, ids: &[&str]) {
            *self.image_ids.lock().unwrap() =
                ids.iter().copied().map(SmartcamImageId::from).collect();
        }

        /// Makes series updates fail.
        pub fn set_fail_updates(&self, value: bool) {
            self.fail_updates.store(value, Ordering::SeqCst);
        }

        /// Makes listing fail.
        pub fn set_fail_listing(&self, value: bool) {
            self.fail_listing.store(value, Ordering::SeqCst);
        }

        /// Makes downloads fail.
        pub fn set_fail_downloads(&self, value: bool) {
            self.fail_downloads.store(value, Ordering::SeqCst);
        }

        /// Ids downloaded so far, in order.
        pub fn downloads(&self) -> Vec<SmartcamImageId> {
            self.downloads.lock().unwrap().clone()
        }

        /// Number of series updates requested.
        pub fn update_count(&self) -> usize {
            self.updates.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageSeriesPort for MockImageSeries {
        async fn update_image_series(&self) -> Result<(), SmartcamError> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            if self.fail_updates.load(Ordering::SeqCst) {
                return Err(SmartcamError::provider("mock update failure"));
            }
            Ok(())
        }

        async fn image_ids(
            &self,
            _device: &DeviceLabel,
        ) -> Result<Vec<SmartcamImageId>, SmartcamError> {
            if self.fail_listing.load(Ordering::SeqCst) {
                return Err(SmartcamError::provider("mock listing failure"));
            }
            Ok(self.image_ids.lock().unwrap().clone())
        }

        async fn download_image(
            &self,
            _device: &DeviceLabel,
            image_id: &SmartcamImageId,
            dest: &Path,
        ) -> Result<(), SmartcamError> {
            if self.fail_downloads.load(Ordering::SeqCst) {
                return Err(SmartcamError::provider("mock download failure"));
            }
            tokio::fs::write(dest, image_bytes(image_id.as_str()))
                .await
                .map_err(|e| SmartcamError::local_io(dest, e))?;
            self.downloads.lock().unwrap().push(image_id.clone());
            Ok(())
        }
    }
}
