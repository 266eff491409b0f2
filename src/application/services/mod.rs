pub mod smartcam_cache;

pub use smartcam_cache::{RefreshOutcome, SmartcamImageCache};
