//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Camera services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::SmartcamSettings;
pub use services::{RefreshOutcome, SmartcamImageCache};
pub use use_cases::SetupSmartcamsUseCase;
