//! Use case implementations.

mod setup_smartcams_use_case;

pub use setup_smartcams_use_case::SetupSmartcamsUseCase;
