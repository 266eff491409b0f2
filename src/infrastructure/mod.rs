//! Infrastructure layer with vendor, configuration and lifecycle adapters.

/// Application configuration.
pub mod config;
/// Process shutdown hooks.
pub mod lifecycle;
/// Vendor session adapters.
pub mod vendor;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigLoader, LogLevel};
pub use lifecycle::ShutdownHooks;
pub use vendor::{Overview, ReplaySession};
