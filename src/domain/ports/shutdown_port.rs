//! Port for registering process shutdown callbacks.

use crate::domain::errors::SmartcamError;

/// Callback run once when the host shuts down.
pub type ShutdownHook = Box<dyn FnOnce() -> Result<(), SmartcamError> + Send>;

/// Registry of shutdown callbacks.
pub trait ShutdownRegistry: Send + Sync {
    /// Registers a callback to run on normal shutdown.
    fn register(&self, hook: ShutdownHook);
}
