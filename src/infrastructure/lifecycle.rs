//! Process shutdown hooks.

use parking_lot::Mutex;
use tracing::{debug, error};

use crate::domain::errors::SmartcamError;
use crate::domain::ports::{ShutdownHook, ShutdownRegistry};

/// Explicit registry of callbacks run when the process stops normally.
#[derive(Default)]
pub struct ShutdownHooks {
    hooks: Mutex<Vec<ShutdownHook>>,
}

impl ShutdownHooks {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of pending hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.lock().len()
    }

    /// Returns true if no hook is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs every pending hook once, in registration order.
    ///
    /// All hooks run even if some fail.
    ///
    /// # Errors
    /// Returns the first hook failure.
    pub fn fire(&self) -> Result<(), SmartcamError> {
        let hooks = std::mem::take(&mut *self.hooks.lock());
        debug!(count = hooks.len(), "Running shutdown hooks");

        let mut first_error = None;
        for hook in hooks {
            if let Err(e) = hook() {
                error!(error = %e, "Shutdown hook failed");
                first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}

impl ShutdownRegistry for ShutdownHooks {
    fn register(&self, hook: ShutdownHook) {
        self.hooks.lock().push(hook);
    }
}
