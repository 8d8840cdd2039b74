//! Dispatcher configuration

use parslot_core::constants::MAX_WORKERS;
use parslot_core::{env_get, DispatchError, DispatchResult};

/// Configuration for a [`Dispatcher`](crate::Dispatcher).
///
/// The default worker count is the detected logical core count,
/// overridable with `PSL_WORKERS`, clamped to `1..=MAX_WORKERS`.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Number of pool workers and executor threads (P)
    pub workers: usize,

    /// Name prefix for executor threads
    pub thread_name: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        let num_cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        Self {
            // A bad PSL_WORKERS value must not make the default config
            // invalid; clamp both ends.
            workers: env_get("PSL_WORKERS", num_cpus).clamp(1, MAX_WORKERS),
            thread_name: "parslot-exec".to_string(),
        }
    }
}

impl DispatcherConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of workers
    pub fn workers(mut self, n: usize) -> Self {
        self.workers = n.min(MAX_WORKERS);
        self
    }

    /// Set the executor thread name prefix
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Validate the configuration.
    ///
    /// Runs before any thread is spawned or worker created, so a
    /// rejected configuration leaves nothing to clean up.
    pub fn validate(&self) -> DispatchResult<()> {
        if self.workers == 0 {
            return Err(DispatchError::InvalidArgument("workers must be at least 1"));
        }
        if self.workers > MAX_WORKERS {
            return Err(DispatchError::InvalidArgument("workers exceeds maximum"));
        }
        if self.thread_name.is_empty() {
            return Err(DispatchError::InvalidArgument("thread name must not be empty"));
        }
        Ok(())
    }
}
