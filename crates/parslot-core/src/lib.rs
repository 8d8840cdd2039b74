//! # parslot-core
//!
//! Core types for the parslot parallel for-each pool.
//!
//! This crate is platform-agnostic and contains no threading code.
//! The execution substrate (pool, executor, dispatcher) lives in
//! `parslot-runtime`.
//!
//! ## Modules
//!
//! - `slot` - Slot type and the range partitioning planner
//! - `id` - Worker identifier type
//! - `error` - Error types
//! - `plog` - Leveled stderr logging macros
//! - `env` - Environment variable utilities

pub mod env;
pub mod error;
pub mod id;
pub mod plog;
pub mod slot;

// Re-exports for convenience
pub use env::{env_get, env_get_bool};
pub use error::{ActionError, DispatchError, DispatchResult};
pub use id::WorkerId;
pub use plog::LogLevel;
pub use slot::{partition, Slot};

/// Shared constants
pub mod constants {
    /// Hard cap on pool size, regardless of detected core count
    pub const MAX_WORKERS: usize = 64;
}
