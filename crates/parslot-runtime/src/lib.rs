//! # parslot-runtime
//!
//! Execution substrate for the parslot parallel for-each pool.
//!
//! ## Modules
//!
//! - `config` - Dispatcher configuration builder
//! - `executor` - Fixed pool of OS threads running submitted jobs
//! - `completion` - One-shot completion handle per submitted slot
//! - `worker` - Reusable slotted worker (type-state: idle vs assigned)
//! - `pool` - Bounded container of idle workers
//! - `dispatcher` - Public `for_each` entry point

pub mod completion;
pub mod config;
pub mod dispatcher;
pub mod executor;
pub mod pool;
pub mod worker;

pub use completion::{CompletionHandle, CompletionSlot, SlotCompletion};
pub use config::DispatcherConfig;
pub use dispatcher::Dispatcher;
pub use executor::FixedExecutor;
pub use pool::WorkerPool;
pub use worker::{SlotTask, SlottedWorker};
