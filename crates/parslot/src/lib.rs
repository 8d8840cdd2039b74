//! # parslot - Parallel Slotted for-each
//!
//! Apply a function to every element of a slice, in parallel, over a
//! bounded pool of reusable workers. No thread is created per call:
//! the pool of P executor threads and P slotted workers is built once
//! and shared by every call.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Mutex;
//!
//! let words = vec!["foo", "bar", "baz"];
//! let sink = Mutex::new(Vec::new());
//!
//! parslot::for_each(&words, |w| {
//!     sink.lock().unwrap().push(w.len());
//! }).unwrap();
//!
//! assert_eq!(sink.into_inner().unwrap().len(), 3);
//! ```
//!
//! Or construct a dispatcher explicitly:
//!
//! ```ignore
//! use parslot::{Dispatcher, DispatcherConfig};
//!
//! let d = Dispatcher::new(DispatcherConfig::default().workers(4)).unwrap();
//! d.for_each(&[1, 2, 3], |n| println!("{}", n)).unwrap();
//! ```
//!
//! ## How a call runs
//!
//! ```text
//! caller ──► Dispatcher ──► partition [0, n) into ≤ P slots
//!                │
//!                ├─ per slot: checkout worker, assign, submit
//!                ▼
//!          FixedExecutor (P threads) runs slots concurrently
//!                │
//!                ▼
//!          drain completion handles, checkin workers
//!                │
//!                ▼
//!          caller resumes (all elements visited)
//! ```
//!
//! Callers are serialized: one partition/submit/drain cycle runs at a
//! time per dispatcher, so the pool of exactly P workers is never
//! over-requested. Elements within one slot are visited in increasing
//! index order; nothing is guaranteed between slots.

use std::sync::OnceLock;

// Re-export core types
pub use parslot_core::{
    partition, ActionError, DispatchError, DispatchResult, LogLevel, Slot, WorkerId,
};

// Re-export logging macros and controls
pub use parslot_core::plog::{init as init_logging, set_log_level};
pub use parslot_core::{pdebug, perror, pinfo, ptrace, pwarn};

// Re-export runtime types
pub use parslot_runtime::{Dispatcher, DispatcherConfig, SlotTask, SlottedWorker, WorkerPool};

/// Process-wide dispatcher backing the free functions
static GLOBAL: OnceLock<Dispatcher> = OnceLock::new();

/// Configure the process-wide dispatcher before first use.
///
/// Fails with `InvalidArgument` if the configuration is invalid or the
/// global dispatcher was already built (by a prior `init` or a prior
/// free-function call).
pub fn init(config: DispatcherConfig) -> DispatchResult<()> {
    let dispatcher = Dispatcher::new(config)?;
    GLOBAL
        .set(dispatcher)
        .map_err(|_| DispatchError::InvalidArgument("global dispatcher already initialized"))
}

/// The process-wide dispatcher, built with defaults on first use.
pub fn global() -> &'static Dispatcher {
    GLOBAL.get_or_init(|| {
        // The default configuration always has >= 1 worker.
        Dispatcher::new(DispatcherConfig::default()).expect("default dispatcher configuration")
    })
}

/// Apply `action` to every element of `elements` in parallel, using
/// the process-wide dispatcher. Blocks until every element has been
/// visited. See [`Dispatcher::for_each`].
pub fn for_each<E, F>(elements: &[E], action: F) -> DispatchResult<()>
where
    E: Sync,
    F: Fn(&E) + Sync,
{
    global().for_each(elements, action)
}

/// Apply `action` to every element of any finite collection, using
/// the process-wide dispatcher. See [`Dispatcher::for_each_iter`].
pub fn for_each_iter<E, I, F>(elements: I, action: F) -> DispatchResult<()>
where
    I: IntoIterator<Item = E>,
    E: Sync,
    F: Fn(&E) + Sync,
{
    global().for_each_iter(elements, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_three_foos() {
        let input = vec!["Foo".to_string(), "Foo".to_string(), "Foo".to_string()];
        let sink = Mutex::new(Vec::new());

        for_each(&input, |s| sink.lock().unwrap().push(s.clone())).unwrap();

        let out = sink.into_inner().unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|s| s == "Foo"));
    }

    #[test]
    fn test_explicit_dispatcher_roundtrip() {
        // A private dispatcher, so idle counts cannot race with other
        // tests sharing the global one.
        let d = Dispatcher::new(DispatcherConfig::default().workers(3)).unwrap();
        let input: Vec<u32> = (0..100).collect();

        let count = AtomicUsize::new(0);
        d.for_each(&input, |_| {
            count.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 100);
        assert_eq!(d.idle_workers(), d.workers());
    }

    #[test]
    fn test_for_each_iter_over_collection() {
        let input: std::collections::BTreeSet<u32> = (0..50).collect();
        let sum = AtomicUsize::new(0);

        for_each_iter(input, |e| {
            sum.fetch_add(*e as usize, Ordering::SeqCst);
        })
        .unwrap();

        assert_eq!(sum.load(Ordering::SeqCst), (0..50).sum::<u32>() as usize);
    }

    #[test]
    fn test_large_input_exact_count() {
        let input = vec![0_u8; 200_000];
        let count = AtomicUsize::new(0);

        for_each(&input, |_| {
            count.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        assert_eq!(count.load(Ordering::Relaxed), 200_000);
    }
}
