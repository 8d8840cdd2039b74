//! Parallel for-each dispatcher
//!
//! The public entry point. One `for_each` call partitions the index
//! range, checks a worker out of the pool per slot, submits each slot
//! to the shared executor, then drains every completion handle and
//! returns each worker to the pool before surfacing any failure.
//!
//! Entry serialization: the whole partition/submit/drain section runs
//! under a mutex, so only one call is in the critical section at a
//! time and the pool of exactly P workers is never over-requested.
//! Concurrent callers queue. This trades inter-call concurrency for a
//! trivially bounded pool.

use std::mem;
use std::sync::Mutex;

use parslot_core::{partition, pdebug, pinfo, ptrace, pwarn, DispatchError, DispatchResult};

use crate::completion::{completion_pair, SlotCompletion};
use crate::config::DispatcherConfig;
use crate::executor::{FixedExecutor, Job};
use crate::pool::WorkerPool;

/// Fixed-size parallel for-each pool.
///
/// Construct once, share by reference. Both the executor threads and
/// the worker pool live as long as the dispatcher.
pub struct Dispatcher {
    pool: WorkerPool,
    executor: FixedExecutor,
    entry: Mutex<()>,
    workers: usize,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("workers", &self.workers)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Build a dispatcher from a validated configuration.
    pub fn new(config: DispatcherConfig) -> DispatchResult<Self> {
        config.validate()?;
        let workers = config.workers;
        pinfo!("dispatcher: {} workers ({})", workers, config.thread_name);

        Ok(Dispatcher {
            pool: WorkerPool::new(workers),
            executor: FixedExecutor::new(workers, &config.thread_name),
            entry: Mutex::new(()),
            workers,
        })
    }

    /// Pool size P
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Workers currently sitting idle in the pool.
    ///
    /// Outside a `for_each` call this always equals [`workers`](Self::workers).
    #[inline]
    pub fn idle_workers(&self) -> usize {
        self.pool.idle_count()
    }

    /// Apply `action` to every element of `elements` in parallel.
    ///
    /// Blocks until every element has been visited. Elements within
    /// one slot are visited in increasing index order; slots complete
    /// in no particular order relative to each other. The action may
    /// mutate external state, but making that state concurrency-safe
    /// is the caller's responsibility.
    ///
    /// If actions panic, every failure is collected and returned as
    /// [`DispatchError::ActionFailed`] after all slots have been
    /// drained; elements of other slots may or may not have been
    /// visited by then.
    pub fn for_each<E, F>(&self, elements: &[E], action: F) -> DispatchResult<()>
    where
        E: Sync,
        F: Fn(&E) + Sync,
    {
        let _entry = self.entry.lock().unwrap();

        let n = elements.len();
        let plan = partition(n, self.workers);
        if plan.is_empty() {
            return Ok(());
        }
        pdebug!("for_each: n={} slots={}", n, plan.len());

        let mut pending = Vec::with_capacity(plan.len());
        for slot in plan {
            let worker = self.pool.checkout();
            let task = worker.assign(slot, elements, &action);
            ptrace!("submit slot {}", task.slot());
            let (done, handle) = completion_pair();

            let job: Box<dyn FnOnce() + Send + '_> = Box::new(move || {
                let (worker, result) = task.run();
                done.fill(SlotCompletion { worker, result });
            });
            // Safety: the job borrows `elements` and `action`, which
            // outlive it because this call never returns before every
            // pending handle below has been drained, on every path.
            let job: Job = unsafe { mem::transmute(job) };

            self.executor.submit(job);
            pending.push(handle);
        }

        let mut failures = Vec::new();
        for handle in pending {
            let SlotCompletion { worker, result } = handle.wait();
            if let Err(err) = result {
                pwarn!("{}", err);
                failures.push(err);
            }
            self.pool.checkin(worker);
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::ActionFailed(failures))
        }
    }

    /// Apply `action` to every element of any finite collection.
    ///
    /// Buffers the iterator into a `Vec`, then runs [`for_each`](Self::for_each).
    pub fn for_each_iter<E, I, F>(&self, elements: I, action: F) -> DispatchResult<()>
    where
        I: IntoIterator<Item = E>,
        E: Sync,
        F: Fn(&E) + Sync,
    {
        let buffered: Vec<E> = elements.into_iter().collect();
        self.for_each(&buffered, action)
    }
}
