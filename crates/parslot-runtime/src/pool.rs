//! Bounded idle-worker pool
//!
//! Holds exactly `capacity` workers at creation. Checkout removes a
//! worker before submission; checkin returns it after the slot
//! completes. Ownership of a worker moves pool -> executor -> pool,
//! never shared, so at any instant idle + in-flight == capacity.

use std::thread;
use std::time::Duration;

use crossbeam_queue::ArrayQueue;
use parslot_core::WorkerId;

use crate::worker::SlottedWorker;

/// How long checkout sleeps between polls of an empty pool.
///
/// Under the dispatcher's entry serialization the pool is only ever
/// briefly empty, between submitting one slot and draining a prior
/// completion.
const CHECKOUT_POLL: Duration = Duration::from_micros(100);

/// Bounded container of idle workers.
pub struct WorkerPool {
    idle: ArrayQueue<SlottedWorker>,
    capacity: usize,
}

impl WorkerPool {
    /// Create a pool pre-filled with `capacity` fresh workers.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        let idle = ArrayQueue::new(capacity);
        for i in 0..capacity {
            idle.push(SlottedWorker::new(WorkerId::new(i as u32)))
                .expect("queue sized to capacity");
        }
        WorkerPool { idle, capacity }
    }

    /// Total workers owned by this pool (P)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Workers currently idle (not in flight)
    #[inline]
    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    /// Take an idle worker, blocking while none is available.
    pub fn checkout(&self) -> SlottedWorker {
        loop {
            if let Some(worker) = self.try_checkout() {
                return worker;
            }
            thread::park_timeout(CHECKOUT_POLL);
        }
    }

    /// Take an idle worker without blocking.
    pub fn try_checkout(&self) -> Option<SlottedWorker> {
        self.idle.pop()
    }

    /// Return a worker after its slot completed.
    pub fn checkin(&self, worker: SlottedWorker) {
        let returned = self.idle.push(worker);
        debug_assert!(returned.is_ok(), "checkin without matching checkout");
    }
}
