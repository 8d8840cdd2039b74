//! Reusable slotted worker
//!
//! A [`SlottedWorker`] is a pool-owned descriptor that executes a user
//! action over one contiguous index range per call. Reassignment is
//! expressed through ownership instead of a mutable `reset`: `assign`
//! consumes the idle worker and yields a [`SlotTask`]; running the task
//! gives the worker back. A worker that is in flight cannot be
//! reassigned because nobody else holds it.

use std::panic::{self, AssertUnwindSafe};

use parslot_core::{ActionError, Slot, WorkerId};

/// A reusable worker drawn from the pool.
///
/// Holding a `SlottedWorker` by value *is* the idle state.
#[derive(Debug)]
pub struct SlottedWorker {
    id: WorkerId,
    completed: u64,
}

impl SlottedWorker {
    /// Create a fresh worker. Only the pool does this.
    pub(crate) fn new(id: WorkerId) -> Self {
        SlottedWorker { id, completed: 0 }
    }

    /// This worker's pool id
    #[inline]
    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// Number of slots this worker has executed since pool creation
    #[inline]
    pub fn completed_slots(&self) -> u64 {
        self.completed
    }

    /// Assign a slot, consuming the idle worker into a runnable task.
    ///
    /// `slot` must lie within `elements`; the dispatcher's partition
    /// planner guarantees this.
    pub fn assign<'a, E, F>(self, slot: Slot, elements: &'a [E], action: &'a F) -> SlotTask<'a, E, F>
    where
        F: Fn(&E),
    {
        debug_assert!(slot.end <= elements.len(), "slot out of bounds");
        SlotTask {
            worker: self,
            slot,
            elements,
            action,
        }
    }
}

/// A worker with an assigned slot, ready to run on an executor thread.
pub struct SlotTask<'a, E, F> {
    worker: SlottedWorker,
    slot: Slot,
    elements: &'a [E],
    action: &'a F,
}

impl<'a, E, F> SlotTask<'a, E, F>
where
    F: Fn(&E),
{
    /// The assigned range
    #[inline]
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Execute the action over the assigned range in increasing index
    /// order, returning the worker together with the slot result.
    ///
    /// A panic from the action aborts the remainder of this slot only;
    /// it is caught here and reported as an [`ActionError`] so the
    /// worker always makes it back to the pool.
    pub fn run(self) -> (SlottedWorker, Result<(), ActionError>) {
        let SlotTask {
            mut worker,
            slot,
            elements,
            action,
        } = self;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            for element in &elements[slot.start..slot.end] {
                action(element);
            }
        }));

        worker.completed = worker.completed.wrapping_add(1);

        match outcome {
            Ok(()) => (worker, Ok(())),
            Err(payload) => {
                let err = ActionError::from_panic(worker.id, slot, payload);
                (worker, Err(err))
            }
        }
    }
}
