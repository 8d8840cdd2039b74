//! Completion handles for submitted slots
//!
//! Each submitted slot gets a one-shot pair: the executor side fills a
//! [`CompletionSlot`] when the slot task finishes, the dispatcher
//! blocks on the matching [`CompletionHandle`] while draining. The
//! value carried back is the now-idle worker plus the slot's result,
//! so the dispatcher can return the worker to the pool whether the
//! action succeeded or failed.

use std::sync::{Arc, Condvar, Mutex};

use parslot_core::ActionError;

use crate::worker::SlottedWorker;

/// Outcome of one submitted slot
#[derive(Debug)]
pub struct SlotCompletion {
    /// The worker that ran the slot, ready for checkin
    pub worker: SlottedWorker,

    /// `Err` if the user action panicked inside this slot
    pub result: Result<(), ActionError>,
}

struct Shared {
    outcome: Mutex<Option<SlotCompletion>>,
    ready: Condvar,
}

/// Producer side: filled exactly once by the executor thread
pub struct CompletionSlot {
    shared: Arc<Shared>,
}

/// Consumer side: awaited exactly once by the dispatcher
pub struct CompletionHandle {
    shared: Arc<Shared>,
}

/// Create a connected one-shot (producer, consumer) pair.
pub fn completion_pair() -> (CompletionSlot, CompletionHandle) {
    let shared = Arc::new(Shared {
        outcome: Mutex::new(None),
        ready: Condvar::new(),
    });
    (
        CompletionSlot {
            shared: Arc::clone(&shared),
        },
        CompletionHandle { shared },
    )
}

impl CompletionSlot {
    /// Publish the slot outcome and wake the waiting dispatcher.
    pub fn fill(self, completion: SlotCompletion) {
        let mut outcome = self.shared.outcome.lock().unwrap();
        debug_assert!(outcome.is_none(), "completion filled twice");
        *outcome = Some(completion);
        drop(outcome);
        self.shared.ready.notify_one();
    }
}

impl CompletionHandle {
    /// Block until the slot has finished, then take its outcome.
    pub fn wait(self) -> SlotCompletion {
        let mut outcome = self.shared.outcome.lock().unwrap();
        loop {
            if let Some(completion) = outcome.take() {
                return completion;
            }
            outcome = self.shared.ready.wait(outcome).unwrap();
        }
    }

    /// Non-blocking probe, taking the outcome if already present.
    pub fn try_take(self) -> Result<SlotCompletion, CompletionHandle> {
        let taken = self.shared.outcome.lock().unwrap().take();
        match taken {
            Some(completion) => Ok(completion),
            None => Err(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parslot_core::WorkerId;
    use std::thread;
    use std::time::Duration;

    fn worker() -> SlottedWorker {
        SlottedWorker::new(WorkerId::new(0))
    }

    #[test]
    fn test_fill_then_wait() {
        let (slot, handle) = completion_pair();
        slot.fill(SlotCompletion {
            worker: worker(),
            result: Ok(()),
        });

        let completion = handle.wait();
        assert!(completion.result.is_ok());
        assert_eq!(completion.worker.id(), WorkerId::new(0));
    }

    #[test]
    fn test_wait_blocks_until_filled() {
        let (slot, handle) = completion_pair();

        let filler = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            slot.fill(SlotCompletion {
                worker: worker(),
                result: Ok(()),
            });
        });

        let completion = handle.wait();
        assert!(completion.result.is_ok());
        filler.join().unwrap();
    }

    #[test]
    fn test_try_take() {
        let (slot, handle) = completion_pair();

        let handle = match handle.try_take() {
            Ok(_) => panic!("nothing was filled yet"),
            Err(handle) => handle,
        };

        slot.fill(SlotCompletion {
            worker: worker(),
            result: Ok(()),
        });
        assert!(handle.try_take().is_ok());
    }
}
