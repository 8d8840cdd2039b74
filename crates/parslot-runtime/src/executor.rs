//! Fixed thread-pool executor
//!
//! A non-resizable pool of named OS threads created once and shared by
//! every `for_each` call. Threads block on a condvar while the job
//! queue is empty and exit when the stop flag is set. The executor is
//! joined on drop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

use parslot_core::ptrace;

/// A unit of work submitted to the executor.
///
/// Jobs are required to be panic-free: slot tasks catch panics from
/// the user action internally and report them through their
/// completion handle.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// State shared between the submitting side and the executor threads
struct ExecInner {
    /// Pending jobs, oldest first
    queue: Mutex<VecDeque<Job>>,

    /// Signalled on push and on stop
    available: Condvar,

    /// Shutdown flag
    stop: AtomicBool,
}

/// Fixed pool of executor threads.
///
/// One instance is owned per dispatcher; its size equals the worker
/// pool size, so at most that many jobs are ever pending.
pub struct FixedExecutor {
    inner: Arc<ExecInner>,
    handles: Vec<JoinHandle<()>>,
    threads: usize,
}

impl FixedExecutor {
    /// Spawn `threads` executor threads named `{name}-{i}`.
    pub fn new(threads: usize, name: &str) -> Self {
        debug_assert!(threads > 0);
        let inner = Arc::new(ExecInner {
            queue: Mutex::new(VecDeque::with_capacity(threads)),
            available: Condvar::new(),
            stop: AtomicBool::new(false),
        });

        let mut handles = Vec::with_capacity(threads);
        for i in 0..threads {
            let inner = Arc::clone(&inner);
            let handle = thread::Builder::new()
                .name(format!("{}-{}", name, i))
                .spawn(move || exec_loop(inner, i))
                .expect("failed to spawn executor thread");
            handles.push(handle);
        }

        FixedExecutor {
            inner,
            handles,
            threads,
        }
    }

    /// Queue a job for execution on some executor thread.
    ///
    /// Never blocks; the queue is unbounded but its depth is bounded
    /// in practice by the caller's worker pool.
    pub fn submit(&self, job: Job) {
        let mut queue = self.inner.queue.lock().unwrap();
        queue.push_back(job);
        drop(queue);
        self.inner.available.notify_one();
    }

    /// Number of executor threads
    #[inline]
    pub fn thread_count(&self) -> usize {
        self.threads
    }

    /// Stop all threads and wait for them to finish.
    ///
    /// Jobs still queued when the stop flag is seen are discarded.
    pub fn shutdown(&mut self) {
        self.inner.stop.store(true, Ordering::SeqCst);
        self.inner.available.notify_all();
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

impl Drop for FixedExecutor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Executor thread main loop
fn exec_loop(inner: Arc<ExecInner>, thread_index: usize) {
    ptrace!("executor thread {} started", thread_index);
    loop {
        let job = {
            let mut queue = inner.queue.lock().unwrap();
            loop {
                if inner.stop.load(Ordering::Acquire) {
                    break None;
                }
                if let Some(job) = queue.pop_front() {
                    break Some(job);
                }
                queue = inner.available.wait(queue).unwrap();
            }
        };

        match job {
            Some(job) => job(),
            None => break,
        }
    }
    ptrace!("executor thread {} stopped", thread_index);
}
