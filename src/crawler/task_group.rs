//! A group of spawned tasks joined at a single point
//!
//! Tasks start running as soon as they are spawned. [`TaskGroup::join_all`]
//! waits for every one of them and hands back their results in spawn order,
//! whatever order they finished in. There is no cancellation: dropping the
//! group detaches the tasks rather than aborting them.

use std::future::Future;
use tokio::task::{JoinError, JoinHandle};

/// Tasks whose results are collected positionally
pub struct TaskGroup<T> {
    handles: Vec<JoinHandle<T>>,
}

impl<T: Send + 'static> TaskGroup<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handles: Vec::with_capacity(capacity),
        }
    }

    /// Spawns a task; its result takes the next slot of [`TaskGroup::join_all`]
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        self.handles.push(tokio::spawn(task));
    }

    /// Waits for every task to finish
    ///
    /// The i-th result belongs to the i-th spawned task. A task that panicked
    /// yields `Err(JoinError)` in its slot and does not affect the others.
    pub async fn join_all(self) -> Vec<Result<T, JoinError>> {
        let mut results = Vec::with_capacity(self.handles.len());
        for handle in self.handles {
            results.push(handle.await);
        }
        results
    }
}
