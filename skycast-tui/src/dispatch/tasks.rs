//! Keyed async task manager
//!
//! Tasks with the same key are mutually exclusive: spawning under a key
//! that is already running aborts the existing task first. Overlapping
//! weather lookups therefore resolve "latest request wins" rather than
//! racing their responses.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

use super::store::Action;

/// Identifies a task for cancellation and replacement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

/// Manages async task lifecycle with automatic cancellation.
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// The `action_tx` channel carries completion actions back to the
    /// runtime loop.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn a task, aborting any existing task with the same key.
    ///
    /// The future resolves to the action to send when the task
    /// completes; an aborted task sends nothing.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);
        debug!(task = key.name(), "spawning task");

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Cancel a task by key; no-op when the key is not running.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            debug!(task = key.name(), "aborting task");
            handle.abort();
        }
    }

    /// Cancel all running tasks, e.g. on shutdown.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks.contains_key(key)
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
