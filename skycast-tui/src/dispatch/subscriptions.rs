//! Interval subscriptions for continuous action sources
//!
//! The app uses a single `tick` interval to drive the spinner and the
//! backdrop animation.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::store::Action;

/// Identifies a subscription for cancellation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubKey(String);

impl SubKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for SubKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

/// Long-lived producers of actions, unlike one-shot tasks.
pub struct Subscriptions<A> {
    handles: HashMap<SubKey, JoinHandle<()>>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> Subscriptions<A>
where
    A: Action,
{
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            handles: HashMap::new(),
            action_tx,
        }
    }

    /// Emit an action at fixed intervals.
    ///
    /// An existing subscription under the same key is cancelled first.
    pub fn interval<F>(
        &mut self,
        key: impl Into<SubKey>,
        duration: Duration,
        action_fn: F,
    ) -> &mut Self
    where
        F: Fn() -> A + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);
        debug!(subscription = key.name(), ?duration, "starting interval");

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(duration);
            // Skip the first immediate tick
            interval.tick().await;

            loop {
                interval.tick().await;
                if tx.send(action_fn()).is_err() {
                    break;
                }
            }
        });

        self.handles.insert(key, handle);
        self
    }

    pub fn cancel(&mut self, key: &SubKey) {
        if let Some(handle) = self.handles.remove(key) {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }

    pub fn is_active(&self, key: &SubKey) -> bool {
        self.handles.contains_key(key)
    }
}

impl<A> Drop for Subscriptions<A> {
    fn drop(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum TestAction {
        Tick,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            "Tick"
        }
    }

    #[tokio::test]
    async fn test_interval_emits_repeatedly() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut subs = Subscriptions::new(tx);

        subs.interval("tick", Duration::from_millis(20), || TestAction::Tick);

        for _ in 0..2 {
            let action = tokio::time::timeout(Duration::from_millis(100), rx.recv())
                .await
                .expect("timeout")
                .expect("channel closed");
            assert!(matches!(action, TestAction::Tick));
        }
    }

    #[tokio::test]
    async fn test_cancel_stops_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut subs = Subscriptions::new(tx);

        subs.interval("tick", Duration::from_millis(10), || TestAction::Tick);
        assert!(subs.is_active(&SubKey::new("tick")));

        let _ = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        subs.cancel(&SubKey::new("tick"));
        assert!(!subs.is_active(&SubKey::new("tick")));

        while rx.try_recv().is_ok() {}
        let result = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(result.is_err(), "no more ticks after cancel");
    }
}
