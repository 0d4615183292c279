//! The event/action/effect loop

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
use super::store::{Action, EffectStore};
use super::subscriptions::Subscriptions;
use super::tasks::TaskManager;

/// Configuration for the event poller.
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Timeout passed to each `crossterm::event::poll` call.
    pub poll_timeout: Duration,
    /// Sleep between poll cycles.
    pub loop_sleep: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
        }
    }
}

/// Result of mapping an event into actions plus an optional render hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    pub actions: Vec<A>,
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: false,
        }
    }

    pub fn action(action: A) -> Self {
        Self {
            actions: vec![action],
            needs_render: false,
        }
    }

    /// Collect actions from a component's `handle_event` result.
    pub fn from_actions(iter: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }

    pub fn with_render(mut self) -> Self {
        self.needs_render = true;
        self
    }
}

impl<A> Default for EventOutcome<A> {
    fn default() -> Self {
        Self::ignored()
    }
}

impl<A> From<Option<A>> for EventOutcome<A> {
    fn from(action: Option<A>) -> Self {
        match action {
            Some(action) => Self::action(action),
            None => Self::ignored(),
        }
    }
}

/// Context passed to the effect handler.
///
/// Follow-up actions flow back through the task a handler spawns; the
/// context itself only hands out the task manager.
pub struct EffectContext<'a, A: Action> {
    tasks: &'a mut TaskManager<A>,
}

impl<'a, A: Action> EffectContext<'a, A> {
    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        self.tasks
    }
}

/// Runtime owning the store, the task manager, and the subscriptions.
pub struct Runtime<S, A: Action, E> {
    store: EffectStore<S, A, E>,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    poller_config: PollerConfig,
    should_render: bool,
    tasks: TaskManager<A>,
    subscriptions: Subscriptions<A>,
}

impl<S: 'static, A: Action, E> Runtime<S, A, E> {
    pub fn new(store: EffectStore<S, A, E>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());
        let subscriptions = Subscriptions::new(action_tx.clone());

        Self {
            store,
            action_tx,
            action_rx,
            poller_config: PollerConfig::default(),
            should_render: true,
            tasks,
            subscriptions,
        }
    }

    pub fn with_event_poller(mut self, config: PollerConfig) -> Self {
        self.poller_config = config;
        self
    }

    /// Queue an action into the runtime.
    pub fn enqueue(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    pub fn state_mut(&mut self) -> &mut S {
        self.store.state_mut()
    }

    pub fn subscriptions(&mut self) -> &mut Subscriptions<A> {
        &mut self.subscriptions
    }

    /// Run the loop until a quit action arrives.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect, R>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> R,
        R: Into<EventOutcome<A>>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _handle = spawn_event_poller(
            event_tx,
            self.poller_config.poll_timeout,
            self.poller_config.loop_sleep,
            cancel_token.clone(),
        );

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| {
                    render(frame, frame.area(), state);
                })?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let event = process_raw_event(raw_event);
                    let outcome: EventOutcome<A> =
                        map_event(&event, self.store.state()).into();
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break;
                    }

                    let result = self.store.dispatch(action);
                    if result.has_effects() {
                        let mut ctx = EffectContext {
                            tasks: &mut self.tasks,
                        };
                        for effect in result.effects {
                            handle_effect(effect, &mut ctx);
                        }
                    }
                    self.should_render = result.changed;
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        self.subscriptions.cancel_all();
        self.tasks.cancel_all();

        Ok(())
    }
}
