//! Dispatch runtime: store, effects, tasks, subscriptions, event loop
//!
//! A single-threaded redux-style loop. All state mutation happens on
//! the runtime task; async work runs in keyed tasks that post result
//! actions back through the action channel.

pub mod component;
pub mod event;
pub mod runtime;
pub mod store;
pub mod subscriptions;
pub mod tasks;
pub mod testing;

pub use component::Component;
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use runtime::{EffectContext, EventOutcome, PollerConfig, Runtime};
pub use store::{Action, DispatchResult, EffectReducer, EffectStore};
pub use subscriptions::{SubKey, Subscriptions};
pub use tasks::{TaskKey, TaskManager};
