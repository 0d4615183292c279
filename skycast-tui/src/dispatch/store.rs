//! Effect-aware state store

use std::fmt::Debug;
use std::marker::PhantomData;

use tracing::trace;

/// Marker trait for actions dispatched to the store.
///
/// Actions are cloned into logs and sent across task boundaries.
pub trait Action: Clone + Debug + Send + 'static {
    /// Action name for logging and filtering.
    fn name(&self) -> &'static str;
}

/// Result of dispatching an action: a render hint plus queued effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified by this action.
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change and no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Returns true if there are any effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer that can emit effects alongside state changes.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Centralized state container.
///
/// Holds the application state and funnels every mutation through the
/// reducer. Each dispatch is traced by action name.
pub struct EffectStore<S, A, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A, E> EffectStore<S, A, E>
where
    A: Action,
{
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable state access, for initialization only; state changes at
    /// runtime go through actions.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Dispatch an action through the reducer.
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        trace!(action = action.name(), "dispatch");
        let result = (self.reducer)(&mut self.state, action);
        trace!(
            changed = result.changed,
            effects = result.effects.len(),
            "dispatched"
        );
        result
    }
}
