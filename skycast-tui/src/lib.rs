//! skycast - terminal weather lookup
//!
//! The app follows a unidirectional dispatch loop:
//!
//! 1. Terminal event -> `map_event` -> [`action::Action`]s
//! 2. Actions dispatched to the [`dispatch::EffectStore`]
//! 3. [`reducer::reduce`] updates [`state::AppState`] and declares
//!    [`effect::Effect`]s
//! 4. Effects spawn keyed async tasks (weather fetch, locate) whose
//!    results come back as actions
//! 5. If state changed, re-render

pub mod action;
pub mod components;
pub mod dispatch;
pub mod effect;
pub mod history;
pub mod reducer;
pub mod scene;
pub mod state;
