//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use super::event::EventKind;

/// A pure UI component that renders from props and emits actions.
///
/// Props carry all read-only data needed for a render; `handle_event`
/// returns actions and never mutates external state. Internal UI state
/// (cursor position and the like) may live in `&mut self`.
pub trait Component<A> {
    /// Data required to render the component (read-only).
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any `IntoIterator<Item = A>`: `None`, `Some(action)`, or
    /// a `Vec`. Default is no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
