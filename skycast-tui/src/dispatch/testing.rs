//! Test utilities: key event builders, render harness, action asserts

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::{Frame, Terminal};

/// Create a `KeyEvent` from a key string, e.g. `key("enter")`,
/// `key("ctrl+c")`, `key("[")`.
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {s:?}"))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    make_key(KeyCode::Char(c), KeyModifiers::empty())
}

/// Create a `KeyEvent` for a character with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    make_key(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn make_key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut parts = s.split('+').collect::<Vec<_>>();
    let last = parts.pop()?;

    for part in parts {
        match part.to_lowercase().as_str() {
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match last.to_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        _ => {
            let mut chars = last.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };

    Some(make_key(code, modifiers))
}

/// Renders into a `TestBackend` buffer and exposes it as plain text.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    /// Render once and return the buffer contents without styling.
    pub fn render_to_string_plain<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render).expect("draw");
        let buffer = self.terminal.backend().buffer();

        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}

/// Assertion helpers for action collections returned by
/// `Component::handle_event`.
pub trait ActionAssertions<A: std::fmt::Debug + PartialEq> {
    fn assert_empty(&self);
    fn assert_count(&self, expected: usize);
    fn assert_first(&self, expected: A);
}

impl<A: std::fmt::Debug + PartialEq> ActionAssertions<A> for Vec<A> {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got: {self:?}");
    }

    fn assert_count(&self, expected: usize) {
        assert_eq!(
            self.len(),
            expected,
            "expected {expected} actions, got: {self:?}"
        );
    }

    fn assert_first(&self, expected: A) {
        assert_eq!(
            self.first(),
            Some(&expected),
            "expected first action {expected:?}, got: {self:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_simple() {
        let k = key("q");
        assert_eq!(k.code, KeyCode::Char('q'));
        assert_eq!(k.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_key_with_ctrl() {
        let k = key("ctrl+c");
        assert_eq!(k.code, KeyCode::Char('c'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_key_special() {
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("[").code, KeyCode::Char('['));
    }
}
