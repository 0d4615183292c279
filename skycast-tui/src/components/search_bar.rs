//! City search field

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::action::Action;
use crate::dispatch::{Component, EventKind};

const PLACEHOLDER: &str = "Enter city name...";

pub struct SearchBarProps<'a> {
    pub value: &'a str,
    pub focused: bool,
}

/// Single-line city input. Editing keys apply only while focused; the
/// value itself lives in the application state, only the cursor byte
/// index is local.
#[derive(Default)]
pub struct SearchBar {
    cursor: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    // The value can be replaced out from under the component (the
    // reducer writes the provider's canonical city name), so the saved
    // byte index may land inside a multibyte character of the new value.
    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while self.cursor > 0 && !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn prev_boundary(&self, value: &str) -> usize {
        let mut pos = self.cursor.saturating_sub(1);
        while pos > 0 && !value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_boundary(&self, value: &str) -> usize {
        let mut pos = (self.cursor + 1).min(value.len());
        while pos < value.len() && !value.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }

    fn insert(&mut self, value: &str, c: char) -> String {
        let mut out = String::with_capacity(value.len() + c.len_utf8());
        out.push_str(&value[..self.cursor]);
        out.push(c);
        out.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        out
    }

    fn delete_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = self.prev_boundary(value);
        let mut out = String::with_capacity(value.len());
        out.push_str(&value[..start]);
        out.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(out)
    }

    fn delete_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }
        let end = self.next_boundary(value);
        let mut out = String::with_capacity(value.len());
        out.push_str(&value[..self.cursor]);
        out.push_str(&value[end..]);
        Some(out)
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.focused {
            return None;
        }
        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some(Action::SearchInput(String::new()))
                }
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some(Action::SearchInput(self.insert(props.value, c))),
            KeyCode::Backspace => self.delete_before(props.value).map(Action::SearchInput),
            KeyCode::Delete => self.delete_at(props.value).map(Action::SearchInput),
            KeyCode::Left => {
                self.cursor = self.prev_boundary(props.value);
                None
            }
            KeyCode::Right => {
                if self.cursor < props.value.len() {
                    self.cursor = self.next_boundary(props.value);
                }
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some(Action::SearchSubmit(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let (text, style) = if props.value.is_empty() {
            (PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };

        let border_style = if props.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if props.focused {
            let cursor_col = props.value[..self.cursor].chars().count() as u16;
            let x = area.x + 1 + cursor_col;
            if x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((x, area.y + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::{key, ActionAssertions, RenderHarness};

    fn focused(value: &str) -> SearchBarProps<'_> {
        SearchBarProps {
            value,
            focused: true,
        }
    }

    #[test]
    fn test_typing_emits_input() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("p")), focused(""))
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchInput("p".into()));
    }

    #[test]
    fn test_backspace_removes_char_before_cursor() {
        let mut bar = SearchBar::new();
        bar.cursor = 5;
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("backspace")), focused("Paris"))
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchInput("Pari".into()));
        assert_eq!(bar.cursor, 4);
    }

    #[test]
    fn test_enter_submits_current_value() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("enter")), focused("Paris"))
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchSubmit("Paris".into()));
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut bar = SearchBar::new();
        bar.cursor = 5;
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("ctrl+u")), focused("Paris"))
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchInput(String::new()));
        assert_eq!(bar.cursor, 0);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(
                &EventKind::Key(key("p")),
                SearchBarProps {
                    value: "",
                    focused: false,
                },
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_cursor_survives_canonical_value_replacement() {
        let mut bar = SearchBar::new();
        // Type two chars, then the value is replaced with an accented
        // canonical name whose second character spans bytes 1..3
        bar.handle_event(&EventKind::Key(key("a")), focused(""))
            .into_iter()
            .for_each(drop);
        bar.handle_event(&EventKind::Key(key("s")), focused("a"))
            .into_iter()
            .for_each(drop);
        assert_eq!(bar.cursor, 2);

        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("x")), focused("Aš"))
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchInput("Axš".into()));

        bar.cursor = 2;
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("backspace")), focused("Aš"))
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchInput("š".into()));
    }

    #[test]
    fn test_render_with_stale_cursor_does_not_panic() {
        let mut render = RenderHarness::new(30, 3);
        let mut bar = SearchBar::new();
        bar.cursor = 2;
        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), focused("Aš"));
        });
        assert!(output.contains("Aš"));
    }

    #[test]
    fn test_multibyte_editing() {
        let mut bar = SearchBar::new();
        bar.cursor = "Zürich".len();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("backspace")), focused("Zürich"))
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchInput("Züric".into()));
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let mut render = RenderHarness::new(30, 3);
        let mut bar = SearchBar::new();
        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), focused(""));
        });
        assert!(output.contains("Enter city name..."));
    }

    #[test]
    fn test_render_value() {
        let mut render = RenderHarness::new(30, 3);
        let mut bar = SearchBar::new();
        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), focused("Paris"));
        });
        assert!(output.contains("Paris"));
    }
}
