//! Bottom key-hint line

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::action::Action;
use crate::dispatch::Component;

const HINTS: &str = " / search  l locate  r refresh  [ back  ] forward  q quit";

pub struct HelpBarProps<'a> {
    /// The `city=<encoded>` readout mirroring the current lookup.
    pub query_readout: Option<&'a str>,
}

/// One-row hint line with the query readout right-aligned.
#[derive(Default)]
pub struct HelpBar;

impl HelpBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let dim = Style::default().fg(Color::DarkGray);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(HINTS, dim))), area);

        if let Some(readout) = props.query_readout {
            let text = format!("?{readout} ");
            let width = text.chars().count() as u16;
            if width < area.width {
                let right = Rect {
                    x: area.x + area.width - width,
                    y: area.y,
                    width,
                    height: 1,
                };
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(text, dim))),
                    right,
                );
            }
        }
    }
}
