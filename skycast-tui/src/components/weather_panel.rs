//! Main weather readout panel

use chrono::{Local, TimeZone};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use skycast_core::WeatherRecord;

use crate::action::Action;
use crate::dispatch::{Component, EventKind};
use crate::state::UiState;

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// `{n}°C`, rounded to the nearest degree.
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", celsius.round() as i64)
}

pub fn format_feels_like(celsius: f64) -> String {
    format!("Feels like: {}°C", celsius.round() as i64)
}

pub fn format_humidity(percent: u8) -> String {
    format!("{percent}%")
}

/// `{n} km/h`, rounded.
pub fn format_wind(speed: f64) -> String {
    format!("{} km/h", speed.round() as i64)
}

pub fn format_pressure(hpa: u32) -> String {
    format!("{hpa} hPa")
}

/// Meters to kilometers with one decimal.
pub fn format_visibility(meters: u32) -> String {
    format!("{:.1} km", meters as f64 / 1000.0)
}

/// Unix timestamp to local wall-clock `HH:MM`; `--:--` when the
/// timestamp is not representable.
pub fn format_clock(unix: i64) -> String {
    match Local.timestamp_opt(unix, 0) {
        chrono::LocalResult::Single(t) => t.format("%H:%M").to_string(),
        _ => "--:--".to_string(),
    }
}

pub struct WeatherPanelProps<'a> {
    pub ui: &'a UiState,
    pub weather: Option<&'a WeatherRecord>,
    pub loading: bool,
    pub tick: u64,
    pub geolocate_enabled: bool,
}

/// Renders the idle hint, an error message, or the current record.
///
/// While the search field is unfocused this panel also owns the global
/// shortcut map.
#[derive(Default)]
pub struct WeatherPanel;

impl WeatherPanel {
    pub fn new() -> Self {
        Self
    }

    fn title(&self, loading: bool, tick: u64) -> String {
        if loading {
            let frame = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
            format!(" Weather {frame} ")
        } else {
            " Weather ".to_string()
        }
    }

    fn render_idle(&self, frame: &mut Frame, area: Rect, block: Block, geolocate_enabled: bool) {
        let mut lines = vec![
            Line::default(),
            Line::from("Search for a city to see the weather.").alignment(Alignment::Center),
        ];
        if geolocate_enabled {
            lines.push(
                Line::from("Press 'l' to use your current location.")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
            );
        }
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, block: Block, message: &str) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::default(),
            Line::from("Press Esc to dismiss.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
    }

    fn render_record(&self, frame: &mut Frame, area: Rect, block: Block, record: &WeatherRecord) {
        let label = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(Span::styled(
                format!("{}, {}", record.city, record.country),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(record.description.clone()).alignment(Alignment::Center),
            Line::default(),
            Line::from(Span::styled(
                format_temperature(record.temperature),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(format_feels_like(record.feels_like)).alignment(Alignment::Center),
            Line::default(),
            Line::from(vec![
                Span::styled("Humidity: ", label),
                Span::raw(format_humidity(record.humidity)),
                Span::raw("   "),
                Span::styled("Wind: ", label),
                Span::raw(format_wind(record.wind_speed)),
            ])
            .alignment(Alignment::Center),
            Line::from(vec![
                Span::styled("Pressure: ", label),
                Span::raw(format_pressure(record.pressure)),
                Span::raw("   "),
                Span::styled("Visibility: ", label),
                Span::raw(format_visibility(record.visibility)),
            ])
            .alignment(Alignment::Center),
            Line::from(vec![
                Span::styled("Sunrise: ", label),
                Span::raw(format_clock(record.sunrise)),
                Span::raw("   "),
                Span::styled("Sunset: ", label),
                Span::raw(format_clock(record.sunset)),
            ])
            .alignment(Alignment::Center),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let EventKind::Key(key) = event else {
            return None;
        };
        if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return None;
        }

        match key.code {
            KeyCode::Char('/') => Some(Action::SearchFocus),
            KeyCode::Char('l') => Some(Action::LocateRequest),
            KeyCode::Char('r') => Some(Action::WeatherRefresh),
            KeyCode::Char('[') => Some(Action::NavBack),
            KeyCode::Char(']') => Some(Action::NavForward),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc => Some(Action::UiDismissError),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title(props.loading, props.tick));

        match props.ui {
            UiState::Error(message) => self.render_error(frame, area, block, message),
            UiState::Showing => match props.weather {
                Some(record) => self.render_record(frame, area, block, record),
                None => self.render_idle(frame, area, block, props.geolocate_enabled),
            },
            UiState::Idle => self.render_idle(frame, area, block, props.geolocate_enabled),
        }
    }
}
