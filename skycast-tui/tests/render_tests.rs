//! Full-screen render tests against the test backend

use skycast_core::{Condition, WeatherRecord};
use skycast_tui::action::Action;
use skycast_tui::components::{WeatherPanel, WeatherPanelProps};
use skycast_tui::dispatch::testing::RenderHarness;
use skycast_tui::dispatch::Component;
use skycast_tui::reducer::reduce;
use skycast_tui::state::{AppState, UiState, MSG_FETCH_FAILED};

fn sample_record() -> WeatherRecord {
    WeatherRecord {
        city: "Paris".into(),
        country: "FR".into(),
        temperature: 21.6,
        feels_like: 20.1,
        humidity: 64,
        wind_speed: 4.6,
        pressure: 1012,
        visibility: 10_000,
        sunrise: 1_700_000_000,
        sunset: 1_700_040_000,
        observed_at: 1_700_020_000,
        condition: Condition::Rain,
        description: "light rain".into(),
    }
}

fn render_state(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut panel = WeatherPanel::new();
    render.render_to_string_plain(|frame| {
        panel.render(
            frame,
            frame.area(),
            WeatherPanelProps {
                ui: &state.ui,
                weather: state.weather.as_ref(),
                loading: state.loading,
                tick: state.tick,
                geolocate_enabled: state.geolocate_enabled,
            },
        );
    })
}

#[test]
fn test_loaded_record_shows_all_fields() {
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::WeatherDidLoad {
            record: Box::new(sample_record()),
            push: true,
        },
    );

    let output = render_state(&state, 60, 16);

    assert!(output.contains("Paris, FR"));
    assert!(output.contains("light rain"));
    assert!(output.contains("22°C"), "temperature rounds to integer");
    assert!(output.contains("Feels like: 20°C"));
    assert!(output.contains("64%"));
    assert!(output.contains("5 km/h"));
    assert!(output.contains("1012 hPa"));
    assert!(output.contains("10.0 km"));
}

#[test]
fn test_failed_lookup_shows_generic_message() {
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::WeatherDidError("provider status 404".into()),
    );

    let output = render_state(&state, 70, 10);

    assert_eq!(state.ui, UiState::Error(MSG_FETCH_FAILED.into()));
    assert!(output.contains("City not found"));
    assert!(
        !output.contains("404"),
        "underlying error detail never reaches the screen"
    );
}

#[test]
fn test_idle_state_shows_hint() {
    let state = AppState::default();
    let output = render_state(&state, 60, 8);
    assert!(output.contains("Search for a city"));
}

#[test]
fn test_error_replaces_record_until_dismissed() {
    let mut state = AppState::default();
    reduce(
        &mut state,
        Action::WeatherDidLoad {
            record: Box::new(sample_record()),
            push: true,
        },
    );
    reduce(&mut state, Action::WeatherDidError("boom".into()));

    let output = render_state(&state, 70, 10);
    assert!(output.contains("City not found"));
    assert!(!output.contains("Paris, FR"));

    reduce(&mut state, Action::UiDismissError);
    let output = render_state(&state, 70, 16);
    assert!(output.contains("Paris, FR"), "record restored on dismiss");
}
