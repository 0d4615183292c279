//! Application state

use skycast_core::WeatherRecord;

use crate::history::NavigationState;
use crate::scene::Scene;

/// Animation tick interval in milliseconds.
pub const TICK_MS: u64 = 100;

/// Message shown for any failed weather lookup.
pub const MSG_FETCH_FAILED: &str = "❌ City not found. Please check the spelling and try again.";
/// Message shown when locating the user fails.
pub const MSG_GEO_FAILED: &str =
    "❌ Geolocation failed. Please enable location services or enter a city manually.";
/// Message shown when geolocation is disabled in the configuration.
pub const MSG_GEO_UNSUPPORTED: &str = "❌ Geolocation is not supported on this system.";

/// What the main panel shows.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum UiState {
    /// No lookup performed yet (or history backed out to the start).
    #[default]
    Idle,
    /// A weather record is on display.
    Showing,
    /// An error message replaces the panel content.
    Error(String),
}

/// The search field.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SearchState {
    pub value: String,
    pub focused: bool,
}

/// Root state for the whole application.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub ui: UiState,
    /// Last successfully fetched record, kept across errors so a
    /// dismissed error can fall back to it.
    pub weather: Option<WeatherRecord>,
    /// A fetch or locate request is in flight.
    pub loading: bool,
    pub search: SearchState,
    pub nav: NavigationState,
    pub scene: Scene,
    /// Animation tick counter.
    pub tick: u64,
    pub terminal_size: (u16, u16),
    /// Whether the locate shortcut is available at all.
    pub geolocate_enabled: bool,
}

impl AppState {
    pub fn new(geolocate_enabled: bool) -> Self {
        Self {
            ui: UiState::Idle,
            weather: None,
            loading: false,
            search: SearchState::default(),
            nav: NavigationState::new(),
            scene: Scene::new(),
            tick: 0,
            terminal_size: (80, 24),
            geolocate_enabled,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}
