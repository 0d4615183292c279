//! State transitions
//!
//! Pure function from `(state, action)` to a mutation plus requested
//! effects. All policy lives here: what counts as a new history entry,
//! which message each failure maps to, when the backdrop regenerates.

use skycast_core::WeatherQuery;
use tracing::warn;

use crate::action::Action;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::scene::SceneKind;
use crate::state::{AppState, UiState, MSG_FETCH_FAILED, MSG_GEO_FAILED, MSG_GEO_UNSUPPORTED};

pub fn reduce(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::SearchInput(value) => {
            state.search.value = value;
            DispatchResult::changed()
        }

        Action::SearchFocus => {
            state.search.focused = true;
            DispatchResult::changed()
        }

        Action::SearchBlur => {
            state.search.focused = false;
            DispatchResult::changed()
        }

        Action::SearchSubmit(raw) => {
            let city = raw.trim();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            state.loading = true;
            state.search.focused = false;
            DispatchResult::changed_with(Effect::FetchWeather {
                query: WeatherQuery::City(city.to_string()),
                push: true,
            })
        }

        Action::WeatherRefresh => match state.nav.current() {
            Some(city) => {
                state.loading = true;
                DispatchResult::changed_with(Effect::FetchWeather {
                    query: WeatherQuery::City(city.to_string()),
                    push: false,
                })
            }
            None => DispatchResult::unchanged(),
        },

        Action::WeatherDidLoad { record, push } => {
            state.loading = false;
            if push {
                // The provider's canonical city name, not the raw input
                state.nav.push(&record.city);
            }
            state.search.value = record.city.clone();
            let kind = SceneKind::for_weather(record.condition, record.is_daytime());
            state.scene.regenerate(kind, state.terminal_size);
            state.weather = Some(*record);
            state.ui = UiState::Showing;
            DispatchResult::changed()
        }

        Action::WeatherDidError(detail) => {
            warn!(%detail, "weather lookup failed");
            state.loading = false;
            state.ui = UiState::Error(MSG_FETCH_FAILED.to_string());
            DispatchResult::changed()
        }

        Action::LocateRequest => {
            if !state.geolocate_enabled {
                state.ui = UiState::Error(MSG_GEO_UNSUPPORTED.to_string());
                return DispatchResult::changed();
            }
            state.loading = true;
            DispatchResult::changed_with(Effect::Locate)
        }

        Action::LocateDidError(detail) => {
            warn!(%detail, "geolocation failed");
            state.loading = false;
            state.ui = UiState::Error(MSG_GEO_FAILED.to_string());
            DispatchResult::changed()
        }

        Action::NavBack => match state.nav.back() {
            None => DispatchResult::unchanged(),
            Some(Some(city)) => {
                state.loading = true;
                DispatchResult::changed_with(Effect::FetchWeather {
                    query: WeatherQuery::City(city),
                    push: false,
                })
            }
            Some(None) => {
                reset_to_idle(state);
                DispatchResult::changed()
            }
        },

        Action::NavForward => match state.nav.forward() {
            None => DispatchResult::unchanged(),
            Some(Some(city)) => {
                state.loading = true;
                DispatchResult::changed_with(Effect::FetchWeather {
                    query: WeatherQuery::City(city),
                    push: false,
                })
            }
            // Forward never lands on the empty initial entry, but the
            // reset keeps the arms total just in case.
            Some(None) => {
                reset_to_idle(state);
                DispatchResult::changed()
            }
        },

        Action::NavDeepLink(city) => {
            state.nav.set_requested(&city);
            state.search.value = city.clone();
            state.loading = true;
            DispatchResult::changed_with(Effect::FetchWeather {
                query: WeatherQuery::City(city),
                push: false,
            })
        }

        Action::UiDismissError => {
            if !matches!(state.ui, UiState::Error(_)) {
                return DispatchResult::unchanged();
            }
            state.ui = if state.weather.is_some() {
                UiState::Showing
            } else {
                UiState::Idle
            };
            DispatchResult::changed()
        }

        Action::UiResize(width, height) => {
            state.terminal_size = (width, height);
            let kind = state.scene.kind;
            state.scene.regenerate(kind, (width, height));
            DispatchResult::changed()
        }

        Action::Tick => {
            state.tick = state.tick.wrapping_add(1);
            state.scene.advance();
            if state.loading || state.scene.is_animated() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Quit is intercepted by the run loop before dispatch
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn reset_to_idle(state: &mut AppState) {
    state.weather = None;
    state.search.value.clear();
    state.ui = UiState::Idle;
    state
        .scene
        .regenerate(SceneKind::Idle, state.terminal_size);
}
