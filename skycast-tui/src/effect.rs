//! Effects requested by the reducer

use skycast_core::WeatherQuery;

/// Async work the reducer wants done outside the store.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch weather for a query; `push` flows through to the
    /// completion action so history knows whether to record it.
    FetchWeather { query: WeatherQuery, push: bool },
    /// Resolve the user's approximate location.
    Locate,
}
