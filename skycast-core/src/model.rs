//! Normalized weather data model

/// How a lookup identifies its target location.
///
/// Constructed once per request and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub enum WeatherQuery {
    /// Lookup by city name, as typed by the user (trimmed).
    City(String),
    /// Lookup by coordinate pair, e.g. from the locate service.
    Coordinates { latitude: f64, longitude: f64 },
}

/// Closed set of display conditions.
///
/// The provider reports free-form labels ("Drizzle", "Thunderstorm",
/// "Haze", ...); everything outside the three recognized families is an
/// explicit `Clear` so there is no silent fallthrough downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Rain,
    Snow,
    Cloud,
    Clear,
}

impl Condition {
    /// Classify a provider weather label, case-insensitively.
    ///
    /// First match wins: rain, then snow, then cloud. Unknown or empty
    /// labels map to `Clear`.
    pub fn classify(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("rain") {
            Condition::Rain
        } else if label.contains("snow") {
            Condition::Snow
        } else if label.contains("cloud") {
            Condition::Cloud
        } else {
            Condition::Clear
        }
    }
}

/// Normalized result of a weather lookup.
///
/// Built by the client from the provider response, consumed read-only
/// by the UI, replaced wholesale by the next successful lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherRecord {
    /// Canonical city name as the provider reports it.
    pub city: String,
    /// ISO country code, e.g. "FR".
    pub country: String,
    /// Temperature in °C.
    pub temperature: f64,
    /// Feels-like temperature in °C.
    pub feels_like: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Wind speed as reported with metric units.
    pub wind_speed: f64,
    /// Pressure in hPa.
    pub pressure: u32,
    /// Visibility in meters.
    pub visibility: u32,
    /// Sunrise, unix timestamp.
    pub sunrise: i64,
    /// Sunset, unix timestamp.
    pub sunset: i64,
    /// Observation time, unix timestamp.
    pub observed_at: i64,
    /// Classified condition.
    pub condition: Condition,
    /// Human-readable description from the provider, e.g. "light rain".
    pub description: String,
}

impl WeatherRecord {
    /// Whether the observation fell strictly between sunrise and sunset.
    pub fn is_daytime(&self) -> bool {
        self.sunrise < self.observed_at && self.observed_at < self.sunset
    }
}
