//! OpenWeatherMap-compatible HTTP client

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{Condition, WeatherQuery, WeatherRecord};

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org";

/// Weather fetch errors.
///
/// The variants exist so logs can tell a bad city name from a network
/// outage; the UI deliberately renders one generic message for all of
/// them.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Provider returned a non-success status.
    #[error("city not found (provider status {0})")]
    NotFound(u16),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Client for the current-weather endpoint.
///
/// No retries, no caching, no explicit timeout; the transport defaults
/// apply. Cheap to clone.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_WEATHER_URL)
    }

    /// Point the client at a different base URL (mock servers in tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch current weather for a query of either kind.
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherRecord, FetchError> {
        match query {
            WeatherQuery::City(name) => self.fetch_by_city(name).await,
            WeatherQuery::Coordinates {
                latitude,
                longitude,
            } => self.fetch_by_coordinates(*latitude, *longitude).await,
        }
    }

    /// Fetch current weather by city name, metric units.
    pub async fn fetch_by_city(&self, name: &str) -> Result<WeatherRecord, FetchError> {
        debug!(city = name, "fetching weather by city");
        self.request(&[("q", name)]).await
    }

    /// Fetch current weather by coordinates, metric units.
    pub async fn fetch_by_coordinates(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherRecord, FetchError> {
        debug!(lat, lon, "fetching weather by coordinates");
        self.request(&[("lat", &lat.to_string()), ("lon", &lon.to_string())])
            .await
    }

    async fn request(&self, params: &[(&str, &str)]) -> Result<WeatherRecord, FetchError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("units", "metric"), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "provider returned non-success");
            return Err(FetchError::NotFound(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: ProviderResponse =
            serde_json::from_str(&body).map_err(FetchError::Decode)?;

        Ok(parsed.into_record())
    }
}

// Provider payload shape, field names per the OpenWeatherMap current
// weather endpoint.

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    name: String,
    dt: i64,
    sys: ProviderSys,
    main: ProviderMain,
    wind: ProviderWind,
    #[serde(default)]
    visibility: u32,
    #[serde(default)]
    weather: Vec<ProviderWeather>,
}

#[derive(Debug, Deserialize)]
struct ProviderSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct ProviderMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct ProviderWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ProviderWeather {
    main: String,
    description: String,
}

impl ProviderResponse {
    fn into_record(self) -> WeatherRecord {
        let (label, description) = self
            .weather
            .into_iter()
            .next()
            .map(|w| (w.main, w.description))
            .unwrap_or_default();

        WeatherRecord {
            city: self.name,
            country: self.sys.country,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            pressure: self.main.pressure,
            visibility: self.visibility,
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
            observed_at: self.dt,
            condition: Condition::classify(&label),
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_weather_array_classifies_clear() {
        let parsed: ProviderResponse = serde_json::from_str(
            r#"{
                "name": "Paris",
                "dt": 500,
                "sys": { "country": "FR", "sunrise": 100, "sunset": 1000 },
                "main": { "temp": 21.6, "feels_like": 20.1, "humidity": 64, "pressure": 1012 },
                "wind": { "speed": 4.6 },
                "visibility": 10000,
                "weather": []
            }"#,
        )
        .unwrap();

        let record = parsed.into_record();
        assert_eq!(record.condition, Condition::Clear);
        assert_eq!(record.description, "");
    }
}
