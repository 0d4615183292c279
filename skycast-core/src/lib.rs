//! Weather domain for skycast
//!
//! This crate holds everything that is independent of the terminal UI:
//!
//! - **Client**: OpenWeatherMap-compatible HTTP client (`fetch_by_city`,
//!   `fetch_by_coordinates`) producing a normalized [`WeatherRecord`]
//! - **Model**: the normalized record plus the closed [`Condition`] set
//! - **Locate**: IP-based geolocation lookup
//! - **Config**: API key and service settings from a TOML file
//!
//! No logging subscriber is installed here; the crate only emits
//! `tracing` events for the application to collect.

pub mod client;
pub mod config;
pub mod locate;
pub mod model;

pub use client::{FetchError, WeatherClient};
pub use config::{Config, ConfigError};
pub use locate::{Coordinates, LocateClient, LocateError};
pub use model::{Condition, WeatherQuery, WeatherRecord};
