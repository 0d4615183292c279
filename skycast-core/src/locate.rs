//! IP-based locate service
//!
//! The terminal has no geolocation permission prompt; instead the
//! current position comes from an ip-api style endpoint, and locating
//! can be switched off entirely in the config.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_LOCATE_URL: &str = "http://ip-api.com";

/// A resolved coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Locate failures.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Locating is disabled in config; no network call was made.
    #[error("locating is disabled")]
    Unsupported,

    /// The service failed, returned a fail status, or could not be
    /// parsed.
    #[error("locate lookup failed: {0}")]
    Failed(String),
}

/// Client for the locate endpoint. Cheap to clone.
#[derive(Clone, Debug)]
pub struct LocateClient {
    http: Client,
    base_url: String,
    enabled: bool,
}

impl LocateClient {
    pub fn new(enabled: bool) -> Self {
        Self::with_base_url(enabled, DEFAULT_LOCATE_URL)
    }

    pub fn with_base_url(enabled: bool, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Resolve the current position.
    pub async fn locate(&self) -> Result<Coordinates, LocateError> {
        if !self.enabled {
            return Err(LocateError::Unsupported);
        }

        debug!("resolving position via locate service");
        let url = format!("{}/json", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LocateError::Failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "locate service returned non-success");
            return Err(LocateError::Failed(format!("status {}", status.as_u16())));
        }

        let body: LocateResponse = response
            .json()
            .await
            .map_err(|e| LocateError::Failed(e.to_string()))?;

        match body {
            LocateResponse {
                status,
                lat: Some(lat),
                lon: Some(lon),
            } if status == "success" => Ok(Coordinates {
                latitude: lat,
                longitude: lon,
            }),
            LocateResponse { status, .. } => {
                warn!(status, "locate service reported failure");
                Err(LocateError::Failed(format!("service status {status:?}")))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct LocateResponse {
    #[serde(default)]
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
}
