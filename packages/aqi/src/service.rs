//! Embedded WAQI service configuration.
//!
//! The endpoint, Hyderabad bounding box, and cache TTL live in
//! `services/waqi.toml` and are compiled into the binary. The API token is
//! not part of the file; it comes from the `WAQI_TOKEN` environment
//! variable.

use std::time::Duration;

use serde::Deserialize;

use crate::AqiError;

/// Environment variable holding the WAQI API token.
pub const TOKEN_ENV_VAR: &str = "WAQI_TOKEN";

const WAQI_TOML: &str = include_str!("../services/waqi.toml");

/// WAQI service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WaqiService {
    /// Service identifier.
    pub id: String,
    /// Human-readable name, shown as the data source caption.
    pub name: String,
    /// API base URL (e.g., `"https://api.waqi.info"`).
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// How long a fetched station list stays fresh, in seconds.
    pub cache_ttl_secs: u64,
    /// Map centre for the AQI view.
    pub center: MapCenter,
    /// Area to query stations in.
    pub bounds: Bounds,
}

/// Map centre and zoom.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MapCenter {
    /// Latitude (WGS84).
    pub lat: f64,
    /// Longitude (WGS84).
    pub lon: f64,
    /// Initial zoom level.
    pub zoom: u8,
}

/// Latitude/longitude box.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Bounds {
    /// Southern edge.
    pub lat_min: f64,
    /// Western edge.
    pub lon_min: f64,
    /// Northern edge.
    pub lat_max: f64,
    /// Eastern edge.
    pub lon_max: f64,
}

impl Bounds {
    /// Formats the box as WAQI's `latlng` parameter:
    /// `lat_min,lon_min,lat_max,lon_max`.
    #[must_use]
    pub fn to_latlng(&self) -> String {
        format!(
            "{},{},{},{}",
            self.lat_min, self.lon_min, self.lat_max, self.lon_max
        )
    }
}

impl WaqiService {
    /// Loads the embedded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AqiError::Config`] if the embedded TOML is malformed.
    pub fn load() -> Result<Self, AqiError> {
        Ok(toml::de::from_str(WAQI_TOML)?)
    }

    /// Request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Station cache TTL.
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// URL of the "stations in bounds" endpoint.
    #[must_use]
    pub fn bounds_url(&self) -> String {
        format!("{}/map/bounds/", self.base_url.trim_end_matches('/'))
    }
}

/// Reads the API token from [`TOKEN_ENV_VAR`].
///
/// # Errors
///
/// Returns [`AqiError::MissingToken`] if the variable is unset or empty.
pub fn token_from_env() -> Result<String, AqiError> {
    std::env::var(TOKEN_ENV_VAR)
        .ok()
        .filter(|t| !t.trim().is_empty())
        .ok_or(AqiError::MissingToken)
}
