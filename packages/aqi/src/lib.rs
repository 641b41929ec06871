#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Live air quality for Hyderabad.
//!
//! Fetches monitoring stations from the WAQI map-bounds API, caches the
//! station list for a few minutes, and reduces it to a single city-wide
//! figure. When no station is reporting (Indian stations often pause
//! overnight) the last live average is shown instead.

pub mod cache;
pub mod service;
pub mod waqi;

use chrono::{DateTime, Utc};
use complaint_map_aqi_models::{AqiStation, CityAqi, HeatPoint};
use thiserror::Error;

pub use cache::{LastKnownAqi, StationCache};
pub use service::WaqiService;

/// Number of stations shown in the side list.
pub const STATION_LIST_LIMIT: usize = 10;

/// Errors from the air quality client.
#[derive(Debug, Error)]
pub enum AqiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// WAQI answered with a non-`ok` status.
    #[error("WAQI API error (status: {status})")]
    Api {
        /// Status string from the response.
        status: String,
    },

    /// Response body had an unexpected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// What was wrong.
        message: String,
    },

    /// Embedded service configuration is malformed.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// No API token configured.
    #[error("WAQI token not set (export {})", service::TOKEN_ENV_VAR)]
    MissingToken,
}

/// Reduces a station list to the city-wide AQI.
///
/// The mean of all reporting stations (truncated) is returned as
/// [`CityAqi::Live`] and remembered in `last_known`. With stations but
/// none reporting, the remembered value is returned as
/// [`CityAqi::LastKnown`], or [`CityAqi::Unavailable`] if nothing has been
/// remembered yet. An empty station list is always
/// [`CityAqi::Unavailable`].
#[must_use]
pub fn summarize(
    stations: &[AqiStation],
    last_known: &LastKnownAqi,
    now: DateTime<Utc>,
) -> CityAqi {
    if stations.is_empty() {
        return CityAqi::Unavailable;
    }

    let valid: Vec<u64> = stations
        .iter()
        .filter_map(|s| s.aqi.map(u64::from))
        .collect();

    if !valid.is_empty() {
        let sum: u64 = valid.iter().sum();
        let avg = u32::try_from(sum / valid.len() as u64).unwrap_or(u32::MAX);
        last_known.set(avg, now);
        return CityAqi::Live {
            value: avg,
            updated_at: now,
        };
    }

    match last_known.get() {
        Some((value, updated_at)) => {
            log::info!("No live AQI readings, falling back to last known value {value}");
            CityAqi::LastKnown { value, updated_at }
        }
        None => CityAqi::Unavailable,
    }
}

/// Heat-layer points for the stations that have a reading.
#[must_use]
pub fn heat_points(stations: &[AqiStation]) -> Vec<HeatPoint> {
    stations
        .iter()
        .filter_map(|s| s.aqi.map(|aqi| [s.lat, s.lon, f64::from(aqi)]))
        .collect()
}

/// The stations shown in the side list, in API order.
#[must_use]
pub fn listed_stations(stations: &[AqiStation]) -> &[AqiStation] {
    &stations[..stations.len().min(STATION_LIST_LIMIT)]
}
