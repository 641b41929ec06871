#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Air quality station and city summary types.
//!
//! Values follow the WAQI air quality index scale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A monitoring station and its latest reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiStation {
    /// Station name as reported by WAQI (often `"Area, City, Country"`).
    pub name: String,
    /// Latitude (WGS84).
    pub lat: f64,
    /// Longitude (WGS84).
    pub lon: f64,
    /// Latest AQI, `None` when the station is not reporting.
    pub aqi: Option<u32>,
}

impl AqiStation {
    /// Station name up to the first comma (`"Sanathnagar, Hyderabad"` →
    /// `"Sanathnagar"`).
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.split(',').next().unwrap_or(&self.name)
    }

    /// Health band of this station's reading.
    #[must_use]
    pub fn level(&self) -> AqiLevel {
        AqiLevel::from_aqi(self.aqi)
    }
}

/// Health band of an AQI value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AqiLevel {
    /// No reading
    Unavailable,
    /// 0-50
    Good,
    /// 51-100
    Moderate,
    /// 101-150
    UnhealthySensitive,
    /// 151-200
    Unhealthy,
    /// 201-300
    VeryUnhealthy,
    /// Above 300
    Hazardous,
}

impl AqiLevel {
    /// Bands a reading. `None` is [`Self::Unavailable`].
    #[must_use]
    pub const fn from_aqi(aqi: Option<u32>) -> Self {
        match aqi {
            None => Self::Unavailable,
            Some(0..=50) => Self::Good,
            Some(51..=100) => Self::Moderate,
            Some(101..=150) => Self::UnhealthySensitive,
            Some(151..=200) => Self::Unhealthy,
            Some(201..=300) => Self::VeryUnhealthy,
            Some(_) => Self::Hazardous,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unavailable => "Unavailable",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthySensitive => "Unhealthy (Sensitive)",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Display colour for cards and map markers.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Unavailable => "#9e9e9e",
            Self::Good => "#4CAF50",
            Self::Moderate => "#FBC02D",
            Self::UnhealthySensitive => "#FF9800",
            Self::Unhealthy => "#E53935",
            Self::VeryUnhealthy => "#8E24AA",
            Self::Hazardous => "#7E0023",
        }
    }
}

/// The city-wide AQI shown on the dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CityAqi {
    /// Average of the stations currently reporting.
    Live {
        /// Mean AQI, truncated.
        value: u32,
        /// When the average was computed.
        updated_at: DateTime<Utc>,
    },
    /// No station is reporting; the last live average is shown instead.
    LastKnown {
        /// Most recent live average.
        value: u32,
        /// When that average was computed.
        updated_at: DateTime<Utc>,
    },
    /// Nothing live and nothing remembered.
    Unavailable,
}

impl CityAqi {
    /// The AQI to display, if any.
    #[must_use]
    pub const fn value(&self) -> Option<u32> {
        match self {
            Self::Live { value, .. } | Self::LastKnown { value, .. } => Some(*value),
            Self::Unavailable => None,
        }
    }

    /// Health band of the displayed value.
    #[must_use]
    pub const fn level(&self) -> AqiLevel {
        AqiLevel::from_aqi(self.value())
    }

    /// Label for the card. [`Self::Unavailable`] reads "Temporarily
    /// Unavailable" rather than the bare band name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unavailable => "Temporarily Unavailable",
            _ => self.level().label(),
        }
    }

    /// Freshness line for the card.
    #[must_use]
    pub fn time_label(&self) -> String {
        match self {
            Self::Live { updated_at, .. } => format!("Updated {}", updated_at.format("%H:%M")),
            Self::LastKnown { updated_at, .. } => {
                format!("Last updated {}", updated_at.format("%d %b %Y, %H:%M"))
            }
            Self::Unavailable => "Live data unavailable".to_string(),
        }
    }
}

/// A weighted heat-layer point: `[lat, lon, aqi]`.
pub type HeatPoint = [f64; 3];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    #[test]
    fn level_boundaries() {
        assert_eq!(AqiLevel::from_aqi(None), AqiLevel::Unavailable);
        assert_eq!(AqiLevel::from_aqi(Some(0)), AqiLevel::Good);
        assert_eq!(AqiLevel::from_aqi(Some(50)), AqiLevel::Good);
        assert_eq!(AqiLevel::from_aqi(Some(51)), AqiLevel::Moderate);
        assert_eq!(AqiLevel::from_aqi(Some(100)), AqiLevel::Moderate);
        assert_eq!(AqiLevel::from_aqi(Some(150)), AqiLevel::UnhealthySensitive);
        assert_eq!(AqiLevel::from_aqi(Some(200)), AqiLevel::Unhealthy);
        assert_eq!(AqiLevel::from_aqi(Some(300)), AqiLevel::VeryUnhealthy);
        assert_eq!(AqiLevel::from_aqi(Some(301)), AqiLevel::Hazardous);
    }

    #[test]
    fn level_labels_and_colors() {
        assert_eq!(AqiLevel::UnhealthySensitive.label(), "Unhealthy (Sensitive)");
        assert_eq!(AqiLevel::Good.color(), "#4CAF50");
        assert_eq!(AqiLevel::Unavailable.color(), "#9e9e9e");
    }

    #[test]
    fn short_name_cuts_at_comma() {
        let station = AqiStation {
            name: "Sanathnagar, Hyderabad, India".to_string(),
            lat: 17.45,
            lon: 78.44,
            aqi: Some(88),
        };
        assert_eq!(station.short_name(), "Sanathnagar");
        assert_eq!(station.level(), AqiLevel::Moderate);
    }

    #[test]
    fn city_aqi_labels() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let live = CityAqi::Live {
            value: 120,
            updated_at: at,
        };
        assert_eq!(live.label(), "Unhealthy (Sensitive)");
        assert_eq!(live.time_label(), "Updated 14:05");

        let last = CityAqi::LastKnown {
            value: 40,
            updated_at: at,
        };
        assert_eq!(last.label(), "Good");
        assert_eq!(last.time_label(), "Last updated 09 Mar 2024, 14:05");

        assert_eq!(CityAqi::Unavailable.label(), "Temporarily Unavailable");
        assert_eq!(CityAqi::Unavailable.value(), None);
        assert_eq!(CityAqi::Unavailable.level().color(), "#9e9e9e");
    }
}
