#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Complaint category taxonomy, intensity tiers, and complaint records.
//!
//! Citizens file complaints with a free-text issue label and a 1-5
//! intensity. Everything downstream (map colours, advice lookup,
//! authority routing) works on the closed [`IssueCategory`] set and the
//! coarse [`IntensityTier`] derived here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Intensity assumed for complaints stored without one.
pub const DEFAULT_INTENSITY: i64 = 1;

/// Default map centre latitude (central Hyderabad).
pub const DEFAULT_LAT: f64 = 17.4065;

/// Default map centre longitude (central Hyderabad).
pub const DEFAULT_LON: f64 = 78.4772;

/// Default zoom level for the complaint map.
pub const DEFAULT_ZOOM: u8 = 13;

/// Zoom level used when centring the map on a single complaint.
pub const COMPLAINT_ZOOM: u8 = 14;

/// Canonical complaint categories.
///
/// Derived from the stored `issue_type` on every read, never persisted.
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
pub enum IssueCategory {
    /// Air quality, dust, smoke
    #[strum(to_string = "Air")]
    Air,
    /// Traffic, construction, and loudspeaker noise
    #[strum(to_string = "Noise")]
    Noise,
    /// Heat islands and heat exposure
    #[strum(to_string = "Heat")]
    Heat,
    /// Sanitation and bad smells
    #[strum(to_string = "Odour")]
    Odour,
    /// Footpaths, crossings, and cycle lanes
    #[serde(rename = "Cycling / Walking")]
    #[strum(to_string = "Cycling / Walking")]
    CyclingWalking,
    /// Drainage, waterlogging, and flooding
    #[strum(to_string = "Water")]
    Water,
    /// Anything that matches no other category
    #[strum(to_string = "Other")]
    Other,
}

impl IssueCategory {
    /// Parses a category label, falling back to [`Self::Other`] for
    /// anything unrecognized.
    ///
    /// Only the exact display labels are recognized: no trimming, no case
    /// folding, no aliases.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::Other)
    }

    /// Hex colour used for this category on map markers and legends.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Air => "#ff6961",
            Self::Noise => "#5c7cfa",
            Self::Heat => "#ffa94d",
            Self::Odour => "#9b5de5",
            Self::CyclingWalking => "#51cf66",
            Self::Water => "#97d2ff",
            Self::Other => "#6c757d",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Air,
            Self::Noise,
            Self::Heat,
            Self::Odour,
            Self::CyclingWalking,
            Self::Water,
            Self::Other,
        ]
    }
}

/// Coarse bucket of a complaint's intensity, used to pick advice text.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IntensityTier {
    /// Intensity 2 or below
    Low,
    /// Intensity exactly 3
    Medium,
    /// Intensity 4 or above
    High,
}

impl IntensityTier {
    /// Buckets a raw intensity.
    ///
    /// No bounds checking: values outside 1-5 follow the same rule, so
    /// `0` is [`Self::Low`] and `100` is [`Self::High`].
    #[must_use]
    pub const fn from_intensity(intensity: i64) -> Self {
        if intensity <= 2 {
            Self::Low
        } else if intensity == 3 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

/// A complaint row as loaded from the complaint store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    /// Primary key.
    pub id: i64,
    /// Latitude (WGS84).
    pub lat: f64,
    /// Longitude (WGS84).
    pub lon: f64,
    /// Free-text issue label as submitted.
    pub issue_type: Option<String>,
    /// Citizen-reported intensity, nominally 1-5.
    pub intensity: Option<i64>,
    /// Optional free-text description.
    pub description: Option<String>,
    /// When the complaint was reported.
    pub timestamp: DateTime<Utc>,
}

impl ComplaintRecord {
    /// Stored intensity, or [`DEFAULT_INTENSITY`] when absent.
    #[must_use]
    pub fn effective_intensity(&self) -> i64 {
        self.intensity.unwrap_or(DEFAULT_INTENSITY)
    }

    /// Tier of [`Self::effective_intensity`].
    #[must_use]
    pub fn tier(&self) -> IntensityTier {
        IntensityTier::from_intensity(self.effective_intensity())
    }
}

/// A complaint to be written to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComplaint {
    /// Latitude (WGS84).
    pub lat: f64,
    /// Longitude (WGS84).
    pub lon: f64,
    /// Free-text issue label.
    pub issue_type: Option<String>,
    /// Intensity, nominally 1-5.
    pub intensity: Option<i64>,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Report time.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(IntensityTier::from_intensity(1), IntensityTier::Low);
        assert_eq!(IntensityTier::from_intensity(2), IntensityTier::Low);
        assert_eq!(IntensityTier::from_intensity(3), IntensityTier::Medium);
        assert_eq!(IntensityTier::from_intensity(4), IntensityTier::High);
        assert_eq!(IntensityTier::from_intensity(5), IntensityTier::High);
    }

    #[test]
    fn tier_out_of_range() {
        assert_eq!(IntensityTier::from_intensity(0), IntensityTier::Low);
        assert_eq!(IntensityTier::from_intensity(-7), IntensityTier::Low);
        assert_eq!(IntensityTier::from_intensity(100), IntensityTier::High);
        assert_eq!(IntensityTier::from_intensity(i64::MAX), IntensityTier::High);
    }

    #[test]
    fn labels_round_trip_through_from_label() {
        for cat in IssueCategory::all() {
            assert_eq!(IssueCategory::from_label(&cat.to_string()), *cat);
        }
    }

    #[test]
    fn from_label_is_exact() {
        assert_eq!(IssueCategory::from_label("air"), IssueCategory::Other);
        assert_eq!(IssueCategory::from_label("Odor"), IssueCategory::Other);
        assert_eq!(IssueCategory::from_label("Air quality"), IssueCategory::Other);
        assert_eq!(IssueCategory::from_label(" Heat"), IssueCategory::Other);
        assert_eq!(
            IssueCategory::from_label("cycling / walking"),
            IssueCategory::Other
        );
        assert_eq!(
            IssueCategory::from_label("Cycling / Walking"),
            IssueCategory::CyclingWalking
        );
    }

    #[test]
    fn from_label_unknown_is_other() {
        assert_eq!(
            IssueCategory::from_label("UnknownCategory"),
            IssueCategory::Other
        );
        assert_eq!(IssueCategory::from_label(""), IssueCategory::Other);
    }

    #[test]
    fn cycling_serializes_with_display_label() {
        let json = serde_json::to_string(&IssueCategory::CyclingWalking).unwrap();
        assert_eq!(json, "\"Cycling / Walking\"");
    }

    #[test]
    fn missing_intensity_defaults_to_one() {
        let record = ComplaintRecord {
            id: 1,
            lat: DEFAULT_LAT,
            lon: DEFAULT_LON,
            issue_type: Some("Noise".to_string()),
            intensity: None,
            description: None,
            timestamp: Utc::now(),
        };
        assert_eq!(record.effective_intensity(), 1);
        assert_eq!(record.tier(), IntensityTier::Low);
    }
}
