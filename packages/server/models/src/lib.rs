#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the complaint map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the store's row types and the static advice tables so the API
//! contract can evolve on its own.

use chrono::{DateTime, Utc};
use complaint_map_aqi_models::{AqiLevel, AqiStation, CityAqi, HeatPoint};
use complaint_map_complaint_models::{ComplaintRecord, IntensityTier, IssueCategory};
use complaint_map_solutions::{Authority, Solution};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Initial view of a map.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMapView {
    /// Centre latitude.
    pub lat: f64,
    /// Centre longitude.
    pub lon: f64,
    /// Zoom level.
    pub zoom: u8,
}

/// Frontend configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMapConfig {
    /// Complaint map view.
    pub complaint_map: ApiMapView,
    /// Air quality map view.
    pub aqi_map: ApiMapView,
    /// Air quality data source caption.
    pub aqi_source: String,
}

/// A category legend entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCategory {
    /// Category.
    pub name: IssueCategory,
    /// Marker/legend colour.
    pub color: &'static str,
}

impl From<IssueCategory> for ApiCategory {
    fn from(category: IssueCategory) -> Self {
        Self {
            name: category,
            color: category.color(),
        }
    }
}

/// A complaint as shown on the map, with its derived fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiComplaint {
    /// Complaint ID.
    pub id: i64,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// Issue label as submitted.
    pub issue_type: Option<String>,
    /// Canonical category.
    pub category: IssueCategory,
    /// Category colour.
    pub color: &'static str,
    /// Intensity (1 when not recorded).
    pub intensity: i64,
    /// Intensity tier.
    pub tier: IntensityTier,
    /// Description, if any.
    pub description: Option<String>,
    /// When the complaint was reported.
    pub timestamp: DateTime<Utc>,
    /// Primary suggested action.
    pub suggested_action: &'static str,
    /// Whether this is the most recent complaint.
    pub is_latest: bool,
}

impl ApiComplaint {
    /// Builds the API view of a stored complaint.
    #[must_use]
    pub fn new(record: &ComplaintRecord, is_latest: bool) -> Self {
        let solution = Solution::for_complaint(record);
        Self {
            id: record.id,
            lat: record.lat,
            lon: record.lon,
            issue_type: record.issue_type.clone(),
            category: solution.category,
            color: solution.category.color(),
            intensity: solution.intensity,
            tier: solution.tier,
            description: record.description.clone(),
            timestamp: record.timestamp,
            suggested_action: solution.advice.primary,
            is_latest,
        }
    }
}

/// Responsible authority contact.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAuthority {
    /// Department name.
    pub name: &'static str,
    /// Phone number.
    pub phone: &'static str,
    /// Email address.
    pub email: &'static str,
}

impl From<Authority> for ApiAuthority {
    fn from(a: Authority) -> Self {
        Self {
            name: a.name,
            phone: a.phone,
            email: a.email,
        }
    }
}

/// Full solution for a category and intensity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSolution {
    /// Canonical category.
    pub category: IssueCategory,
    /// Intensity used for the lookup.
    pub intensity: i64,
    /// Intensity tier.
    pub tier: IntensityTier,
    /// Primary suggested action.
    pub primary: &'static str,
    /// Additional actions, in order.
    pub additional: Vec<&'static str>,
    /// Who to contact.
    pub authority: ApiAuthority,
    /// The complaint this solution is for, when there is one.
    pub complaint: Option<ApiComplaint>,
}

impl From<Solution> for ApiSolution {
    fn from(s: Solution) -> Self {
        Self {
            category: s.category,
            intensity: s.intensity,
            tier: s.tier,
            primary: s.advice.primary,
            additional: s.advice.additional.to_vec(),
            authority: s.authority.into(),
            complaint: None,
        }
    }
}

/// Query parameters for the solutions endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionQueryParams {
    /// Category label; unrecognized labels resolve as `Other`.
    pub category: Option<String>,
    /// Intensity (defaults to 1).
    pub intensity: Option<i64>,
}

/// Query parameters for the classify endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyQueryParams {
    /// Raw issue label.
    pub text: Option<String>,
}

/// Result of classifying an issue label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiClassification {
    /// The label that was classified.
    pub text: Option<String>,
    /// Resulting category.
    pub category: IssueCategory,
    /// Category colour.
    pub color: &'static str,
}

/// A monitoring station with its display fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAqiStation {
    /// Full station name.
    pub name: String,
    /// Station name up to the first comma.
    pub short_name: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// Latest AQI, if reporting.
    pub aqi: Option<u32>,
    /// Health band.
    pub level: AqiLevel,
    /// Health band label.
    pub label: &'static str,
    /// Health band colour.
    pub color: &'static str,
}

impl From<&AqiStation> for ApiAqiStation {
    fn from(s: &AqiStation) -> Self {
        let level = s.level();
        Self {
            name: s.name.clone(),
            short_name: s.short_name().to_string(),
            lat: s.lat,
            lon: s.lon,
            aqi: s.aqi,
            level,
            label: level.label(),
            color: level.color(),
        }
    }
}

/// City-wide AQI card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCityAqi {
    /// Where the value came from, and the value itself.
    #[serde(flatten)]
    pub reading: CityAqi,
    /// Health band label.
    pub label: &'static str,
    /// Health band colour.
    pub color: &'static str,
    /// Freshness line.
    pub time_label: String,
    /// Number of stations returned by the API.
    pub station_count: usize,
}

impl ApiCityAqi {
    /// Builds the card for a reading over `station_count` stations.
    #[must_use]
    pub fn new(reading: CityAqi, station_count: usize) -> Self {
        Self {
            label: reading.label(),
            color: reading.level().color(),
            time_label: reading.time_label(),
            reading,
            station_count,
        }
    }
}

/// Response from the AQI endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAqiResponse {
    /// City-wide card.
    pub city: ApiCityAqi,
    /// All stations in the area.
    pub stations: Vec<ApiAqiStation>,
    /// Stations for the side list.
    pub listed: Vec<ApiAqiStation>,
    /// Heat-layer points `[lat, lon, aqi]`.
    pub heat_points: Vec<HeatPoint>,
    /// Data source caption.
    pub source: String,
    /// Notice shown instead of the map when the API returned no stations.
    pub warning: Option<&'static str>,
}

/// A section of the About page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAboutSection {
    /// Section heading.
    pub title: &'static str,
    /// Body paragraphs.
    pub paragraphs: Vec<&'static str>,
    /// Bullet items.
    pub items: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    #[test]
    fn complaint_view_derives_fields() {
        let record = ComplaintRecord {
            id: 7,
            lat: 17.44,
            lon: 78.35,
            issue_type: Some("Flooded underpass".to_string()),
            intensity: Some(5),
            description: None,
            timestamp: Utc.with_ymd_and_hms(2024, 7, 14, 6, 0, 0).unwrap(),
        };
        let api = ApiComplaint::new(&record, true);
        assert_eq!(api.category, IssueCategory::Water);
        assert_eq!(api.tier, IntensityTier::High);
        assert_eq!(api.suggested_action, "Urgent flood mitigation required.");
        assert_eq!(api.color, "#97d2ff");
        assert!(api.is_latest);
    }

    #[test]
    fn solution_serializes_camel_case() {
        let api = ApiSolution::from(Solution::new(IssueCategory::CyclingWalking, 3));
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["category"], "Cycling / Walking");
        assert_eq!(json["tier"], "medium");
        assert_eq!(json["primary"], "Improve pedestrian and cyclist safety.");
        assert_eq!(json["additional"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["authority"]["name"], "GHMC – Urban Planning");
        assert!(json["complaint"].is_null());
    }

    #[test]
    fn city_card_flattens_reading() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 22, 10, 0).unwrap();
        let card = ApiCityAqi::new(
            CityAqi::LastKnown {
                value: 180,
                updated_at: at,
            },
            6,
        );
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["status"], "lastKnown");
        assert_eq!(json["value"], 180);
        assert_eq!(json["label"], "Unhealthy");
        assert_eq!(json["color"], "#E53935");
        assert_eq!(json["stationCount"], 6);
    }
}
