//! Plain-text rendering for terminal output.

use std::fmt::Write as _;

use complaint_map_aqi_models::{AqiStation, CityAqi};
use complaint_map_complaint_models::{ComplaintRecord, IssueCategory};
use complaint_map_solutions::{Authority, Solution, classify};

/// Renders a solution: tier, actions, and who to contact.
pub fn solution(solution: &Solution) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (intensity {}, {} priority)",
        solution.category, solution.intensity, solution.tier
    );
    let _ = writeln!(out, "  Suggested action: {}", solution.advice.primary);
    for action in solution.advice.additional {
        let _ = writeln!(out, "    - {action}");
    }
    out.push_str(&authority(solution.category, solution.authority));
    out
}

/// Renders an authority contact block.
pub fn authority(category: IssueCategory, authority: Authority) -> String {
    format!(
        "  Contact for {category}: {}\n    Phone: {}\n    Email: {}\n",
        authority.name, authority.phone, authority.email
    )
}

/// Renders a stored complaint.
pub fn complaint(record: &ComplaintRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Complaint #{} at {} ({:.4}, {:.4})",
        record.id,
        record.timestamp.format("%Y-%m-%d %H:%M UTC"),
        record.lat,
        record.lon
    );
    let _ = writeln!(
        out,
        "  Issue: {} -> {}",
        record.issue_type.as_deref().unwrap_or("(none)"),
        classify(record.issue_type.as_deref())
    );
    if let Some(description) = &record.description {
        let _ = writeln!(out, "  Description: {description}");
    }
    out
}

/// Renders the city-wide AQI card.
pub fn city_aqi(reading: &CityAqi, station_count: usize, source: &str) -> String {
    let value = reading
        .value()
        .map_or_else(|| "--".to_string(), |v| v.to_string());
    format!(
        "Hyderabad AQI: {value} ({})\n  {}\n  Stations: {station_count}\n  Source: {source}\n",
        reading.label(),
        reading.time_label()
    )
}

/// Renders one line of the station list.
pub fn station_line(station: &AqiStation) -> String {
    let aqi = station
        .aqi
        .map_or_else(|| "N/A".to_string(), |v| v.to_string());
    format!(
        "  {:<30} {aqi:>4}  {}",
        station.short_name(),
        station.level().label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone as _, Utc};

    #[test]
    fn solution_lists_actions_and_contact() {
        let text = solution(&Solution::new(IssueCategory::Noise, 5));
        assert!(text.starts_with("Noise (intensity 5, high priority)"));
        assert!(text.contains("Suggested action: Immediate enforcement against excessive noise sources."));
        assert!(text.contains("    - Confiscate illegal loudspeakers."));
        assert!(text.contains("Contact for Noise: Hyderabad Traffic Police"));
        assert!(text.contains("Phone: 100"));
    }

    #[test]
    fn complaint_without_label() {
        let record = ComplaintRecord {
            id: 3,
            lat: 17.385,
            lon: 78.4867,
            issue_type: None,
            intensity: None,
            description: None,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap(),
        };
        let text = complaint(&record);
        assert!(text.contains("Complaint #3 at 2024-03-05 09:30 UTC"));
        assert!(text.contains("Issue: (none) -> Other"));
        assert!(!text.contains("Description"));
    }

    #[test]
    fn station_line_missing_reading() {
        let station = AqiStation {
            name: "Zoo Park, Hyderabad, India".to_string(),
            lat: 17.35,
            lon: 78.45,
            aqi: None,
        };
        let line = station_line(&station);
        assert!(line.contains("Zoo Park"));
        assert!(!line.contains("India"));
        assert!(line.contains("N/A"));
    }

    #[test]
    fn unavailable_city_card() {
        let text = city_aqi(&CityAqi::Unavailable, 0, "WAQI");
        assert!(text.starts_with("Hyderabad AQI: -- (Temporarily Unavailable)"));
        assert!(text.contains("Live data unavailable"));
    }
}
