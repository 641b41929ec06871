#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Complaint classification and tiered solution lookup.
//!
//! Turns a stored complaint into something actionable:
//!
//! 1. [`classify::classify`] normalizes the free-text issue label to an
//!    [`IssueCategory`].
//! 2. [`tier`] buckets the 1-5 intensity, and [`advice::resolve`] picks
//!    the primary and follow-up actions for the category at that tier.
//! 3. [`authority::authority_for`] names the department to contact.
//!
//! All lookups are pure functions over static tables and are safe to call
//! from any thread.

pub mod advice;
pub mod authority;
pub mod classify;

use complaint_map_complaint_models::{ComplaintRecord, IntensityTier, IssueCategory};

pub use advice::{Advice, resolve, resolve_label};
pub use authority::{Authority, authority_for, authority_for_label};
pub use classify::classify;

/// Buckets a raw intensity into its advice tier.
///
/// `<= 2` is low, `3` is medium, `>= 4` is high. Values outside 1-5 are
/// not rejected.
#[must_use]
pub const fn tier(intensity: i64) -> IntensityTier {
    IntensityTier::from_intensity(intensity)
}

/// Everything the dashboard shows for one complaint's suggested fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// Canonical category derived from the issue label.
    pub category: IssueCategory,
    /// Intensity used for the lookup (stored value or the default).
    pub intensity: i64,
    /// Tier derived from `intensity`.
    pub tier: IntensityTier,
    /// Suggested actions.
    pub advice: Advice,
    /// Who to contact.
    pub authority: Authority,
}

impl Solution {
    /// Builds the solution for a category at a raw intensity.
    #[must_use]
    pub const fn new(category: IssueCategory, intensity: i64) -> Self {
        Self {
            category,
            intensity,
            tier: tier(intensity),
            advice: resolve(category, intensity),
            authority: authority_for(category),
        }
    }

    /// Builds the solution for a stored complaint, classifying its label
    /// and defaulting a missing intensity.
    #[must_use]
    pub fn for_complaint(record: &ComplaintRecord) -> Self {
        Self::new(
            classify(record.issue_type.as_deref()),
            record.effective_intensity(),
        )
    }
}

/// Returns the most recently reported complaint.
///
/// Ties on timestamp go to the record that appears last in `records`.
#[must_use]
pub fn latest_complaint(records: &[ComplaintRecord]) -> Option<&ComplaintRecord> {
    records
        .iter()
        .enumerate()
        .max_by_key(|(idx, record)| (record.timestamp, *idx))
        .map(|(_, record)| record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone as _, Utc};

    fn record(id: i64, issue: Option<&str>, intensity: Option<i64>, hour: u32) -> ComplaintRecord {
        ComplaintRecord {
            id,
            lat: 17.4,
            lon: 78.47,
            issue_type: issue.map(String::from),
            intensity,
            description: None,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn solution_for_complaint_classifies_and_defaults() {
        let solution = Solution::for_complaint(&record(1, Some("Heat wave"), None, 9));
        assert_eq!(solution.category, IssueCategory::Heat);
        assert_eq!(solution.intensity, 1);
        assert_eq!(solution.tier, IntensityTier::Low);
        assert_eq!(solution.advice.primary, "Provide basic heat relief measures.");
        assert_eq!(solution.authority.name, "GHMC – Environment Wing");
    }

    #[test]
    fn solution_for_unlabelled_complaint() {
        let solution = Solution::for_complaint(&record(1, None, Some(4), 9));
        assert_eq!(solution.category, IssueCategory::Other);
        assert_eq!(
            solution.advice.primary,
            "Plan infrastructure-level intervention."
        );
    }

    #[test]
    fn latest_picks_greatest_timestamp() {
        let records = vec![
            record(1, Some("Noise"), Some(2), 8),
            record(2, Some("Heat"), Some(5), 12),
            record(3, Some("Water"), Some(3), 10),
        ];
        assert_eq!(latest_complaint(&records).map(|r| r.id), Some(2));
    }

    #[test]
    fn latest_tie_goes_to_last_row() {
        let records = vec![
            record(1, Some("Noise"), Some(2), 12),
            record(2, Some("Heat"), Some(5), 12),
        ];
        assert_eq!(latest_complaint(&records).map(|r| r.id), Some(2));
    }

    #[test]
    fn tier_ignores_range() {
        assert_eq!(tier(0), IntensityTier::Low);
        assert_eq!(tier(3), IntensityTier::Medium);
        assert_eq!(tier(100), IntensityTier::High);
        assert_eq!(tier(-1), IntensityTier::Low);
    }

    #[test]
    fn latest_of_nothing() {
        assert!(latest_complaint(&[]).is_none());
    }

    #[test]
    fn solution_is_deterministic() {
        let a = Solution::new(IssueCategory::Odour, 3);
        let b = Solution::new(IssueCategory::Odour, 3);
        assert_eq!(a, b);
    }
}
