//! Intensity-aware advice for Hyderabad complaints.
//!
//! Each `(category, tier)` pair maps to one primary action and an ordered
//! list of follow-up actions. The table is static and total over
//! [`IssueCategory`] × [`IntensityTier`].

use complaint_map_complaint_models::{IntensityTier, IssueCategory};
use serde::Serialize;

/// Advice text for one `(category, tier)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    /// The main recommended action.
    pub primary: &'static str,
    /// Follow-up actions, in recommended order.
    pub additional: &'static [&'static str],
}

impl Advice {
    const fn new(primary: &'static str, additional: &'static [&'static str]) -> Self {
        Self {
            primary,
            additional,
        }
    }
}

/// Resolves the advice for a category at a raw intensity.
#[must_use]
pub const fn resolve(category: IssueCategory, intensity: i64) -> Advice {
    advice_for(category, crate::tier(intensity))
}

/// Resolves advice from a category label, treating unrecognized labels as
/// [`IssueCategory::Other`].
#[must_use]
pub fn resolve_label(label: &str, intensity: i64) -> Advice {
    resolve(IssueCategory::from_label(label), intensity)
}

/// Looks up the advice entry for a category and tier.
#[must_use]
#[allow(clippy::too_many_lines)]
pub const fn advice_for(category: IssueCategory, tier: IntensityTier) -> Advice {
    use IntensityTier::{High, Low, Medium};

    match (category, tier) {
        // ── Air ─────────────────────────────────────────────────────
        (IssueCategory::Air, Low) => Advice::new(
            "Monitor air quality trends and local traffic conditions.",
            &[
                "Encourage public transport and carpooling.",
                "Inspect nearby construction sites for dust control.",
                "Promote tree plantation along roads.",
                "Install temporary dust screens near roadworks.",
                "Conduct vehicle idling awareness campaigns.",
            ],
        ),
        (IssueCategory::Air, Medium) => Advice::new(
            "Reduce vehicular emissions and construction dust.",
            &[
                "Restrict heavy vehicle entry during peak hours.",
                "Mandate water sprinkling at construction sites.",
                "Improve traffic signal coordination.",
                "Increase roadside green buffers.",
                "Carry out spot emission testing.",
            ],
        ),
        (IssueCategory::Air, High) => Advice::new(
            "Enforce strict air pollution control measures immediately.",
            &[
                "Suspend high-emission construction activities.",
                "Declare temporary low-emission zones.",
                "Deploy mobile air quality monitoring units.",
                "Penalize industries violating emission norms.",
                "Coordinate inter-departmental emergency response.",
            ],
        ),

        // ── Noise ───────────────────────────────────────────────────
        (IssueCategory::Noise, Low) => Advice::new(
            "Monitor noise levels and issue advisories.",
            &[
                "Display noise limit signboards.",
                "Discourage unnecessary honking.",
                "Educate shop owners and residents.",
                "Map recurring noise hotspots.",
            ],
        ),
        (IssueCategory::Noise, Medium) => Advice::new(
            "Control traffic and construction-related noise.",
            &[
                "Restrict construction timings.",
                "Install temporary noise barriers.",
                "Deploy traffic marshals.",
                "Issue warnings to repeat offenders.",
            ],
        ),
        (IssueCategory::Noise, High) => Advice::new(
            "Immediate enforcement against excessive noise sources.",
            &[
                "Confiscate illegal loudspeakers.",
                "Impose fines on violations.",
                "Restrict night-time heavy vehicle movement.",
                "Install permanent noise barriers.",
                "Revise zoning rules for sensitive areas.",
            ],
        ),

        // ── Heat ────────────────────────────────────────────────────
        (IssueCategory::Heat, Low) => Advice::new(
            "Provide basic heat relief measures.",
            &[
                "Install temporary shade structures.",
                "Ensure drinking water availability.",
                "Display heat awareness signage.",
                "Adjust maintenance schedules to cooler hours.",
            ],
        ),
        (IssueCategory::Heat, Medium) => Advice::new(
            "Reduce heat exposure through urban design.",
            &[
                "Install shaded bus stops.",
                "Increase roadside tree cover.",
                "Apply reflective coatings on pavements.",
                "Expand green medians.",
            ],
        ),
        (IssueCategory::Heat, High) => Advice::new(
            "Activate heat mitigation infrastructure urgently.",
            &[
                "Implement the city Heat Action Plan.",
                "Promote cool-roof programs.",
                "Create permanent shaded corridors.",
                "Set up heat relief centers.",
                "Coordinate emergency health response.",
            ],
        ),

        // ── Odour ───────────────────────────────────────────────────
        (IssueCategory::Odour, Low) => Advice::new(
            "Inspect sanitation conditions and monitor odor occurrence.",
            &[
                "Increase waste collection frequency.",
                "Clean nearby drains.",
                "Educate residents on waste segregation.",
                "Monitor open dumping sites.",
            ],
        ),
        (IssueCategory::Odour, Medium) => Advice::new(
            "Identify and control odor-generating sources.",
            &[
                "Deploy sanitation teams for deep cleaning.",
                "Cover open drains temporarily.",
                "Improve waste transport logistics.",
                "Issue notices for improper dumping.",
            ],
        ),
        (IssueCategory::Odour, High) => Advice::new(
            "Immediate sanitation intervention required.",
            &[
                "Seal chronic dumping hotspots.",
                "Upgrade waste processing infrastructure.",
                "Penalize repeat violators.",
                "Install permanent drain covers.",
                "Deploy odor-neutralizing treatments.",
            ],
        ),

        // ── Cycling / Walking ───────────────────────────────────────
        (IssueCategory::CyclingWalking, Low) => Advice::new(
            "Fix minor pedestrian and cycling issues.",
            &[
                "Repair footpath cracks.",
                "Improve signage and markings.",
                "Clear minor obstructions.",
                "Enhance crossing visibility.",
            ],
        ),
        (IssueCategory::CyclingWalking, Medium) => Advice::new(
            "Improve pedestrian and cyclist safety.",
            &[
                "Upgrade footpaths.",
                "Improve street lighting.",
                "Introduce traffic calming measures.",
                "Add pedestrian refuges.",
            ],
        ),
        (IssueCategory::CyclingWalking, High) => Advice::new(
            "Redesign streets for non-motorized transport.",
            &[
                "Build protected cycling lanes.",
                "Remove permanent encroachments.",
                "Implement pedestrian-only zones.",
                "Reduce vehicle speed limits.",
                "Revise street hierarchy.",
            ],
        ),

        // ── Water ───────────────────────────────────────────────────
        (IssueCategory::Water, Low) => Advice::new(
            "Inspect drainage systems.",
            &[
                "Clear minor blockages.",
                "Monitor water stagnation.",
                "Educate residents on drain misuse.",
            ],
        ),
        (IssueCategory::Water, Medium) => Advice::new(
            "Restore proper drainage flow.",
            &[
                "Desilt drains.",
                "Repair damaged drainage sections.",
                "Remove encroachments.",
                "Improve slope alignment.",
            ],
        ),
        (IssueCategory::Water, High) => Advice::new(
            "Urgent flood mitigation required.",
            &[
                "Increase drainage capacity.",
                "Install pumping systems.",
                "Restore natural water channels.",
                "Implement flood early-warning systems.",
                "Coordinate disaster response teams.",
            ],
        ),

        // ── Other ───────────────────────────────────────────────────
        (IssueCategory::Other, Low) => {
            Advice::new("Monitor the situation.", &["Collect citizen feedback."])
        }
        (IssueCategory::Other, Medium) => Advice::new(
            "Conduct a detailed local assessment.",
            &["Prepare short-term action plan."],
        ),
        (IssueCategory::Other, High) => Advice::new(
            "Plan infrastructure-level intervention.",
            &["Allocate budget and resources."],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_high() {
        let advice = resolve(IssueCategory::Heat, 5);
        assert_eq!(
            advice.primary,
            "Activate heat mitigation infrastructure urgently."
        );
        assert_eq!(advice.additional.len(), 5);
        assert_eq!(advice.additional[0], "Implement the city Heat Action Plan.");
    }

    #[test]
    fn unknown_label_falls_back_to_other() {
        let advice = resolve_label("UnknownCategory", 3);
        assert_eq!(advice.primary, "Conduct a detailed local assessment.");
        assert_eq!(advice.additional, ["Prepare short-term action plan."]);
    }

    #[test]
    fn near_miss_labels_fall_back_to_other() {
        let other_high = "Plan infrastructure-level intervention.";
        assert_eq!(resolve_label("air", 5).primary, other_high);
        assert_eq!(resolve_label("Air quality", 5).primary, other_high);
        assert_eq!(resolve_label("Odor", 5).primary, other_high);
        assert_eq!(
            resolve_label("Air", 5).primary,
            resolve(IssueCategory::Air, 5).primary
        );
    }

    #[test]
    fn label_and_enum_agree() {
        for cat in IssueCategory::all() {
            for intensity in 1..=5 {
                assert_eq!(
                    resolve_label(&cat.to_string(), intensity),
                    resolve(*cat, intensity)
                );
            }
        }
    }

    #[test]
    fn every_entry_has_text() {
        for cat in IssueCategory::all() {
            for tier in IntensityTier::all() {
                let advice = advice_for(*cat, *tier);
                assert!(!advice.primary.is_empty(), "{cat:?}/{tier:?} has no primary");
                assert!(
                    advice.additional.iter().all(|s| !s.is_empty()),
                    "{cat:?}/{tier:?} has an empty additional action"
                );
            }
        }
    }

    #[test]
    fn out_of_range_intensity_still_resolves() {
        assert_eq!(resolve(IssueCategory::Water, 0).primary, "Inspect drainage systems.");
        assert_eq!(
            resolve(IssueCategory::Water, 100).primary,
            "Urgent flood mitigation required."
        );
        assert_eq!(
            resolve(IssueCategory::Noise, i64::MIN).primary,
            "Monitor noise levels and issue advisories."
        );
    }

    #[test]
    fn tiers_pick_distinct_entries() {
        for cat in IssueCategory::all() {
            assert_ne!(resolve(*cat, 1).primary, resolve(*cat, 3).primary);
            assert_ne!(resolve(*cat, 3).primary, resolve(*cat, 5).primary);
        }
    }
}
