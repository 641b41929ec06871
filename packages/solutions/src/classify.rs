//! Issue label classification.
//!
//! Maps free-text issue labels submitted by citizens to the canonical
//! [`IssueCategory`] set. Labels range from the form's own dropdown values
//! ("Air quality", "Odor") to whatever was typed by hand, so matching is a
//! case-insensitive substring search over a fixed, ordered keyword list.

use complaint_map_complaint_models::IssueCategory;

/// Keyword groups in match priority order. The first group with any
/// keyword contained in the label wins.
const KEYWORD_GROUPS: &[(IssueCategory, &[&str])] = &[
    (IssueCategory::Air, &["air"]),
    (IssueCategory::Noise, &["noise"]),
    (IssueCategory::Heat, &["heat"]),
    (IssueCategory::Odour, &["odor", "odour"]),
    (IssueCategory::CyclingWalking, &["cycling", "walking"]),
    (IssueCategory::Water, &["water", "flood", "drain"]),
];

/// Classifies a raw issue label into its canonical category.
///
/// A missing label is [`IssueCategory::Other`]. Otherwise the label is
/// lower-cased and checked against each keyword group in order; the order
/// is significant for labels that hit several groups ("flooded cycling
/// path" is [`IssueCategory::CyclingWalking`]). Returns
/// [`IssueCategory::Other`] when nothing matches.
#[must_use]
pub fn classify(raw: Option<&str>) -> IssueCategory {
    let Some(raw) = raw else {
        return IssueCategory::Other;
    };

    let lower = raw.to_lowercase();

    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map_or(IssueCategory::Other, |(category, _)| *category)
}

/// Checks if `haystack` contains any of the given `needles`.
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
