//! Responsible authorities in Hyderabad, by complaint category.

use complaint_map_complaint_models::IssueCategory;
use serde::Serialize;

/// Contact details for the government body that handles a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Authority {
    /// Department or body name.
    pub name: &'static str,
    /// Phone number.
    pub phone: &'static str,
    /// Contact email address.
    pub email: &'static str,
}

/// GHMC general switchboard, shared by most departments.
const GHMC_PHONE: &str = "040-21111111";

/// Returns the responsible authority for a category.
#[must_use]
pub const fn authority_for(category: IssueCategory) -> Authority {
    match category {
        IssueCategory::Odour => Authority {
            name: "GHMC – Sanitation Department",
            phone: GHMC_PHONE,
            email: "sanitation-ghmc@telangana.gov.in",
        },
        IssueCategory::Air => Authority {
            name: "Telangana Pollution Control Board",
            phone: "040-23887500",
            email: "pcb@telangana.gov.in",
        },
        IssueCategory::Noise => Authority {
            name: "Hyderabad Traffic Police",
            phone: "100",
            email: "trafficpolice@hyderabad.gov.in",
        },
        IssueCategory::Heat => Authority {
            name: "GHMC – Environment Wing",
            phone: GHMC_PHONE,
            email: "environment-ghmc@telangana.gov.in",
        },
        IssueCategory::CyclingWalking => Authority {
            name: "GHMC – Urban Planning",
            phone: GHMC_PHONE,
            email: "planning-ghmc@telangana.gov.in",
        },
        IssueCategory::Water => Authority {
            name: "GHMC – Engineering Department",
            phone: GHMC_PHONE,
            email: "engineering-ghmc@telangana.gov.in",
        },
        IssueCategory::Other => Authority {
            name: "Greater Hyderabad Municipal Corporation",
            phone: GHMC_PHONE,
            email: "info.ghmc@telangana.gov.in",
        },
    }
}

/// Returns the responsible authority for a category label. Unrecognized
/// labels get the general GHMC contact.
#[must_use]
pub fn authority_for_label(label: &str) -> Authority {
    authority_for(IssueCategory::from_label(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_goes_to_pollution_control_board() {
        let authority = authority_for(IssueCategory::Air);
        assert_eq!(
            (authority.name, authority.phone, authority.email),
            (
                "Telangana Pollution Control Board",
                "040-23887500",
                "pcb@telangana.gov.in"
            )
        );
    }

    #[test]
    fn unknown_label_gets_ghmc() {
        assert_eq!(
            authority_for_label("Potholes"),
            authority_for(IssueCategory::Other)
        );
        assert_eq!(
            authority_for_label("Potholes").name,
            "Greater Hyderabad Municipal Corporation"
        );
    }

    #[test]
    fn alias_labels_get_ghmc() {
        assert_eq!(
            authority_for_label("Odor"),
            authority_for(IssueCategory::Other)
        );
        assert_eq!(
            authority_for_label("noise"),
            authority_for(IssueCategory::Other)
        );
        assert_eq!(
            authority_for_label("Odour").name,
            "GHMC – Sanitation Department"
        );
    }

    #[test]
    fn every_category_has_contact() {
        for cat in IssueCategory::all() {
            let authority = authority_for(*cat);
            assert!(!authority.name.is_empty());
            assert!(!authority.phone.is_empty());
            assert!(authority.email.contains('@'), "{cat:?} email malformed");
        }
    }
}
