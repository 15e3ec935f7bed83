//! Static location and school catalog for student setup.
//!
//! # Invariants
//! - Every declared location resolves to a non-empty school list.
//! - Each school list ends with the not-listed fallback entry, so the
//!   second step can always complete.

/// Locations offered by step 1, including the catch-all `Other`.
pub const LOCATIONS: [&str; 6] = [
    "Lagos, Nigeria",
    "Abuja, Nigeria",
    "Port Harcourt, Nigeria",
    "Kano, Nigeria",
    "Ibadan, Nigeria",
    "Other",
];

/// Fallback entry present in every school list.
pub const SCHOOL_NOT_LISTED: &str = "My school is not listed";

/// Returns the school list for one declared location.
///
/// `None` means the location is not in the catalog; callers validate
/// location input before reaching the school step.
pub fn schools_for(location: &str) -> Option<&'static [&'static str]> {
    let schools: &'static [&'static str] = match location {
        "Lagos, Nigeria" => &[
            "University of Lagos",
            "Lagos State University",
            "Yaba College of Technology",
            "Lagos Business School",
            "Pan-Atlantic University",
            SCHOOL_NOT_LISTED,
        ],
        "Abuja, Nigeria" => &[
            "University of Abuja",
            "Nile University",
            "Baze University",
            "African University of Science and Technology",
            SCHOOL_NOT_LISTED,
        ],
        "Port Harcourt, Nigeria" => &[
            "University of Port Harcourt",
            "Rivers State University",
            "Ignatius Ajuru University",
            SCHOOL_NOT_LISTED,
        ],
        "Kano, Nigeria" => &[
            "Bayero University Kano",
            "Northwest University",
            SCHOOL_NOT_LISTED,
        ],
        "Ibadan, Nigeria" => &[
            "University of Ibadan",
            "Lead City University",
            "The Polytechnic Ibadan",
            SCHOOL_NOT_LISTED,
        ],
        "Other" => &[SCHOOL_NOT_LISTED],
        _ => return None,
    };
    Some(schools)
}

#[cfg(test)]
mod tests {
    use super::{schools_for, LOCATIONS, SCHOOL_NOT_LISTED};

    #[test]
    fn every_location_has_a_non_empty_school_list() {
        for location in LOCATIONS {
            let schools = schools_for(location)
                .unwrap_or_else(|| panic!("location `{location}` missing from catalog"));
            assert!(!schools.is_empty(), "no schools for `{location}`");
        }
    }

    #[test]
    fn every_school_list_ends_with_the_fallback_entry() {
        for location in LOCATIONS {
            let schools = schools_for(location).expect("declared location");
            assert_eq!(schools.last().copied(), Some(SCHOOL_NOT_LISTED));
        }
    }

    #[test]
    fn unknown_location_yields_no_list() {
        assert!(schools_for("Atlantis").is_none());
        assert!(schools_for("").is_none());
    }
}
