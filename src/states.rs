//! Closed lookup table between postal abbreviations and full state names.

/// Whether an entry is one of the fifty states or the federal district.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jurisdiction {
    State,
    District,
}

/// A single entry of the lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateCode {
    pub abbrev: &'static str,
    pub name: &'static str,
    pub kind: Jurisdiction,
}

const fn state(abbrev: &'static str, name: &'static str) -> StateCode {
    StateCode { abbrev, name, kind: Jurisdiction::State }
}

/// All fifty states plus the District of Columbia.
pub const STATES: [StateCode; 51] = [
    state("AL", "Alabama"),
    state("AK", "Alaska"),
    state("AZ", "Arizona"),
    state("AR", "Arkansas"),
    state("CA", "California"),
    state("CO", "Colorado"),
    state("CT", "Connecticut"),
    state("DE", "Delaware"),
    state("FL", "Florida"),
    state("GA", "Georgia"),
    state("HI", "Hawaii"),
    state("ID", "Idaho"),
    state("IL", "Illinois"),
    state("IN", "Indiana"),
    state("IA", "Iowa"),
    state("KS", "Kansas"),
    state("KY", "Kentucky"),
    state("LA", "Louisiana"),
    state("ME", "Maine"),
    state("MD", "Maryland"),
    state("MA", "Massachusetts"),
    state("MI", "Michigan"),
    state("MN", "Minnesota"),
    state("MS", "Mississippi"),
    state("MO", "Missouri"),
    state("MT", "Montana"),
    state("NE", "Nebraska"),
    state("NV", "Nevada"),
    state("NH", "New Hampshire"),
    state("NJ", "New Jersey"),
    state("NM", "New Mexico"),
    state("NY", "New York"),
    state("NC", "North Carolina"),
    state("ND", "North Dakota"),
    state("OH", "Ohio"),
    state("OK", "Oklahoma"),
    state("OR", "Oregon"),
    state("PA", "Pennsylvania"),
    state("RI", "Rhode Island"),
    state("SC", "South Carolina"),
    state("SD", "South Dakota"),
    state("TN", "Tennessee"),
    state("TX", "Texas"),
    state("UT", "Utah"),
    state("VT", "Vermont"),
    state("VA", "Virginia"),
    state("WA", "Washington"),
    state("WV", "West Virginia"),
    state("WI", "Wisconsin"),
    state("WY", "Wyoming"),
    StateCode { abbrev: "DC", name: "District of Columbia", kind: Jurisdiction::District },
];

/// Resolve a two-letter abbreviation to its full name.
/// Matching is exact after trimming surrounding whitespace; anything outside the table is `None`.
pub fn full_name(abbrev: &str) -> Option<&'static str> {
    let abbrev = abbrev.trim();
    STATES.iter()
        .find(|code| code.abbrev == abbrev)
        .map(|code| code.name)
}

/// Map label for a full state name. Only the fifty states carry a label.
pub fn map_label(name: &str) -> Option<&'static str> {
    STATES.iter()
        .find(|code| code.kind == Jurisdiction::State && code.name == name)
        .map(|code| code.abbrev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_a_bijection() {
        let abbrevs: HashSet<_> = STATES.iter().map(|c| c.abbrev).collect();
        let names: HashSet<_> = STATES.iter().map(|c| c.name).collect();
        assert_eq!(abbrevs.len(), STATES.len());
        assert_eq!(names.len(), STATES.len());
    }

    #[test]
    fn every_entry_resolves_to_itself() {
        for code in &STATES {
            assert_eq!(full_name(code.abbrev), Some(code.name));
        }
    }

    #[test]
    fn unknown_codes_resolve_to_none() {
        for code in ["PR", "GU", "VI", "ON", "", "ca", "Cal", "XX"] {
            assert_eq!(full_name(code), None, "{code:?} should not resolve");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(full_name(" TX "), Some("Texas"));
    }

    #[test]
    fn district_has_no_map_label() {
        assert_eq!(full_name("DC"), Some("District of Columbia"));
        assert_eq!(map_label("District of Columbia"), None);
        assert_eq!(map_label("Alaska"), Some("AK"));
        assert_eq!(map_label("Puerto Rico"), None);
    }
}
