use crate::config::NotesMode;

use super::notes::extract_count;

/// One row of the facility dataset, reduced to the fields the aggregate needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StationRecord {
    pub state: Option<String>,
    pub level1: Option<u64>,
    pub level2: Option<u64>,
    pub dc_fast: Option<u64>,
    pub notes: Option<String>,
}

impl StationRecord {
    /// Chargers this row contributes to its state. Missing counts are zero.
    pub fn total(&self, mode: NotesMode) -> u64 {
        [self.level1, self.level2, self.dc_fast, Some(extract_count(self.notes.as_deref(), mode))]
            .into_iter()
            .map(|count| count.unwrap_or(0))
            .fold(0u64, u64::saturating_add)
    }
}

/// Parse a hardware count leniently.
///
/// Integer text parses directly and decimal text (`"2.0"`) truncates. Empty, negative,
/// non-finite or otherwise malformed text yields `None`.
pub fn parse_count(text: Option<&str>) -> Option<u64> {
    let text = text?.trim();
    if text.is_empty() { return None }

    if let Ok(count) = text.parse::<u64>() { return Some(count) }

    text.parse::<f64>().ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map(|value| value.trunc() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(level1: Option<u64>, level2: Option<u64>, dc_fast: Option<u64>, notes: Option<&str>) -> StationRecord {
        StationRecord {
            state: Some("CA".into()),
            level1,
            level2,
            dc_fast,
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn all_missing_contributes_zero() {
        assert_eq!(record(None, None, None, None).total(NotesMode::Scan), 0);
    }

    #[test]
    fn missing_fields_count_as_zero() {
        assert_eq!(record(Some(4), None, Some(1), None).total(NotesMode::Scan), 5);
        assert_eq!(record(None, Some(7), None, Some("2 more")).total(NotesMode::Scan), 9);
    }

    #[test]
    fn notes_follow_the_mode() {
        let row = record(Some(0), Some(0), Some(0), Some("5 units"));
        assert_eq!(row.total(NotesMode::Scan), 5);
        assert_eq!(row.total(NotesMode::Legacy), 0);
    }

    #[test]
    fn parse_count_is_lenient() {
        assert_eq!(parse_count(Some("3")), Some(3));
        assert_eq!(parse_count(Some(" 12 ")), Some(12));
        assert_eq!(parse_count(Some("2.0")), Some(2));
        assert_eq!(parse_count(Some("2.9")), Some(2));
        assert_eq!(parse_count(Some("")), None);
        assert_eq!(parse_count(Some("-1")), None);
        assert_eq!(parse_count(Some("NaN")), None);
        assert_eq!(parse_count(Some("inf")), None);
        assert_eq!(parse_count(Some("two")), None);
        assert_eq!(parse_count(None), None);
    }
}
