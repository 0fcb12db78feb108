//! Charger counts embedded in free-text station notes.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::NotesMode;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Sum every contiguous ASCII digit run in `notes`.
/// Runs too large for a `u64` saturate, as does the sum.
pub fn sum_digit_runs(notes: &str) -> u64 {
    DIGIT_RUN.find_iter(notes)
        .map(|run| run.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .fold(0u64, u64::saturating_add)
}

/// Extra chargers described by a row's notes under the given extraction mode.
pub fn extract_count(notes: Option<&str>, mode: NotesMode) -> u64 {
    match (mode, notes) {
        (NotesMode::Legacy, _) | (_, None) => 0,
        (NotesMode::Scan, Some(text)) => sum_digit_runs(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_every_digit_run() {
        assert_eq!(sum_digit_runs("5 units"), 5);
        assert_eq!(sum_digit_runs("2 J1772, 4 CHAdeMO and 10 NEMA"), 16);
        assert_eq!(sum_digit_runs("unit12b3"), 15);
        assert_eq!(sum_digit_runs("007"), 7);
    }

    #[test]
    fn text_without_digits_is_zero() {
        assert_eq!(sum_digit_runs(""), 0);
        assert_eq!(sum_digit_runs("Tesla destination chargers"), 0);
    }

    #[test]
    fn non_ascii_digits_are_ignored() {
        // Arabic-Indic three
        assert_eq!(sum_digit_runs("\u{0663} ports"), 0);
    }

    #[test]
    fn huge_runs_saturate() {
        assert_eq!(sum_digit_runs("99999999999999999999999 and 1"), u64::MAX);
    }

    #[test]
    fn missing_notes_are_zero() {
        assert_eq!(extract_count(None, NotesMode::Scan), 0);
    }

    #[test]
    fn legacy_mode_never_counts() {
        assert_eq!(extract_count(Some("5 units"), NotesMode::Legacy), 0);
        assert_eq!(extract_count(Some("5 units"), NotesMode::Scan), 5);
    }
}
