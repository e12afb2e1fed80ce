//! Draft validation
//!
//! Checks run before a record is committed to the store. Messages land in a
//! caller-owned [`ValidationReport`] so a form can keep showing stale errors
//! until the matching field passes again; nothing here panics or returns
//! `Err`.

use crate::types::BookDraft;
use regex::Regex;
use std::sync::OnceLock;

fn date_format() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}([0-9]{2})?([0-9]{2})?$").unwrap())
}

/// Per-field validation messages, mutated in place by [`validate`].
///
/// `None` means the field currently passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub title: Option<String>,
    pub release_date: Option<String>,
}

impl ValidationReport {
    /// True when no field carries a message
    pub fn is_clean(&self) -> bool {
        self.title.is_none() && self.release_date.is_none()
    }
}

/// Validate a draft, updating the report field by field.
///
/// The title must be non-empty after trimming. The release date, when
/// present and non-empty, must be 4, 6, or 8 digits. A passing field clears
/// any message left from an earlier attempt.
pub fn validate(draft: &BookDraft, report: &mut ValidationReport) -> bool {
    let mut valid = true;

    if draft.title.trim().is_empty() {
        report.title = Some("Title is required.".to_string());
        valid = false;
    } else {
        report.title = None;
    }

    match draft.release_date.as_deref() {
        Some(date) if !date.is_empty() && !date_format().is_match(date) => {
            report.release_date =
                Some("Release date must look like 20250101 (year, month, day).".to_string());
            valid = false;
        }
        _ => report.release_date = None,
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_fails() {
        let draft = BookDraft::new("  ").with_release_date("2024");
        let mut report = ValidationReport::default();

        assert!(!validate(&draft, &mut report));
        assert!(report.title.is_some());
        assert!(report.release_date.is_none());
    }

    #[test]
    fn test_malformed_date_fails() {
        let draft = BookDraft::new("A").with_release_date("abc");
        let mut report = ValidationReport::default();

        assert!(!validate(&draft, &mut report));
        assert!(report.title.is_none());
        assert!(report.release_date.is_some());
    }

    #[test]
    fn test_passing_fields_clear_stale_messages() {
        let mut report = ValidationReport {
            title: Some("old".to_string()),
            release_date: Some("old".to_string()),
        };
        let draft = BookDraft::new("A").with_release_date("20240305");

        assert!(validate(&draft, &mut report));
        assert!(report.is_clean());
    }

    #[test]
    fn test_date_lengths() {
        let mut report = ValidationReport::default();
        for date in ["2024", "202403", "20240305"] {
            assert!(validate(&BookDraft::new("A").with_release_date(date), &mut report));
        }
        for date in ["24", "20240", "202403051"] {
            assert!(!validate(&BookDraft::new("A").with_release_date(date), &mut report));
        }
    }

    #[test]
    fn test_absent_date_is_valid() {
        let mut report = ValidationReport::default();
        assert!(validate(&BookDraft::new("A"), &mut report));
        // The original treated an empty date field the same as no date.
        assert!(validate(&BookDraft::new("A").with_release_date(""), &mut report));
    }
}
