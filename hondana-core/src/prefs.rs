//! Transient view-state: list display mode and active search filters
//!
//! Independent of the store; it only decides which subset of the
//! collection a list view shows.

use crate::types::BookRecord;

/// How the book list is being displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListMode {
    #[default]
    View,
    Edit,
    Delete,
    Rent,
}

/// Per-session view preferences
#[derive(Debug, Clone, Default)]
pub struct UiPrefs {
    list_mode: ListMode,
    series_filter: Option<String>,
    author_filter: Option<String>,
}

impl UiPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_mode(&self) -> ListMode {
        self.list_mode
    }

    pub fn set_list_mode(&mut self, mode: ListMode) {
        self.list_mode = mode;
    }

    pub fn series_filter(&self) -> Option<&str> {
        self.series_filter.as_deref()
    }

    pub fn set_series_filter(&mut self, series: impl Into<String>) {
        self.series_filter = Some(series.into());
    }

    pub fn clear_series_filter(&mut self) {
        self.series_filter = None;
    }

    pub fn author_filter(&self) -> Option<&str> {
        self.author_filter.as_deref()
    }

    pub fn set_author_filter(&mut self, author: impl Into<String>) {
        self.author_filter = Some(author.into());
    }

    pub fn clear_author_filter(&mut self) {
        self.author_filter = None;
    }

    /// Whether a record passes the active filters: exact series match and
    /// author-list membership. No filters set means everything passes.
    pub fn matches(&self, book: &BookRecord) -> bool {
        if let Some(series) = self.series_filter() {
            if book.series_name.as_deref() != Some(series) {
                return false;
            }
        }
        if let Some(author) = self.author_filter() {
            if !book.authors.iter().any(|a| a == author) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BookDraft;

    fn record(series: Option<&str>, authors: &[&str]) -> BookRecord {
        let mut draft = BookDraft::new("Book");
        draft.authors = authors.iter().map(|a| a.to_string()).collect();
        draft.series_name = series.map(String::from);
        draft.into_record(1)
    }

    #[test]
    fn test_no_filters_pass_everything() {
        let prefs = UiPrefs::new();
        assert!(prefs.matches(&record(None, &[])));
    }

    #[test]
    fn test_series_filter_is_exact() {
        let mut prefs = UiPrefs::new();
        prefs.set_series_filter("Series X");

        assert!(prefs.matches(&record(Some("Series X"), &[])));
        assert!(!prefs.matches(&record(Some("Series X 2"), &[])));
        assert!(!prefs.matches(&record(None, &[])));

        prefs.clear_series_filter();
        assert!(prefs.matches(&record(None, &[])));
    }

    #[test]
    fn test_author_filter_is_membership() {
        let mut prefs = UiPrefs::new();
        prefs.set_author_filter("B");

        assert!(prefs.matches(&record(None, &["A", "B"])));
        assert!(!prefs.matches(&record(None, &["A"])));
    }

    #[test]
    fn test_list_mode_round_trip() {
        let mut prefs = UiPrefs::new();
        assert_eq!(prefs.list_mode(), ListMode::View);
        prefs.set_list_mode(ListMode::Rent);
        assert_eq!(prefs.list_mode(), ListMode::Rent);
    }
}
