//! Book record types - the shapes held by the store

use serde::{Deserialize, Serialize};

/// Lending state of a single copy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LendingStatus {
    /// On the shelf
    #[default]
    None,

    /// Currently lent out
    Lent,

    /// Lent out at some point and since returned
    Returned,
}

/// A committed book record
///
/// The `id` is assigned by the store at commit time; callers never pick it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    /// Store-assigned identifier, unique and never reused
    pub id: u32,

    /// Book title
    pub title: String,

    /// Authors in display order
    pub authors: Vec<String>,

    /// Release date in compact form (`YYYY`, `YYYYMM`, or `YYYYMMDD`);
    /// absent means unknown
    pub release_date: Option<String>,

    /// Cover image URL
    pub cover_url: Option<String>,

    /// Lending state
    pub lending: LendingStatus,

    /// 13-digit ISBN, when known
    pub isbn: Option<String>,

    /// Series this book belongs to, editable independently of the title
    pub series_name: Option<String>,
}

/// A book without an identifier: a staged edit or an external search result
/// waiting to be committed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub authors: Vec<String>,
    pub release_date: Option<String>,
    pub cover_url: Option<String>,
    pub lending: LendingStatus,
    pub isbn: Option<String>,
    pub series_name: Option<String>,
}

impl BookDraft {
    /// Create a draft with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Add an author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    /// Set the release date
    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    /// Set the ISBN
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    /// Set the series name
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series_name = Some(series.into());
        self
    }

    /// Set the cover image URL
    pub fn with_cover_url(mut self, url: impl Into<String>) -> Self {
        self.cover_url = Some(url.into());
        self
    }

    /// Attach an identifier, producing a committed record
    pub fn into_record(self, id: u32) -> BookRecord {
        BookRecord {
            id,
            title: self.title,
            authors: self.authors,
            release_date: self.release_date,
            cover_url: self.cover_url,
            lending: self.lending,
            isbn: self.isbn,
            series_name: self.series_name,
        }
    }
}

/// A field-scoped edit applied on top of an existing record.
///
/// Outer `None` leaves the field untouched; for optional record fields,
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub release_date: Option<Option<String>>,
    pub cover_url: Option<Option<String>>,
    pub lending: Option<LendingStatus>,
    pub isbn: Option<Option<String>>,
    pub series_name: Option<Option<String>>,
}

impl BookPatch {
    /// Merge this patch onto a record, patch fields taking precedence
    pub fn apply(self, record: &mut BookRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(authors) = self.authors {
            record.authors = authors;
        }
        if let Some(release_date) = self.release_date {
            record.release_date = release_date;
        }
        if let Some(cover_url) = self.cover_url {
            record.cover_url = cover_url;
        }
        if let Some(lending) = self.lending {
            record.lending = lending;
        }
        if let Some(isbn) = self.isbn {
            record.isbn = isbn;
        }
        if let Some(series_name) = self.series_name {
            record.series_name = series_name;
        }
    }
}
