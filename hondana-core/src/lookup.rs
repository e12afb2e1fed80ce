//! Cover-lookup workflow
//!
//! One attempt walks: ISBN length check, duplicate check against the
//! existing collection, then a cover-only catalog call. The first two gates
//! terminate the attempt before any network traffic.

use crate::catalog::CoverSource;
use crate::types::BookRecord;

/// Terminal state of a single lookup attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The ISBN was not 13 characters after trimming
    InvalidIsbn,

    /// An existing record already carries this ISBN
    Duplicate,

    /// The catalog returned a cover image URL
    Found(String),

    /// The catalog answered but had no image for this ISBN
    NotFound,

    /// The catalog call itself failed; detail goes to the log only
    Failed,
}

impl LookupOutcome {
    /// User-facing message for this outcome. `Found` needs none and
    /// `Failed` deliberately has none.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LookupOutcome::InvalidIsbn => Some("Enter a 13-digit ISBN."),
            LookupOutcome::Duplicate => {
                Some("A registered book already has this ISBN.")
            }
            LookupOutcome::NotFound => Some("No cover image found for this ISBN."),
            LookupOutcome::Found(_) | LookupOutcome::Failed => None,
        }
    }
}

/// Cover lookup state: the optional record-under-edit and the last
/// fetched URL
#[derive(Debug, Default)]
pub struct CoverLookup {
    edit_id: Option<u32>,
    cover_url: Option<String>,
}

impl CoverLookup {
    /// Lookup for a new record
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup while editing an existing record; that record's own ISBN
    /// does not count as a duplicate
    pub fn for_edit(id: u32) -> Self {
        Self {
            edit_id: Some(id),
            ..Self::default()
        }
    }

    /// URL retained from the last successful attempt
    pub fn cover_url(&self) -> Option<&str> {
        self.cover_url.as_deref()
    }

    /// Drop the retained URL, whatever state the last attempt ended in
    pub fn clear(&mut self) {
        self.cover_url = None;
    }

    /// Whether the ISBN collides with a record other than the one under
    /// edit
    pub fn is_registered(&self, isbn: &str, books: &[BookRecord]) -> bool {
        books.iter().any(|book| {
            self.edit_id != Some(book.id) && book.isbn.as_deref() == Some(isbn)
        })
    }

    /// Run one lookup attempt
    pub async fn run(
        &mut self,
        isbn: &str,
        books: &[BookRecord],
        client: &dyn CoverSource,
    ) -> LookupOutcome {
        let isbn = isbn.trim();
        if isbn.chars().count() != 13 {
            return LookupOutcome::InvalidIsbn;
        }

        if self.is_registered(isbn, books) {
            return LookupOutcome::Duplicate;
        }

        match client.cover_by_isbn(isbn).await {
            Ok(Some(url)) => {
                self.cover_url = Some(url.clone());
                LookupOutcome::Found(url)
            }
            Ok(None) => LookupOutcome::NotFound,
            Err(err) => {
                tracing::error!(%isbn, error = %err, "cover lookup failed");
                LookupOutcome::Failed
            }
        }
    }
}
