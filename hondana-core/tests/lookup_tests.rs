//! Integration tests for the cover-lookup workflow
//!
//! The remote catalog is replaced by a counting fake so the reject-early
//! gates can assert that no network call was ever attempted.

use async_trait::async_trait;
use hondana_core::{
    BookDraft, BookRecord, CoverLookup, CoverSource, LookupOutcome, MetadataError,
};
use std::sync::atomic::{AtomicUsize, Ordering};

enum FakeAnswer {
    Cover(&'static str),
    NoCover,
    Broken,
}

struct FakeCatalog {
    answer: FakeAnswer,
    calls: AtomicUsize,
}

impl FakeCatalog {
    fn new(answer: FakeAnswer) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoverSource for FakeCatalog {
    async fn cover_by_isbn(&self, _isbn: &str) -> Result<Option<String>, MetadataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            FakeAnswer::Cover(url) => Ok(Some(url.to_string())),
            FakeAnswer::NoCover => Ok(None),
            FakeAnswer::Broken => Err(MetadataError::Status(500)),
        }
    }
}

fn registered(id: u32, isbn: &str) -> BookRecord {
    BookDraft::new(format!("Book {id}"))
        .with_isbn(isbn)
        .into_record(id)
}

#[tokio::test]
async fn short_isbn_is_rejected_before_any_network_call() {
    let catalog = FakeCatalog::new(FakeAnswer::Cover("https://example.com/c.jpg"));
    let mut lookup = CoverLookup::new();

    for isbn in ["", "12345", "97840000000011", "  978400000000  "] {
        let outcome = lookup.run(isbn, &[], &catalog).await;
        assert_eq!(outcome, LookupOutcome::InvalidIsbn);
    }

    assert_eq!(catalog.calls(), 0);
}

#[tokio::test]
async fn surrounding_whitespace_is_trimmed_before_the_length_check() {
    let catalog = FakeCatalog::new(FakeAnswer::Cover("https://example.com/c.jpg"));
    let mut lookup = CoverLookup::new();

    let outcome = lookup.run(" 9784000000001 ", &[], &catalog).await;

    assert_eq!(
        outcome,
        LookupOutcome::Found("https://example.com/c.jpg".to_string())
    );
    assert_eq!(catalog.calls(), 1);
}

#[tokio::test]
async fn duplicate_isbn_is_rejected_before_any_network_call() {
    let catalog = FakeCatalog::new(FakeAnswer::Cover("https://example.com/c.jpg"));
    let books = vec![registered(1, "9784000000001")];
    let mut lookup = CoverLookup::new();

    let outcome = lookup.run("9784000000001", &books, &catalog).await;

    assert_eq!(outcome, LookupOutcome::Duplicate);
    assert_eq!(catalog.calls(), 0);
}

#[tokio::test]
async fn record_under_edit_does_not_count_as_duplicate() {
    let catalog = FakeCatalog::new(FakeAnswer::Cover("https://example.com/c.jpg"));
    let books = vec![registered(1, "9784000000001"), registered(2, "9784000000002")];

    // Re-submitting the edited record's own ISBN is allowed
    let mut editing = CoverLookup::for_edit(1);
    let outcome = editing.run("9784000000001", &books, &catalog).await;
    assert!(matches!(outcome, LookupOutcome::Found(_)));

    // Another record's ISBN still collides
    let outcome = editing.run("9784000000002", &books, &catalog).await;
    assert_eq!(outcome, LookupOutcome::Duplicate);
}

#[tokio::test]
async fn found_cover_is_retained_until_cleared() {
    let catalog = FakeCatalog::new(FakeAnswer::Cover("https://example.com/c.jpg"));
    let mut lookup = CoverLookup::new();

    lookup.run("9784000000001", &[], &catalog).await;
    assert_eq!(lookup.cover_url(), Some("https://example.com/c.jpg"));

    lookup.clear();
    assert_eq!(lookup.cover_url(), None);
}

#[tokio::test]
async fn missing_image_is_not_found_not_failed() {
    let catalog = FakeCatalog::new(FakeAnswer::NoCover);
    let mut lookup = CoverLookup::new();

    let outcome = lookup.run("9784000000001", &[], &catalog).await;

    assert_eq!(outcome, LookupOutcome::NotFound);
    assert!(outcome.message().is_some());
    assert_eq!(lookup.cover_url(), None);
}

#[tokio::test]
async fn catalog_failure_ends_the_attempt_without_a_message() {
    let catalog = FakeCatalog::new(FakeAnswer::Broken);
    let mut lookup = CoverLookup::new();

    let outcome = lookup.run("9784000000001", &[], &catalog).await;

    assert_eq!(outcome, LookupOutcome::Failed);
    assert_eq!(outcome.message(), None);
    assert_eq!(lookup.cover_url(), None);
}
