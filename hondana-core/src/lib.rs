//! Hondana Core Library
//!
//! This crate provides the data layer for the Hondana book-collection
//! manager: the record store with pluggable persistence, the remote catalog
//! client, and the cover-lookup workflow built on both.

pub mod catalog;
pub mod error;
pub mod lookup;
pub mod prefs;
pub mod storage;
pub mod store;
pub mod types;
pub mod validate;

pub use catalog::{
    derive_series_name, CatalogBook, CoverSource, ExternalBookResult, RakutenClient, SearchPage,
    SearchQuery,
};
pub use error::{HondanaError, MetadataError, Result, StorageError};
pub use lookup::{CoverLookup, LookupOutcome};
pub use prefs::{ListMode, UiPrefs};
pub use storage::{LocalStorage, MemoryStorage, StorageProvider};
pub use store::{BookStore, DEFAULT_STORAGE_KEY};
pub use types::{
    compact_sales_date, release_sort_key, BookDraft, BookPatch, BookRecord, LendingStatus,
    UNKNOWN_LAST,
};
pub use validate::{validate, ValidationReport};
