//! Core record types for the Hondana collection

mod book;
mod date;

pub use book::{BookDraft, BookPatch, BookRecord, LendingStatus};
pub use date::{compact_sales_date, release_sort_key, UNKNOWN_LAST};
