//! Add command implementation

use anyhow::{bail, Result};
use hondana_core::{validate, BookDraft, LendingStatus, ValidationReport};
use std::path::Path;

/// Register a book by hand, running the validator first
#[allow(clippy::too_many_arguments)]
pub async fn add(
    data_dir: &Path,
    title: String,
    authors: Vec<String>,
    date: Option<String>,
    isbn: Option<String>,
    series: Option<String>,
    cover: Option<String>,
) -> Result<()> {
    let draft = BookDraft {
        title,
        authors,
        release_date: date,
        cover_url: cover,
        lending: LendingStatus::None,
        isbn,
        series_name: series,
    };

    let mut report = ValidationReport::default();
    if !validate(&draft, &mut report) {
        for message in [&report.title, &report.release_date].into_iter().flatten() {
            eprintln!("{message}");
        }
        bail!("Validation failed");
    }

    let mut store = super::open_store(data_dir).await?;
    let id = store.add(draft).await?;
    println!("Added book {id}");

    Ok(())
}
