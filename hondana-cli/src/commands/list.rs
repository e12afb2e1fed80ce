//! List command implementation

use anyhow::Result;
use hondana_core::{release_sort_key, BookRecord, LendingStatus, UiPrefs, UNKNOWN_LAST};
use std::path::Path;

fn sort_key(book: &BookRecord, unknown_last: bool) -> u32 {
    match &book.release_date {
        None if unknown_last => UNKNOWN_LAST,
        date => release_sort_key(date.as_deref()),
    }
}

fn lending_label(status: LendingStatus) -> &'static str {
    match status {
        LendingStatus::None => "",
        LendingStatus::Lent => "lent",
        LendingStatus::Returned => "returned",
    }
}

/// Print the collection, newest first unless sorted by date
pub async fn list(
    data_dir: &Path,
    series: Option<String>,
    author: Option<String>,
    sort_date: bool,
    unknown_last: bool,
    json: bool,
) -> Result<()> {
    let store = super::open_store(data_dir).await?;

    let mut prefs = UiPrefs::new();
    if let Some(series) = series {
        prefs.set_series_filter(series);
    }
    if let Some(author) = author {
        prefs.set_author_filter(author);
    }

    let mut books: Vec<&BookRecord> = store
        .books()
        .iter()
        .filter(|book| prefs.matches(book))
        .collect();

    if sort_date {
        books.sort_by_key(|book| sort_key(book, unknown_last));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("No books.");
        return Ok(());
    }

    for book in books {
        let mut line = format!("{:>4}  {}", book.id, book.title);
        if !book.authors.is_empty() {
            line.push_str(&format!(" / {}", book.authors.join(", ")));
        }
        if let Some(date) = &book.release_date {
            line.push_str(&format!("  [{date}]"));
        }
        if let Some(series) = &book.series_name {
            line.push_str(&format!("  ({series})"));
        }
        let lending = lending_label(book.lending);
        if !lending.is_empty() {
            line.push_str(&format!("  <{lending}>"));
        }
        println!("{line}");
    }

    Ok(())
}
