//! Catalog-backed commands: import, search, cover

use anyhow::Result;
use hondana_core::{BookDraft, CatalogBook, CoverLookup, LookupOutcome, SearchQuery};
use std::path::Path;

fn print_match(book: &CatalogBook) {
    println!("Title:   {}", book.title);
    if !book.author.is_empty() {
        println!("Author:  {}", book.author);
    }
    if !book.series_name.is_empty() {
        println!("Series:  {}", book.series_name);
    }
    if !book.sales_date.is_empty() {
        println!("Date:    {}", book.sales_date);
    }
    if !book.isbn.is_empty() {
        println!("ISBN:    {}", book.isbn);
    }
    if !book.cover_url.is_empty() {
        println!("Cover:   {}", book.cover_url);
    }
}

/// Fetch one book by ISBN and optionally commit it
pub async fn import(
    data_dir: &Path,
    isbn: &str,
    save: bool,
    app_id: Option<String>,
) -> Result<()> {
    let client = super::catalog_client(app_id)?;

    match client.find_by_isbn(isbn.trim()).await? {
        Some(book) => {
            print_match(&book);
            if save {
                let mut store = super::open_store(data_dir).await?;
                let id = store.add(BookDraft::from(book)).await?;
                println!("Added book {id}");
            }
        }
        None => println!("No catalog entry for this ISBN."),
    }

    Ok(())
}

/// Keyword search against the catalog
pub async fn search(keyword: &str, page: Option<u32>, app_id: Option<String>) -> Result<()> {
    let client = super::catalog_client(app_id)?;

    let mut query = SearchQuery::by_keyword(keyword);
    if let Some(page) = page {
        query = query.page(page);
    }

    let results = client.search(&query).await?;
    println!("{} matches", results.total_count);
    for book in &results.books {
        let mut line = book.title.clone();
        if !book.author.is_empty() {
            line.push_str(&format!(" / {}", book.author));
        }
        if !book.series_name.is_empty() && book.series_name != book.title {
            line.push_str(&format!("  ({})", book.series_name));
        }
        if !book.isbn.is_empty() {
            line.push_str(&format!("  {}", book.isbn));
        }
        println!("{line}");
    }

    Ok(())
}

/// Run the cover-lookup workflow for an ISBN and report its terminal state
pub async fn cover(
    data_dir: &Path,
    isbn: &str,
    edit_id: Option<u32>,
    app_id: Option<String>,
) -> Result<()> {
    let client = super::catalog_client(app_id)?;
    let store = super::open_store(data_dir).await?;

    let mut lookup = match edit_id {
        Some(id) => CoverLookup::for_edit(id),
        None => CoverLookup::new(),
    };

    let outcome = lookup.run(isbn, store.books(), &client).await;
    match &outcome {
        LookupOutcome::Found(url) => println!("{url}"),
        // Failure detail went to the log; the other outcomes carry a message
        _ => {
            if let Some(message) = outcome.message() {
                eprintln!("{message}");
            }
        }
    }

    Ok(())
}
