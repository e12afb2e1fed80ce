//! Command implementations

mod add;
mod catalog;
mod list;
mod manage;

pub use add::add;
pub use catalog::{cover, import, search};
pub use list::list;
pub use manage::{delete, rename_author, rename_series, reset, update, UpdateFields};

use anyhow::{Context, Result};
use hondana_core::{BookStore, LocalStorage, RakutenClient};
use std::path::Path;
use std::sync::Arc;

/// Open the collection persisted under the data directory
pub(crate) async fn open_store(data_dir: &Path) -> Result<BookStore> {
    tracing::debug!(dir = %data_dir.display(), "loading collection");
    let storage = Arc::new(LocalStorage::new(data_dir));
    let mut store = BookStore::new(storage);
    store
        .load()
        .await
        .context("Failed to load the book collection")?;
    Ok(store)
}

/// Build a catalog client from the flag or the HONDANA_APP_ID variable
pub(crate) fn catalog_client(app_id: Option<String>) -> Result<RakutenClient> {
    let app_id = app_id
        .or_else(|| std::env::var("HONDANA_APP_ID").ok())
        .context("No catalog credential; pass --app-id or set HONDANA_APP_ID")?;
    RakutenClient::new(app_id).context("Failed to build the catalog client")
}
