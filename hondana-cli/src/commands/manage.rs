//! Record maintenance commands: update, delete, renames, reset

use anyhow::{bail, Result};
use hondana_core::{BookPatch, LendingStatus};
use std::path::Path;

/// Field flags collected from the update command line
#[derive(Debug, Default)]
pub struct UpdateFields {
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub date: Option<String>,
    pub isbn: Option<String>,
    pub series: Option<String>,
    pub cover: Option<String>,
    pub lending: Option<String>,
    pub clear_series: bool,
    pub clear_cover: bool,
}

fn parse_lending(value: &str) -> Result<LendingStatus> {
    match value {
        "none" => Ok(LendingStatus::None),
        "lent" => Ok(LendingStatus::Lent),
        "returned" => Ok(LendingStatus::Returned),
        other => bail!("Unknown lending state '{other}' (expected none, lent, or returned)"),
    }
}

impl UpdateFields {
    fn into_patch(self) -> Result<BookPatch> {
        let lending = self.lending.as_deref().map(parse_lending).transpose()?;

        Ok(BookPatch {
            title: self.title,
            authors: (!self.authors.is_empty()).then_some(self.authors),
            release_date: self.date.map(Some),
            cover_url: if self.clear_cover {
                Some(None)
            } else {
                self.cover.map(Some)
            },
            lending,
            isbn: self.isbn.map(Some),
            series_name: if self.clear_series {
                Some(None)
            } else {
                self.series.map(Some)
            },
        })
    }
}

/// Merge the given fields onto an existing record
pub async fn update(data_dir: &Path, id: u32, fields: UpdateFields) -> Result<()> {
    let patch = fields.into_patch()?;
    if patch == BookPatch::default() {
        bail!("Nothing to update; pass at least one field flag");
    }

    let mut store = super::open_store(data_dir).await?;
    if store.get(id).is_none() {
        bail!("No book with id {id}");
    }
    store.update(id, patch).await?;
    println!("Updated book {id}");

    Ok(())
}

/// Remove a record by id
pub async fn delete(data_dir: &Path, id: u32) -> Result<()> {
    let mut store = super::open_store(data_dir).await?;
    store.delete(id).await?;
    println!("Deleted book {id}");

    Ok(())
}

/// Rename a series across the collection
pub async fn rename_series(data_dir: &Path, old: &str, new: &str) -> Result<()> {
    let mut store = super::open_store(data_dir).await?;
    store.rename_series(old, new).await?;
    println!("Renamed series '{old}' to '{new}'");

    Ok(())
}

/// Rename an author across the collection
pub async fn rename_author(data_dir: &Path, old: &str, new: &str) -> Result<()> {
    let mut store = super::open_store(data_dir).await?;
    store.rename_author(old, new).await?;
    println!("Renamed author '{old}' to '{new}'");

    Ok(())
}

/// Wipe the collection and its persisted slot
pub async fn reset(data_dir: &Path, yes: bool) -> Result<()> {
    if !yes {
        bail!("Refusing to wipe the collection without --yes");
    }

    let mut store = super::open_store(data_dir).await?;
    store.reset().await?;
    println!("Collection cleared");

    Ok(())
}
