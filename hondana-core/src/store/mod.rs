//! The authoritative book collection
//!
//! `BookStore` owns the in-memory list of records and mirrors every
//! mutation to its storage provider by re-serializing the whole collection.
//! The newest record sits at the head of the list. Identifiers are assigned
//! here and only here.

use crate::storage::{StorageProvider, StorageResult};
use crate::types::{BookDraft, BookPatch, BookRecord};
use std::sync::Arc;
use tokio::sync::watch;

/// Slot key the collection persists under
pub const DEFAULT_STORAGE_KEY: &str = "book-list";

/// In-memory book collection backed by a [`StorageProvider`]
pub struct BookStore {
    books: Vec<BookRecord>,
    storage: Arc<dyn StorageProvider>,
    key: String,
    revision: watch::Sender<u64>,
}

impl BookStore {
    /// Create an empty store persisting under [`DEFAULT_STORAGE_KEY`]
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Create an empty store persisting under a custom slot key
    pub fn with_key(storage: Arc<dyn StorageProvider>, key: impl Into<String>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            books: Vec::new(),
            storage,
            key: key.into(),
            revision,
        }
    }

    /// The collection, most recently added first
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// Find a record by id
    pub fn get(&self, id: u32) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.id == id)
    }

    /// The id the next committed record will receive: one past the highest
    /// existing id, or 1 for an empty collection. Recomputed on demand.
    pub fn next_id(&self) -> u32 {
        self.books
            .iter()
            .map(|book| book.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Watch for collection changes; the value is a revision counter that
    /// bumps on every persisted mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Commit a draft at the head of the collection, returning its id
    pub async fn add(&mut self, draft: BookDraft) -> StorageResult<u32> {
        let id = self.next_id();
        self.books.insert(0, draft.into_record(id));
        self.persist().await?;
        Ok(id)
    }

    /// Commit several drafts in one pass with a single persist.
    ///
    /// Each draft gets a freshly computed id at its own insertion, so the
    /// batch receives strictly increasing ids in input order while the
    /// head-insertion leaves it in reverse input order at the front.
    pub async fn add_bulk(&mut self, drafts: Vec<BookDraft>) -> StorageResult<Vec<u32>> {
        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let id = self.next_id();
            self.books.insert(0, draft.into_record(id));
            ids.push(id);
        }
        self.persist().await?;
        Ok(ids)
    }

    /// Merge a patch onto the record with the given id.
    ///
    /// An unknown id is a silent no-op: nothing changes and nothing
    /// persists.
    pub async fn update(&mut self, id: u32, patch: BookPatch) -> StorageResult<()> {
        match self.books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                patch.apply(book);
                self.persist().await
            }
            None => Ok(()),
        }
    }

    /// Remove the record with the given id. Persists whether or not a
    /// record matched.
    pub async fn delete(&mut self, id: u32) -> StorageResult<()> {
        self.books.retain(|book| book.id != id);
        self.persist().await
    }

    /// Rename a series across the collection: every record whose series
    /// name equals `old` exactly gets `new`. One persist for the whole pass.
    pub async fn rename_series(&mut self, old: &str, new: &str) -> StorageResult<()> {
        for book in &mut self.books {
            if book.series_name.as_deref() == Some(old) {
                book.series_name = Some(new.to_string());
            }
        }
        self.persist().await
    }

    /// Rename an author across the collection, element-wise: every author
    /// entry equal to `old` becomes `new`.
    pub async fn rename_author(&mut self, old: &str, new: &str) -> StorageResult<()> {
        for book in &mut self.books {
            for author in &mut book.authors {
                if author == old {
                    *author = new.to_string();
                }
            }
        }
        self.persist().await
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// An absent slot leaves the collection as it was; a slot that does not
    /// parse as a record array is reported as a malformed-storage error.
    pub async fn load(&mut self) -> StorageResult<()> {
        if let Some(data) = self.storage.load(&self.key).await? {
            self.books = serde_json::from_slice(&data)?;
            self.revision.send_modify(|rev| *rev += 1);
        }
        Ok(())
    }

    /// Clear the persisted slot and empty the collection
    pub async fn reset(&mut self) -> StorageResult<()> {
        self.storage.clear(&self.key).await?;
        self.books.clear();
        self.revision.send_modify(|rev| *rev += 1);
        Ok(())
    }

    async fn persist(&self) -> StorageResult<()> {
        let data = serde_json::to_vec(&self.books)?;
        self.storage.save(&self.key, data).await?;
        self.revision.send_modify(|rev| *rev += 1);
        Ok(())
    }
}
