use super::types::{Bookmark, BookmarkId};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// An identifier was requested that the store never ingested. Query
    /// results only ever contain ingested identifiers, so hitting this from
    /// a result set is a defect, not a recoverable condition.
    #[error("bookmark {0} was never ingested")]
    NotFound(BookmarkId),
}

/// Ordered, append-only collection of bookmarks keyed by identifier.
///
/// Mutated only by the ingestion pipeline; everything else reads.
#[derive(Debug, Default)]
pub struct BookmarkStore {
    records: Vec<Bookmark>,
    positions: HashMap<BookmarkId, usize>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record unless its identifier is already present. Returns
    /// whether the record was added; the first ingested copy always wins.
    pub fn insert(&mut self, record: Bookmark) -> bool {
        if self.positions.contains_key(&record.id) {
            return false;
        }
        self.positions.insert(record.id, self.records.len());
        self.records.push(record);
        true
    }

    /// Appends a batch of records, skipping identifiers already present.
    /// Returns the number of records actually added.
    pub fn ingest(&mut self, records: impl IntoIterator<Item = Bookmark>) -> usize {
        let mut added = 0;
        for record in records {
            if self.insert(record) {
                added += 1;
            }
        }
        added
    }

    pub fn get(&self, id: BookmarkId) -> Result<&Bookmark, StoreError> {
        self.positions
            .get(&id)
            .map(|&pos| &self.records[pos])
            .ok_or(StoreError::NotFound(id))
    }

    pub fn contains(&self, id: BookmarkId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Records in ingestion order.
    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
