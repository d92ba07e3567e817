//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait, the contract one resource collection
//! offers to the resource manager. The trait is minimal and maps directly to the
//! table's use cases: list, look up, insert (single and batch), patch, delete.
//!
//! All operations are synchronous and total over the in-memory collection.

use crate::domain::error::Result;
use crate::domain::record::{Fields, Record, RecordId};

/// Owner of the canonical collection for one resource kind.
///
/// Implementations must keep identifiers unique and preserve insertion order.
///
/// # Implementations
///
/// - [`MemoryStore`](crate::storage::MemoryStore): process-local `Vec` (default)
///
/// # Examples
///
/// ```
/// use hrdesk::storage::{MemoryStore, Storage};
/// use hrdesk::domain::record::text_fields;
///
/// let mut store = MemoryStore::default();
/// let stored = store.insert(text_fields(&[("name", "Nursing")]));
/// assert_eq!(stored.id, 1);
/// assert_eq!(store.all().len(), 1);
/// ```
pub trait Storage {
    /// All records in insertion order.
    fn all(&self) -> &[Record];

    /// Looks a record up by identifier.
    fn get(&self, id: RecordId) -> Option<&Record>;

    /// Largest identifier in the collection, `0` when empty.
    fn max_id(&self) -> RecordId {
        self.all().iter().map(|r| r.id).max().unwrap_or(0)
    }

    /// Appends a candidate under identifier `max_id() + 1` and returns the stored record.
    fn insert(&mut self, candidate: Fields) -> Record;

    /// Appends candidates in order under strictly increasing identifiers
    /// starting at `max_id() + 1`. The base is computed once for the batch.
    fn insert_many(&mut self, candidates: Vec<Fields>) -> Vec<Record>;

    /// Merges `patch` over the record with `id`; the identifier never changes.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::NotFound`](crate::domain::HrdeskError::NotFound)
    /// if no record has `id`.
    fn update(&mut self, id: RecordId, patch: &Fields) -> Result<Record>;

    /// Deletes the record with `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::NotFound`](crate::domain::HrdeskError::NotFound)
    /// if no record has `id`.
    fn remove(&mut self, id: RecordId) -> Result<Record>;

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
