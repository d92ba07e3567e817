//! In-process storage backend.
//!
//! [`MemoryStore`] keeps one resource collection in a `Vec`, so insertion order
//! is the display order. Nothing outlives the process.
//!
//! # Performance Characteristics
//!
//! - **Lookup / update / remove**: O(n) linear scan by identifier
//! - **Insert**: O(n) to find the current maximum identifier
//! - **Best for**: table-sized collections (hundreds of rows)

use crate::domain::error::{HrdeskError, Result};
use crate::domain::record::{Fields, Record, RecordId};
use crate::storage::backend::Storage;

/// `Vec`-backed resource collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    records: Vec<Record>,
}

impl MemoryStore {
    /// Creates a store holding `records`, typically a seed.
    ///
    /// Later records whose identifier repeats an earlier one are dropped with a
    /// warning, so the uniqueness invariant holds from the start.
    #[must_use]
    pub fn with_records(records: Vec<Record>) -> Self {
        let mut unique: Vec<Record> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|r| r.id == record.id) {
                tracing::warn!(record_id = record.id, "dropping seed record with duplicate id");
                continue;
            }
            unique.push(record);
        }

        tracing::debug!(record_count = unique.len(), "memory store initialized");
        Self { records: unique }
    }

    fn position(&self, id: RecordId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(HrdeskError::NotFound(id))
    }
}

impl Storage for MemoryStore {
    fn all(&self) -> &[Record] {
        &self.records
    }

    fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    fn insert(&mut self, candidate: Fields) -> Record {
        let id = self.max_id() + 1;
        let record = Record::from_fields(id, candidate);
        self.records.push(record.clone());

        tracing::debug!(record_id = id, "record inserted");
        record
    }

    fn insert_many(&mut self, candidates: Vec<Fields>) -> Vec<Record> {
        let _span = tracing::debug_span!("insert_many", count = candidates.len()).entered();

        let base = self.max_id();
        let inserted: Vec<Record> = candidates
            .into_iter()
            .zip(base + 1..)
            .map(|(fields, id)| Record::from_fields(id, fields))
            .collect();

        self.records.extend(inserted.iter().cloned());

        tracing::debug!(
            first_id = ?inserted.first().map(|r| r.id),
            last_id = ?inserted.last().map(|r| r.id),
            "batch inserted"
        );
        inserted
    }

    fn update(&mut self, id: RecordId, patch: &Fields) -> Result<Record> {
        let pos = self.position(id)?;
        let record = &mut self.records[pos];
        record.merge(patch);

        tracing::debug!(record_id = id, patched_fields = patch.len(), "record updated");
        Ok(record.clone())
    }

    fn remove(&mut self, id: RecordId) -> Result<Record> {
        let pos = self.position(id)?;
        let removed = self.records.remove(pos);

        tracing::debug!(record_id = id, remaining = self.records.len(), "record removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{text_fields, FieldValue, ID_FIELD};
    use crate::domain::schema::ResourceKind;
    use crate::domain::seed;

    fn employees() -> MemoryStore {
        MemoryStore::with_records(seed::records(ResourceKind::Employee))
    }

    #[test]
    fn insert_into_empty_store_starts_at_one() {
        let mut store = MemoryStore::default();
        assert_eq!(store.max_id(), 0);
        assert_eq!(store.insert(Fields::new()).id, 1);
        assert_eq!(store.insert(Fields::new()).id, 2);
    }

    #[test]
    fn insert_uses_max_not_len() {
        let mut store = employees();
        store.remove(3).unwrap();
        assert_eq!(store.len(), 9);

        let stored = store.insert(text_fields(&[("name", "Test User")]));
        assert_eq!(stored.id, 11);
    }

    #[test]
    fn insert_then_remove_restores_collection() {
        let mut store = employees();
        let before = store.clone();

        let stored = store.insert(text_fields(&[("name", "Temp")]));
        store.remove(stored.id).unwrap();

        assert_eq!(store, before);
    }

    #[test]
    fn insert_many_assigns_increasing_fresh_ids() {
        let mut store = employees();
        let existing: Vec<RecordId> = store.all().iter().map(|r| r.id).collect();

        let inserted = store.insert_many(vec![Fields::new(), Fields::new(), Fields::new()]);
        let ids: Vec<RecordId> = inserted.iter().map(|r| r.id).collect();

        assert_eq!(ids, [11, 12, 13]);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert!(ids.iter().all(|id| !existing.contains(id)));
        assert_eq!(store.len(), 13);
    }

    #[test]
    fn insert_many_empty_batch_is_noop() {
        let mut store = employees();
        assert!(store.insert_many(vec![]).is_empty());
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn update_preserves_identifier_and_position() {
        let mut store = employees();
        let mut patch = text_fields(&[("status", "resigned")]);
        patch.insert(ID_FIELD.into(), FieldValue::Number(42.into()));

        let updated = store.update(3, &patch).unwrap();

        assert_eq!(updated.id, 3);
        assert_eq!(updated.text("status").as_deref(), Some("resigned"));
        assert_eq!(updated.text("name").as_deref(), Some("Linda Brown"));
        assert_eq!(store.all()[2], updated);
        assert!(store.get(42).is_none());
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = employees();
        let before = store.clone();
        let result = store.update(99, &text_fields(&[("name", "Ghost")]));

        assert!(matches!(result, Err(HrdeskError::NotFound(99))));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut store = employees();
        assert!(matches!(store.remove(0), Err(HrdeskError::NotFound(0))));
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn with_records_drops_duplicate_ids() {
        let store = MemoryStore::with_records(vec![Record::new(1), Record::new(1), Record::new(2)]);
        assert_eq!(store.len(), 2);
    }
}
