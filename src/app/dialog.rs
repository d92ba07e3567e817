//! Add/edit dialog controller.
//!
//! [`DialogController`] owns the draft record of one resource manager. The
//! draft lives inside the open state, so a closed dialog cannot hold a stale
//! draft and a draft can never leak to another resource kind.
//!
//! The controller does not validate drafts: required-field checks happen in
//! the caller before `save` is offered.

use crate::app::modes::DialogMode;
use crate::domain::error::{HrdeskError, Result};
use crate::domain::record::{FieldValue, Fields, Record, RecordId, ID_FIELD};
use crate::storage::backend::Storage;

#[derive(Debug, Clone, Default, PartialEq)]
enum DialogState {
    #[default]
    Closed,
    Adding {
        draft: Fields,
    },
    Editing {
        id: RecordId,
        draft: Fields,
    },
}

/// Dialog state machine bound to one resource store.
///
/// # Examples
///
/// ```
/// use hrdesk::app::dialog::DialogController;
/// use hrdesk::storage::{MemoryStore, Storage};
///
/// let mut store = MemoryStore::default();
/// let mut dialog = DialogController::default();
///
/// dialog.open_for_add();
/// dialog.set_field("name", "Radiology")?;
/// let stored = dialog.save(&mut store)?;
///
/// assert_eq!(stored.id, 1);
/// assert!(!dialog.is_open());
/// # Ok::<(), hrdesk::HrdeskError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogController {
    state: DialogState,
}

impl DialogController {
    /// Opens the dialog with an empty draft, replacing any open draft.
    pub fn open_for_add(&mut self) {
        tracing::debug!(replaced = self.is_open(), "dialog opened for add");
        self.state = DialogState::Adding { draft: Fields::new() };
    }

    /// Opens the dialog with a copy of `record` as the draft, replacing any open draft.
    pub fn open_for_edit(&mut self, record: &Record) {
        tracing::debug!(record_id = record.id, replaced = self.is_open(), "dialog opened for edit");
        self.state = DialogState::Editing {
            id: record.id,
            draft: record.to_fields(),
        };
    }

    /// Updates one draft field. Writes to `id` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::DialogClosed`] if no dialog is open.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let draft = self.draft_mut().ok_or(HrdeskError::DialogClosed)?;
        if name == ID_FIELD {
            tracing::debug!("ignoring write to identifier field");
            return Ok(());
        }

        let value = value.into();
        tracing::trace!(field = name, value = %value, "draft field set");
        draft.insert(name.to_string(), value);
        Ok(())
    }

    /// Commits the draft to `store` and closes the dialog.
    ///
    /// Adding inserts the draft under a fresh identifier; editing patches the
    /// record the dialog was opened on. The dialog closes and the draft is
    /// discarded whether or not the store accepts it.
    ///
    /// # Errors
    ///
    /// - [`HrdeskError::DialogClosed`] if no dialog is open
    /// - [`HrdeskError::NotFound`] if the edited record was deleted meanwhile
    pub fn save<S: Storage + ?Sized>(&mut self, store: &mut S) -> Result<Record> {
        match std::mem::take(&mut self.state) {
            DialogState::Closed => Err(HrdeskError::DialogClosed),
            DialogState::Adding { draft } => {
                let stored = store.insert(draft);
                tracing::debug!(record_id = stored.id, "dialog saved new record");
                Ok(stored)
            }
            DialogState::Editing { id, draft } => {
                let stored = store.update(id, &draft).map_err(|e| {
                    tracing::debug!(record_id = id, "edited record no longer exists");
                    e
                })?;
                tracing::debug!(record_id = id, "dialog saved edit");
                Ok(stored)
            }
        }
    }

    /// Closes the dialog and discards the draft unconditionally.
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::debug!(mode = ?self.mode(), "dialog cancelled");
        }
        self.state = DialogState::Closed;
    }

    #[must_use]
    pub const fn mode(&self) -> DialogMode {
        match self.state {
            DialogState::Closed => DialogMode::Closed,
            DialogState::Adding { .. } => DialogMode::Adding,
            DialogState::Editing { id, .. } => DialogMode::Editing(id),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.mode().is_open()
    }

    /// The in-progress draft, `None` when closed.
    #[must_use]
    pub const fn draft(&self) -> Option<&Fields> {
        match &self.state {
            DialogState::Closed => None,
            DialogState::Adding { draft } | DialogState::Editing { draft, .. } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut Fields> {
        match &mut self.state {
            DialogState::Closed => None,
            DialogState::Adding { draft } | DialogState::Editing { draft, .. } => Some(draft),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::ResourceKind;
    use crate::domain::seed;
    use crate::storage::MemoryStore;

    fn employees() -> MemoryStore {
        MemoryStore::with_records(seed::records(ResourceKind::Employee))
    }

    #[test]
    fn add_inserts_and_closes() {
        let mut store = employees();
        let mut dialog = DialogController::default();

        dialog.open_for_add();
        assert_eq!(dialog.mode(), DialogMode::Adding);
        assert!(dialog.draft().unwrap().is_empty());

        dialog.set_field("name", "Test User").unwrap();
        let stored = dialog.save(&mut store).unwrap();

        assert_eq!(stored.id, 11);
        assert_eq!(store.len(), 11);
        assert_eq!(dialog.mode(), DialogMode::Closed);
        assert!(dialog.draft().is_none());
    }

    #[test]
    fn edit_draft_is_a_copy_until_saved() {
        let mut store = employees();
        let mut dialog = DialogController::default();
        let original = store.get(3).unwrap().clone();

        dialog.open_for_edit(&original);
        dialog.set_field("status", "resigned").unwrap();
        assert_eq!(store.get(3), Some(&original));

        let saved = dialog.save(&mut store).unwrap();
        assert_eq!(saved.id, 3);
        assert_eq!(saved.text("status").as_deref(), Some("resigned"));
        assert_eq!(store.get(3).unwrap().text("status").as_deref(), Some("resigned"));
    }

    #[test]
    fn cancel_discards_draft() {
        let mut store = employees();
        let before = store.clone();
        let mut dialog = DialogController::default();

        dialog.open_for_edit(store.get(3).unwrap());
        dialog.set_field("status", "resigned").unwrap();
        dialog.cancel();

        assert!(!dialog.is_open());
        assert!(matches!(dialog.save(&mut store), Err(HrdeskError::DialogClosed)));
        assert_eq!(store, before);
    }

    #[test]
    fn set_field_requires_open_dialog() {
        let mut dialog = DialogController::default();
        assert!(matches!(dialog.set_field("name", "X"), Err(HrdeskError::DialogClosed)));
    }

    #[test]
    fn identifier_writes_are_ignored() {
        let mut store = employees();
        let mut dialog = DialogController::default();

        dialog.open_for_edit(store.get(2).unwrap());
        dialog.set_field(ID_FIELD, "99").unwrap();
        let saved = dialog.save(&mut store).unwrap();

        assert_eq!(saved.id, 2);
        assert!(store.get(99).is_none());
    }

    #[test]
    fn last_open_wins() {
        let store = employees();
        let mut dialog = DialogController::default();

        dialog.open_for_add();
        dialog.set_field("name", "Draft").unwrap();
        dialog.open_for_edit(store.get(5).unwrap());

        assert_eq!(dialog.mode(), DialogMode::Editing(5));
        assert_eq!(
            dialog.draft().unwrap().get("name"),
            store.get(5).unwrap().get("name")
        );
    }

    #[test]
    fn save_after_delete_is_not_found_and_closes() {
        let mut store = employees();
        let mut dialog = DialogController::default();

        dialog.open_for_edit(store.get(4).unwrap());
        store.remove(4).unwrap();

        assert!(matches!(dialog.save(&mut store), Err(HrdeskError::NotFound(4))));
        assert!(!dialog.is_open());
        assert!(store.get(4).is_none());
        assert_eq!(store.len(), 9);
    }
}
