//! Dialog mode types for the application.
//!
//! [`DialogMode`] is the observable state of a resource manager's add/edit
//! dialog. It determines whether a draft exists, which dialog title is shown,
//! and what `save` does with the draft.
//!
//! # State Machine
//!
//! ```text
//! Closed ──open_for_add──▶ Adding ──save/cancel──▶ Closed
//! Closed ──open_for_edit─▶ Editing(id) ──save/cancel──▶ Closed
//! ```
//!
//! Opening while already open replaces the current draft (last-open-wins).
//!
//! # Example
//!
//! ```rust
//! use hrdesk::app::modes::DialogMode;
//!
//! let mode = DialogMode::Editing(3);
//! assert!(mode.is_open());
//! assert_eq!(mode.submit_label(), "Update");
//! ```

use crate::domain::record::RecordId;

/// Add/edit dialog state of one resource manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogMode {
    /// No dialog is open and no draft exists.
    #[default]
    Closed,

    /// A blank draft will be inserted as a new record on save.
    Adding,

    /// A copy of the record with this identifier is being edited.
    ///
    /// Save patches the stored record; the identifier itself never changes.
    Editing(RecordId),
}

impl DialogMode {
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Verb used in the dialog title ("Add Employee", "Edit Employee").
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Closed | Self::Adding => "Add",
            Self::Editing(_) => "Edit",
        }
    }

    /// Label of the dialog's submit button.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Closed | Self::Adding => "Save",
            Self::Editing(_) => "Update",
        }
    }
}
