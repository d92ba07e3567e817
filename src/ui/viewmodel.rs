//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! They are the rendering boundary of the HR desk: everything a presentation
//! layer needs (current page, pagination, filter values, dialog state) is
//! pre-computed here, and nothing in them refers back to the stores.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use hrdesk::app::AppState;
//! use hrdesk::ui::Theme;
//!
//! let state = AppState::new(Theme::default());
//! let vm = state.compute_viewmodel(100);
//! assert_eq!(vm.tabs.len(), 3);
//! assert_eq!(vm.rows.len(), 5);
//! assert_eq!(vm.pagination.page_count, 2);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Resource tabs in display order.
    pub tabs: Vec<TabInfo>,

    /// Page title.
    pub header: HeaderInfo,

    /// Summary cards of the active tab; empty for kinds without cards.
    pub summary: Vec<SummaryCard>,

    /// Active filter values and quick-search query.
    pub filters: FilterBarInfo,

    /// Table column headers, identifier column excluded.
    pub columns: Vec<ColumnInfo>,

    /// Rows of the current page.
    pub rows: Vec<RowItem>,

    pub pagination: PaginationInfo,

    /// Open add/edit dialog, if any.
    pub dialog: Option<DialogView>,

    /// Shown instead of rows when the filtered view is empty.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// One resource tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub label: String,
    /// Records in the tab's store, ignoring filters.
    pub count: usize,
    pub is_active: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// A labelled metric card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: String,
    pub value: usize,
}

/// Filter box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    /// Every filter the schema declares, with its current value (possibly empty).
    pub entries: Vec<FilterEntry>,

    /// Current quick-search query.
    pub quick_search: String,
}

/// One filter input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// One table column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub label: String,
    /// Display width in characters.
    pub width: usize,
}

/// Display information for a single record row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowItem {
    pub id: u64,

    /// Cell texts, truncated to their column widths.
    pub cells: Vec<String>,

    /// Character ranges of the first cell matched by the quick search.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Whether this row awaits delete confirmation.
    pub is_pending_delete: bool,
}

/// Pagination control state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Zero-based current page.
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// Rows in the filtered view.
    pub total: usize,
    pub size_options: Vec<usize>,
}

/// The add/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    /// "Add Employee", "Edit Department", ...
    pub title: String,
    /// "Save" when adding, "Update" when editing.
    pub submit_label: String,
    pub fields: Vec<DialogField>,
    /// `false` while a required field is blank.
    pub can_save: bool,
}

/// One input of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub required: bool,
    /// Required and currently blank.
    pub missing: bool,
    /// Allowed values for choice inputs; empty for free text.
    pub options: Vec<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No employees found.").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command help text.
    pub keybindings: String,
}
