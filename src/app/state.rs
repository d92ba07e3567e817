//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container of the HR
//! desk: one [`ResourceManager`] per tab plus the active tab and theme. The
//! managers never share state, so filters, pagination and drafts of one tab
//! cannot leak into another.
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation: tab counts, summary cards, filter values, the current page
//! with truncated cells and quick-search highlights, pagination, and the open
//! dialog with its choice options.
//!
//! # Example
//!
//! ```rust
//! use hrdesk::app::AppState;
//! use hrdesk::domain::ResourceKind;
//! use hrdesk::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.switch_tab(ResourceKind::Leave);
//! let viewmodel = state.compute_viewmodel(80);
//! assert_eq!(viewmodel.rows.len(), 2);
//! ```

use crate::app::manager::ResourceManager;
use crate::domain::record::Record;
use crate::domain::schema::{Choices, InputKind, ResourceKind};
use crate::engine::filter::QuickSearch;
use crate::engine::pagination::PAGE_SIZE_OPTIONS;
use crate::storage::backend::Storage;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnInfo, DialogField, DialogView, EmptyState, FilterBarInfo, FilterEntry, FooterInfo,
    HeaderInfo, PaginationInfo, RowItem, SummaryCard, TabInfo, UIViewModel,
};

/// Page title shown in the header.
pub const TITLE: &str = "Hospital Human Resources Management";

/// Width of the identifier column, including its separator.
pub const ID_COLUMN_WIDTH: usize = 5;

const MIN_COLUMN_WIDTH: usize = 8;

/// Central application state container.
///
/// Mutated by the event handler; view models are computed on demand.
#[derive(Debug, Clone)]
pub struct AppState {
    pub employees: ResourceManager,
    pub departments: ResourceManager,
    pub leaves: ResourceManager,

    /// Tab whose manager receives events.
    pub active_tab: ResourceKind,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the state with every tab seeded and the employees tab active.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            employees: ResourceManager::seeded(ResourceKind::Employee),
            departments: ResourceManager::seeded(ResourceKind::Department),
            leaves: ResourceManager::seeded(ResourceKind::Leave),
            active_tab: ResourceKind::Employee,
            theme,
        }
    }

    #[must_use]
    pub const fn manager(&self, kind: ResourceKind) -> &ResourceManager {
        match kind {
            ResourceKind::Employee => &self.employees,
            ResourceKind::Department => &self.departments,
            ResourceKind::Leave => &self.leaves,
        }
    }

    pub fn manager_mut(&mut self, kind: ResourceKind) -> &mut ResourceManager {
        match kind {
            ResourceKind::Employee => &mut self.employees,
            ResourceKind::Department => &mut self.departments,
            ResourceKind::Leave => &mut self.leaves,
        }
    }

    /// Manager of the active tab.
    #[must_use]
    pub const fn active(&self) -> &ResourceManager {
        self.manager(self.active_tab)
    }

    pub fn active_mut(&mut self) -> &mut ResourceManager {
        self.manager_mut(self.active_tab)
    }

    /// Makes `kind` the active tab.
    ///
    /// Leaving a tab discards its open draft and any unconfirmed delete; its
    /// filters and pagination are kept. Returns `false` if `kind` was already
    /// active.
    pub fn switch_tab(&mut self, kind: ResourceKind) -> bool {
        if kind == self.active_tab {
            return false;
        }

        let outgoing = self.active_mut();
        outgoing.cancel();
        outgoing.discard_pending_delete();

        tracing::debug!(from = %self.active_tab, to = %kind, "tab switched");
        self.active_tab = kind;
        true
    }

    /// Options offered by a choice input, resolved against the current stores.
    #[must_use]
    pub fn choices_for(&self, choices: Choices) -> Vec<String> {
        match choices {
            Choices::Fixed(options) => options.iter().map(ToString::to_string).collect(),
            Choices::DepartmentNames => self.departments.distinct_values("name"),
            Choices::EmployeeNames => self.employees.distinct_values("name"),
        }
    }

    /// Computes a renderable UI view model for a terminal `cols` wide.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", tab = %self.active_tab, cols).entered();

        let manager = self.active();
        let schema = manager.schema();
        let filtered = manager.filtered();
        let (page_rows, page_count) = manager.visible_rows();

        let width = column_width(cols, schema.fields.len());
        let columns = schema
            .fields
            .iter()
            .map(|f| ColumnInfo { label: f.label.to_string(), width })
            .collect();

        let search = QuickSearch::new(manager.search_query());
        let rows = page_rows
            .iter()
            .map(|record| self.compute_row(record, width, &search))
            .collect();

        let empty_state = filtered.is_empty().then(|| EmptyState {
            message: manager.kind().empty_message().to_string(),
            subtitle: if manager.criteria().is_empty() && search.is_empty() {
                "Use 'add' or 'import' to create records".to_string()
            } else {
                "Try 'clear' to reset the filters".to_string()
            },
        });

        UIViewModel {
            tabs: self.compute_tabs(),
            header: HeaderInfo { title: TITLE.to_string() },
            summary: manager
                .summary()
                .into_iter()
                .map(|(label, value)| SummaryCard { label: label.to_string(), value })
                .collect(),
            filters: FilterBarInfo {
                entries: schema
                    .filters
                    .iter()
                    .map(|f| FilterEntry {
                        key: f.key.to_string(),
                        label: f.label.to_string(),
                        value: manager.criteria().get(f.key).to_string(),
                    })
                    .collect(),
                quick_search: manager.search_query().to_string(),
            },
            columns,
            rows,
            pagination: PaginationInfo {
                page_index: manager.page().index(),
                page_count,
                page_size: manager.page().size(),
                total: filtered.len(),
                size_options: PAGE_SIZE_OPTIONS.to_vec(),
            },
            dialog: self.compute_dialog(),
            empty_state,
            footer: self.compute_footer(),
        }
    }

    fn compute_tabs(&self) -> Vec<TabInfo> {
        ResourceKind::ALL
            .iter()
            .map(|&kind| TabInfo {
                label: kind.tab_label().to_string(),
                count: self.manager(kind).store().len(),
                is_active: kind == self.active_tab,
            })
            .collect()
    }

    fn compute_row(&self, record: &Record, width: usize, search: &QuickSearch) -> RowItem {
        let cells: Vec<String> = self
            .active()
            .schema()
            .fields
            .iter()
            .map(|f| truncate(&record.text(f.name).unwrap_or_default(), width))
            .collect();

        let highlight_ranges = match cells.first() {
            Some(first) if !search.is_empty() => search.highlight_ranges(first),
            _ => vec![],
        };

        RowItem {
            id: record.id,
            cells,
            highlight_ranges,
            is_pending_delete: self.active().pending_delete() == Some(record.id),
        }
    }

    fn compute_dialog(&self) -> Option<DialogView> {
        let manager = self.active();
        let draft = manager.dialog().draft()?;
        let mode = manager.dialog().mode();
        let missing = manager.missing_required();

        let fields = manager
            .schema()
            .fields
            .iter()
            .map(|f| DialogField {
                name: f.name.to_string(),
                label: f.label.to_string(),
                value: draft.get(f.name).map(ToString::to_string).unwrap_or_default(),
                required: f.required,
                missing: missing.contains(&f.name),
                options: match f.input {
                    InputKind::Choice(choices) => self.choices_for(choices),
                    InputKind::Text | InputKind::Email | InputKind::Date => vec![],
                },
            })
            .collect();

        Some(DialogView {
            title: format!("{} {}", mode.verb(), manager.kind().label()),
            submit_label: mode.submit_label().to_string(),
            fields,
            can_save: missing.is_empty(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.active().dialog().is_open() {
            "set <field> <value>  save  cancel"
        } else {
            "tab <name>  filter <key> <value>  search <text>  next/prev  add  edit <id>  delete <id>  import <json>  help  quit"
        };

        FooterInfo { keybindings: keybindings.to_string() }
    }
}

/// Shared width of the data columns after the identifier column.
fn column_width(cols: usize, columns: usize) -> usize {
    if columns == 0 {
        return MIN_COLUMN_WIDTH;
    }
    (cols.saturating_sub(ID_COLUMN_WIDTH) / columns).max(MIN_COLUMN_WIDTH)
}

/// Fits `text` in a cell of `width` characters, leaving one column of spacing.
fn truncate(text: &str, width: usize) -> String {
    let room = width.saturating_sub(1);
    if text.chars().count() <= room {
        return text.to_string();
    }

    let keep = room.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
