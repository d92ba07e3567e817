//! Resource manager: one tab's worth of state.
//!
//! A [`ResourceManager`] composes the pieces that make up one resource table:
//! the store, the filter criteria and quick-search query, the pagination
//! state, the add/edit dialog, and a pending delete awaiting confirmation.
//! The same type serves every resource kind; behavior that differs between
//! kinds comes from the static [`Schema`] it is built with.
//!
//! # Derived View
//!
//! ```text
//! store.all() ──criteria──▶ ──quick search──▶ filtered() ──paginate──▶ visible_rows()
//! ```
//!
//! The derived view is recomputed on demand and never cached, so it cannot go
//! stale after a store mutation.

use crate::app::dialog::DialogController;
use crate::app::prompt::Prompter;
use crate::domain::error::{HrdeskError, Result};
use crate::domain::record::{FieldValue, Record, RecordId};
use crate::domain::schema::{Metric, ResourceKind, Schema};
use crate::domain::seed;
use crate::engine::filter::{self, Criteria, QuickSearch};
use crate::engine::pagination::{self, PageState};
use crate::storage::backend::Storage;
use crate::storage::import;
use crate::storage::memory::MemoryStore;
use std::collections::BTreeSet;

/// Confirmation prompt shown before a record is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this item?";

/// Filtering, pagination, editing and import over one resource store.
///
/// # Examples
///
/// ```
/// use hrdesk::app::manager::ResourceManager;
/// use hrdesk::domain::ResourceKind;
///
/// let mut employees = ResourceManager::seeded(ResourceKind::Employee);
/// employees.set_filter("department", "Nursing");
///
/// let (rows, page_count) = employees.visible_rows();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(page_count, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceManager<S: Storage = MemoryStore> {
    schema: &'static Schema,
    store: S,
    criteria: Criteria,
    search_query: String,
    page: PageState,
    dialog: DialogController,
    pending_delete: Option<RecordId>,
}

impl ResourceManager<MemoryStore> {
    /// Creates a manager over the fixed session seed for `kind`.
    #[must_use]
    pub fn seeded(kind: ResourceKind) -> Self {
        Self::new(kind, MemoryStore::with_records(seed::records(kind)))
    }
}

impl<S: Storage> ResourceManager<S> {
    #[must_use]
    pub fn new(kind: ResourceKind, store: S) -> Self {
        Self {
            schema: kind.schema(),
            store,
            criteria: Criteria::default(),
            search_query: String::new(),
            page: PageState::default(),
            dialog: DialogController::default(),
            pending_delete: None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.schema.kind
    }

    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub const fn page(&self) -> &PageState {
        &self.page
    }

    #[must_use]
    pub const fn dialog(&self) -> &DialogController {
        &self.dialog
    }

    #[must_use]
    pub const fn pending_delete(&self) -> Option<RecordId> {
        self.pending_delete
    }

    /// Sets one filter criterion and returns to the first page.
    ///
    /// An empty `value` clears the criterion.
    pub fn set_filter(&mut self, key: &str, value: &str) {
        tracing::debug!(kind = %self.kind(), key, value, "filter set");
        self.criteria.set(key, value);
        self.page.reset();
    }

    /// Clears every criterion and the quick-search query.
    pub fn clear_filters(&mut self) {
        tracing::debug!(kind = %self.kind(), "filters cleared");
        self.criteria.clear();
        self.search_query.clear();
        self.page.reset();
    }

    /// Replaces the quick-search query and returns to the first page.
    pub fn set_quick_search(&mut self, query: &str) {
        tracing::debug!(kind = %self.kind(), query, "quick search set");
        query.trim().clone_into(&mut self.search_query);
        self.page.reset();
    }

    /// Changes the page size and returns to the first page.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::InvalidPageSize`] for a size outside the allowed set.
    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        self.page.set_size(size)
    }

    /// Jumps to a zero-based page, clamped to the last page.
    pub fn go_to_page(&mut self, index: usize) {
        let len = self.filtered().len();
        self.page.go_to(index, len);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.index().saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.index().saturating_sub(1));
    }

    /// Records that pass the criteria and the quick search, in store order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Record> {
        let rows = filter::apply(self.store.all(), &self.criteria, self.schema.filters);
        if self.search_query.is_empty() {
            return rows;
        }

        let search = QuickSearch::new(&self.search_query);
        let columns = self.columns();
        rows.into_iter()
            .filter(|record| search.matches(record, &columns))
            .collect()
    }

    /// The current page of the filtered view and the page count.
    #[must_use]
    pub fn visible_rows(&self) -> (Vec<&Record>, usize) {
        let filtered = self.filtered();
        let (page, count) = pagination::paginate(&filtered, self.page.index(), self.page.size());
        (page.to_vec(), count)
    }

    /// Names of the displayed columns.
    #[must_use]
    pub fn columns(&self) -> Vec<&'static str> {
        self.schema.fields.iter().map(|f| f.name).collect()
    }

    /// Opens the dialog with a blank draft.
    pub fn request_add(&mut self) {
        self.dialog.open_for_add();
    }

    /// Opens the dialog on a copy of the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::NotFound`] if no record has `id`.
    pub fn request_edit(&mut self, id: RecordId) -> Result<()> {
        let record = self.store.get(id).ok_or(HrdeskError::NotFound(id))?;
        self.dialog.open_for_edit(record);
        Ok(())
    }

    /// Updates one field of the open draft.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::DialogClosed`] if no dialog is open.
    pub fn set_draft_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        self.dialog.set_field(name, value)
    }

    /// Required columns that are blank in the open draft.
    ///
    /// Empty when no dialog is open.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        let Some(draft) = self.dialog.draft() else {
            return vec![];
        };

        self.schema
            .required_fields()
            .filter(|name| draft.get(*name).map_or(true, FieldValue::is_blank))
            .collect()
    }

    /// Commits the open draft.
    ///
    /// # Errors
    ///
    /// - [`HrdeskError::DialogClosed`] if no dialog is open
    /// - [`HrdeskError::NotFound`] if the edited record was deleted meanwhile
    pub fn save(&mut self) -> Result<Record> {
        let _span = tracing::debug_span!("save_draft", kind = %self.kind()).entered();
        self.dialog.save(&mut self.store)
    }

    pub fn cancel(&mut self) {
        self.dialog.cancel();
    }

    /// Marks `id` for deletion and returns the confirmation prompt.
    ///
    /// The store is untouched until [`resolve_delete`](Self::resolve_delete)
    /// receives a positive answer.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::NotFound`] if no record has `id`.
    pub fn request_delete(&mut self, id: RecordId) -> Result<&'static str> {
        if self.store.get(id).is_none() {
            return Err(HrdeskError::NotFound(id));
        }

        tracing::debug!(kind = %self.kind(), record_id = id, "delete awaiting confirmation");
        self.pending_delete = Some(id);
        Ok(DELETE_CONFIRMATION)
    }

    /// Forgets an unconfirmed delete without asking.
    pub fn discard_pending_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            tracing::debug!(kind = %self.kind(), record_id = id, "pending delete discarded");
        }
    }

    /// Completes or abandons the pending delete.
    ///
    /// Returns the removed record, or `None` when declined or nothing was
    /// pending. After a removal the page index is clamped to the last page.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::NotFound`] if the record vanished before the answer.
    pub fn resolve_delete(&mut self, confirmed: bool) -> Result<Option<Record>> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(None);
        };

        if !confirmed {
            tracing::debug!(kind = %self.kind(), record_id = id, "delete declined");
            return Ok(None);
        }

        let removed = self.store.remove(id)?;
        let len = self.filtered().len();
        self.page.clamp(len);
        Ok(Some(removed))
    }

    /// Runs the whole delete flow against `prompter`.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::NotFound`] if no record has `id`.
    pub fn delete_with(&mut self, id: RecordId, prompter: &mut dyn Prompter) -> Result<Option<Record>> {
        let message = self.request_delete(id)?;
        let confirmed = prompter.confirm(message);
        self.resolve_delete(confirmed)
    }

    /// Decodes `text` and appends every candidate.
    ///
    /// Decoding happens before any insert, so a rejected payload leaves the
    /// store unchanged.
    ///
    /// # Errors
    ///
    /// - [`HrdeskError::MalformedPayload`] if `text` is not valid JSON
    /// - [`HrdeskError::InvalidShape`] if the payload is not an array
    pub fn request_import(&mut self, text: &str) -> Result<Vec<Record>> {
        let _span = tracing::debug_span!("import", kind = %self.kind()).entered();

        let candidates = import::decode(text)?;
        let inserted = self.store.insert_many(candidates);

        tracing::debug!(inserted = inserted.len(), total = self.store.len(), "import complete");
        Ok(inserted)
    }

    /// Summary cards over the whole collection, ignoring filters.
    #[must_use]
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        let records = self.store.all();
        self.schema
            .summary
            .iter()
            .map(|card| {
                let value = match card.metric {
                    Metric::Total => records.len(),
                    Metric::CountEq { field, value } => records
                        .iter()
                        .filter(|r| r.text(field).is_some_and(|v| v == value))
                        .count(),
                    // A record without the field counts as one more value.
                    Metric::Distinct { field } => records
                        .iter()
                        .map(|r| r.text(field))
                        .collect::<BTreeSet<_>>()
                        .len(),
                };
                (card.label, value)
            })
            .collect()
    }

    /// Non-blank values of `field` across the collection, deduplicated in store order.
    #[must_use]
    pub fn distinct_values(&self, field: &str) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.store
            .all()
            .iter()
            .filter_map(|r| r.text(field))
            .filter(|v| !v.trim().is_empty())
            .filter(|v| seen.insert(v.to_string()))
            .map(|v| v.into_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::DialogMode;
    use crate::app::prompt::Notice;

    struct Answer(bool);

    impl Prompter for Answer {
        fn confirm(&mut self, message: &str) -> bool {
            assert_eq!(message, DELETE_CONFIRMATION);
            self.0
        }

        fn notify(&mut self, _notice: &Notice) {}
    }

    fn names(rows: &[&Record]) -> Vec<String> {
        rows.iter()
            .map(|r| r.text("name").unwrap_or_default().into_owned())
            .collect()
    }

    #[test]
    fn filter_then_add_grows_filtered_view() {
        let mut employees = ResourceManager::seeded(ResourceKind::Employee);
        employees.set_filter("department", "Nursing");

        let (rows, _) = employees.visible_rows();
        assert_eq!(names(&rows), ["Alice Johnson", "Emily Wilson"]);

        employees.request_add();
        for (field, value) in [
            ("name", "Test User"),
            ("department", "Nursing"),
            ("role", "Nurse"),
            ("status", "active"),
            ("contact", "t@x.com"),
        ] {
            employees.set_draft_field(field, value).unwrap();
        }
        assert!(employees.missing_required().is_empty());
        employees.save().unwrap();

        assert_eq!(employees.store().len(), 11);
        assert_eq!(employees.filtered().len(), 3);
    }

    #[test]
    fn set_filter_resets_page() {
        let mut employees = ResourceManager::seeded(ResourceKind::Employee);
        employees.next_page();
        assert_eq!(employees.page().index(), 1);

        employees.set_filter("name", "a");
        assert_eq!(employees.page().index(), 0);
    }

    #[test]
    fn page_navigation_is_clamped() {
        let mut employees = ResourceManager::seeded(ResourceKind::Employee);
        employees.prev_page();
        assert_eq!(employees.page().index(), 0);

        employees.go_to_page(7);
        assert_eq!(employees.page().index(), 1);

        employees.set_page_size(25).unwrap();
        assert_eq!(employees.page().index(), 0);
        assert_eq!(employees.visible_rows().0.len(), 10);

        assert!(matches!(employees.set_page_size(7), Err(HrdeskError::InvalidPageSize(7))));
    }

    #[test]
    fn quick_search_narrows_with_criteria() {
        let mut employees = ResourceManager::seeded(ResourceKind::Employee);
        employees.set_quick_search("sophia");
        assert_eq!(names(&employees.filtered()), ["Sophia Davis"]);

        employees.set_filter("department", "Nursing");
        assert!(employees.filtered().is_empty());

        employees.clear_filters();
        assert_eq!(employees.filtered().len(), 10);
        assert_eq!(employees.search_query(), "");
    }

    #[test]
    fn edit_then_cancel_leaves_store_unchanged() {
        let mut employees = ResourceManager::seeded(ResourceKind::Employee);
        let before = employees.store().clone();

        employees.request_edit(3).unwrap();
        employees.set_draft_field("status", "resigned").unwrap();
        employees.cancel();

        assert_eq!(employees.store(), &before);
        assert_eq!(employees.dialog().mode(), DialogMode::Closed);
    }

    #[test]
    fn edit_missing_record_is_not_found() {
        let mut employees = ResourceManager::seeded(ResourceKind::Employee);
        assert!(matches!(employees.request_edit(42), Err(HrdeskError::NotFound(42))));
        assert!(!employees.dialog().is_open());
    }

    #[test]
    fn missing_required_lists_blank_fields() {
        let mut leaves = ResourceManager::seeded(ResourceKind::Leave);
        assert!(leaves.missing_required().is_empty());

        leaves.request_add();
        leaves.set_draft_field("employeeName", "John Doe").unwrap();
        leaves.set_draft_field("fromDate", "  ").unwrap();
        assert_eq!(leaves.missing_required(), ["fromDate", "toDate"]);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut departments = ResourceManager::seeded(ResourceKind::Department);

        assert!(departments.delete_with(2, &mut Answer(false)).unwrap().is_none());
        assert_eq!(departments.store().len(), 6);
        assert_eq!(departments.pending_delete(), None);

        let removed = departments.delete_with(2, &mut Answer(true)).unwrap().unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(departments.store().len(), 5);
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut departments = ResourceManager::seeded(ResourceKind::Department);
        assert!(matches!(
            departments.delete_with(99, &mut Answer(true)),
            Err(HrdeskError::NotFound(99))
        ));
        assert_eq!(departments.store().len(), 6);
    }

    #[test]
    fn delete_clamps_page_to_last() {
        let mut departments = ResourceManager::seeded(ResourceKind::Department);
        departments.next_page();
        assert_eq!(departments.page().index(), 1);

        let (rows, _) = departments.visible_rows();
        assert_eq!(rows.len(), 1);
        let victim = rows[0].id;

        departments.delete_with(victim, &mut Answer(true)).unwrap();
        assert_eq!(departments.page().index(), 0);
        assert_eq!(departments.visible_rows().0.len(), 5);
    }

    #[test]
    fn save_after_delete_does_not_resurrect() {
        let mut employees = ResourceManager::seeded(ResourceKind::Employee);
        employees.request_edit(3).unwrap();
        employees.delete_with(3, &mut Answer(true)).unwrap();

        assert!(matches!(employees.save(), Err(HrdeskError::NotFound(3))));
        assert!(employees.store().get(3).is_none());
        assert_eq!(employees.store().len(), 9);
    }

    #[test]
    fn import_appends_after_max_id() {
        let mut employees = ResourceManager::seeded(ResourceKind::Employee);
        let inserted = employees.request_import(r#"[{"name":"X"}]"#).unwrap();
        assert_eq!(inserted[0].id, 11);
        assert_eq!(employees.store().len(), 11);
    }

    #[test]
    fn failed_import_leaves_store_unchanged() {
        let mut employees = ResourceManager::seeded(ResourceKind::Employee);
        let before = employees.store().clone();

        assert!(matches!(employees.request_import("{not json"), Err(HrdeskError::MalformedPayload(_))));
        assert!(matches!(employees.request_import(r#"{"name":"X"}"#), Err(HrdeskError::InvalidShape(_))));
        assert_eq!(employees.store(), &before);
    }

    #[test]
    fn employee_summary_cards() {
        let employees = ResourceManager::seeded(ResourceKind::Employee);
        let summary = employees.summary();
        let labels: Vec<&str> = summary.iter().map(|(label, _)| *label).collect();

        assert_eq!(labels, ["Total Employees", "Active Employees", "On Leave", "Departments"]);
        assert_eq!(summary[0].1, 10);
        assert_eq!(
            summary[1].1 + summary[2].1,
            employees.store().all().iter().filter(|r| r.text("status").as_deref() != Some("resigned")).count()
        );
        assert_eq!(summary[3].1, employees.distinct_values("department").len());
        assert!(ResourceManager::seeded(ResourceKind::Leave).summary().is_empty());
    }

    #[test]
    fn department_card_counts_missing_department_once() {
        let mut employees = ResourceManager::seeded(ResourceKind::Employee);
        let before = employees.summary()[3].1;

        employees
            .request_import(r#"[{"name": "Temp One"}, {"name": "Temp Two"}]"#)
            .unwrap();
        assert_eq!(employees.summary()[3].1, before + 1);

        employees.request_import(r#"[{"name": "Temp Three", "department": ""}]"#).unwrap();
        assert_eq!(employees.summary()[3].1, before + 2);
    }

    #[test]
    fn discarding_pending_delete_keeps_record() {
        let mut employees = ResourceManager::seeded(ResourceKind::Employee);
        employees.request_delete(4).unwrap();

        employees.discard_pending_delete();
        assert_eq!(employees.pending_delete(), None);
        assert!(employees.store().get(4).is_some());
        assert_eq!(employees.resolve_delete(true).unwrap(), None);
    }

    #[test]
    fn distinct_values_keep_store_order() {
        let departments = ResourceManager::seeded(ResourceKind::Department);
        let names = departments.distinct_values("name");
        assert_eq!(names.len(), 6);
        assert_eq!(names[0], departments.store().all()[0].text("name").unwrap());
    }
}
