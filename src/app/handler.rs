//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user commands,
//! translating them into state changes and action sequences. It serves as the
//! primary control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the runtime (parsed console commands)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `ResourceManager` methods of the active tab
//! 4. Actions are collected and returned for execution
//!
//! [`dispatch`] closes the loop: it executes the actions against a
//! [`Prompter`] and feeds confirmation answers back in as events.
//!
//! # Event Types
//!
//! - **Navigation**: `SwitchTab`, `GoToPage`, `NextPage`, `PrevPage`, `SetPageSize`
//! - **Filtering**: `SetFilter`, `ClearFilters`, `QuickSearch`
//! - **Editing**: `OpenAdd`, `OpenEdit`, `SetField`, `Save`, `Cancel`
//! - **Deletion**: `RequestDelete`, `ConfirmDelete`
//! - **Bulk**: `Import`
//! - **Session**: `Help`, `Quit`
//!
//! # Errors
//!
//! Errors scoped to one action (see [`HrdeskError::is_recoverable`]) never
//! escape the handler: they become a [`Notice`] and the state is left as the
//! failing operation found it.
//!
//! # Example
//!
//! ```rust
//! use hrdesk::app::{handle_event, AppState, Event};
//! use hrdesk::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::NextPage)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), hrdesk::HrdeskError>(())
//! ```

use crate::app::actions::Action;
use crate::app::command::HELP;
use crate::app::modes::DialogMode;
use crate::app::prompt::{Notice, Prompter};
use crate::app::state::AppState;
use crate::domain::error::{HrdeskError, Result};
use crate::domain::record::RecordId;
use crate::domain::schema::ResourceKind;
use std::collections::VecDeque;

/// Events triggered by user commands or confirmation answers.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. Events always target the active tab's manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Makes another resource tab active.
    SwitchTab(ResourceKind),

    /// Sets one filter criterion; an empty value clears it.
    SetFilter { key: String, value: String },
    /// Clears every criterion and the quick search.
    ClearFilters,
    /// Replaces the quick-search query.
    QuickSearch(String),

    /// Changes the page size (5, 10 or 25).
    SetPageSize(usize),
    /// Jumps to a zero-based page.
    GoToPage(usize),
    NextPage,
    PrevPage,

    /// Opens the add dialog with a blank draft.
    OpenAdd,
    /// Opens the edit dialog on a copy of a record.
    OpenEdit(RecordId),
    /// Updates one draft field.
    SetField { name: String, value: String },
    /// Commits the draft if no required field is blank.
    Save,
    /// Discards the draft.
    Cancel,

    /// Asks for confirmation before deleting a record.
    RequestDelete(RecordId),
    /// Answer to the pending delete confirmation.
    ConfirmDelete(bool),

    /// Appends the records of a pasted JSON array.
    Import(String),

    /// Shows the command reference.
    Help,
    /// Ends the session.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the view changed, and the side effects to run
/// in order.
///
/// # Errors
///
/// Only non-recoverable errors are returned; recoverable ones are reported as
/// an error notice.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event and active tab.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, tab = %state.active_tab).entered();

    match apply(state, event) {
        Err(err) if err.is_recoverable() => {
            tracing::warn!(error = %err, "action failed");
            Ok((true, vec![Action::Notify(Notice::error(err.to_string()))]))
        }
        other => other,
    }
}

#[allow(clippy::too_many_lines)]
fn apply(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::SwitchTab(kind) => Ok((state.switch_tab(*kind), vec![])),
        Event::SetFilter { key, value } => {
            state.active_mut().set_filter(key, value);
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            state.active_mut().clear_filters();
            Ok((true, vec![]))
        }
        Event::QuickSearch(query) => {
            state.active_mut().set_quick_search(query);
            Ok((true, vec![]))
        }
        Event::SetPageSize(size) => {
            state.active_mut().set_page_size(*size)?;
            Ok((true, vec![]))
        }
        Event::GoToPage(index) => {
            state.active_mut().go_to_page(*index);
            Ok((true, vec![]))
        }
        Event::NextPage => {
            state.active_mut().next_page();
            Ok((true, vec![]))
        }
        Event::PrevPage => {
            state.active_mut().prev_page();
            Ok((true, vec![]))
        }
        Event::OpenAdd => {
            state.active_mut().request_add();
            Ok((true, vec![]))
        }
        Event::OpenEdit(id) => {
            state.active_mut().request_edit(*id)?;
            Ok((true, vec![]))
        }
        Event::SetField { name, value } => {
            let manager = state.active_mut();
            if manager.schema().field(name).is_none() {
                tracing::debug!(field = %name, kind = %manager.kind(), "field is not a schema column");
            }
            manager.set_draft_field(name, value.as_str())?;
            Ok((true, vec![]))
        }
        Event::Save => {
            let manager = state.active_mut();
            let mode = manager.dialog().mode();
            if mode == DialogMode::Closed {
                return Err(HrdeskError::DialogClosed);
            }

            let missing = manager.missing_required();
            if !missing.is_empty() {
                let schema = manager.schema();
                let labels: Vec<&str> = missing
                    .iter()
                    .map(|name| schema.field(name).map_or(*name, |f| f.label))
                    .collect();
                tracing::debug!(missing = ?missing, "save refused");
                return Ok((
                    true,
                    vec![Action::Notify(Notice::warning(format!(
                        "Please fill in the required fields: {}",
                        labels.join(", ")
                    )))],
                ));
            }

            let label = manager.kind().label();
            let stored = manager.save()?;
            let verb = if mode == DialogMode::Adding { "added" } else { "updated" };
            Ok((true, vec![Action::Notify(Notice::success(format!("{label} {} {verb}", stored.id)))]))
        }
        Event::Cancel => {
            state.active_mut().cancel();
            Ok((true, vec![]))
        }
        Event::RequestDelete(id) => {
            let message = state.active_mut().request_delete(*id)?;
            Ok((false, vec![Action::Confirm { message: message.to_string() }]))
        }
        Event::ConfirmDelete(confirmed) => {
            let manager = state.active_mut();
            let label = manager.kind().label();
            match manager.resolve_delete(*confirmed)? {
                Some(removed) => Ok((
                    true,
                    vec![Action::Notify(Notice::success(format!("{label} {} deleted", removed.id)))],
                )),
                None => Ok((true, vec![])),
            }
        }
        Event::Import(text) => {
            if text.trim().is_empty() {
                return Ok((false, vec![]));
            }

            let inserted = state.active_mut().request_import(text)?;
            let noun = if inserted.len() == 1 { "record" } else { "records" };
            Ok((
                true,
                vec![Action::Notify(Notice::success(format!("Imported {} {noun}", inserted.len())))],
            ))
        }
        Event::Help => Ok((false, vec![Action::Notify(Notice::info(HELP))])),
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Outcome of a [`dispatch`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Some handled event changed the view.
    pub render: bool,
    /// A [`Action::Quit`] was emitted.
    pub quit: bool,
}

/// Handles `event` and every follow-up event its actions produce.
///
/// `Confirm` actions are answered by `prompter` and re-enter the handler as
/// [`Event::ConfirmDelete`]; `Notify` actions are shown through it.
///
/// # Errors
///
/// Propagates non-recoverable handler errors.
///
/// # Example
///
/// ```rust
/// use hrdesk::app::handler::{dispatch, Event};
/// use hrdesk::app::prompt::{Notice, Prompter};
/// use hrdesk::app::AppState;
/// use hrdesk::storage::Storage;
/// use hrdesk::ui::Theme;
///
/// struct Yes;
/// impl Prompter for Yes {
///     fn confirm(&mut self, _: &str) -> bool { true }
///     fn notify(&mut self, _: &Notice) {}
/// }
///
/// let mut state = AppState::new(Theme::default());
/// dispatch(&mut state, Event::RequestDelete(1), &mut Yes)?;
/// assert_eq!(state.employees.store().len(), 9);
/// # Ok::<(), hrdesk::HrdeskError>(())
/// ```
pub fn dispatch(state: &mut AppState, event: Event, prompter: &mut dyn Prompter) -> Result<Dispatch> {
    let mut queue = VecDeque::from([event]);
    let mut outcome = Dispatch::default();

    while let Some(event) = queue.pop_front() {
        let (render, actions) = handle_event(state, &event)?;
        outcome.render |= render;

        for action in actions {
            match action {
                Action::Confirm { message } => {
                    let answer = prompter.confirm(&message);
                    tracing::debug!(answer, "confirmation answered");
                    queue.push_back(Event::ConfirmDelete(answer));
                }
                Action::Notify(notice) => prompter.notify(&notice),
                Action::Quit => outcome.quit = true,
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prompt::NoticeLevel;
    use crate::storage::backend::Storage;
    use crate::ui::theme::Theme;

    #[derive(Default)]
    struct Recorder {
        answer: bool,
        asked: Vec<String>,
        notices: Vec<Notice>,
    }

    impl Prompter for Recorder {
        fn confirm(&mut self, message: &str) -> bool {
            self.asked.push(message.to_string());
            self.answer
        }

        fn notify(&mut self, notice: &Notice) {
            self.notices.push(notice.clone());
        }
    }

    fn state() -> AppState {
        AppState::new(Theme::default())
    }

    fn set(name: &str, value: &str) -> Event {
        Event::SetField { name: name.into(), value: value.into() }
    }

    #[test]
    fn recoverable_errors_become_notices() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::OpenEdit(99)).unwrap();

        assert!(render);
        assert_eq!(actions, [Action::Notify(Notice::error("Record 99 not found"))]);
        assert!(!state.employees.dialog().is_open());
    }

    #[test]
    fn save_refused_while_required_fields_blank() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenAdd).unwrap();
        handle_event(&mut state, &set("name", "Test User")).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Save).unwrap();
        let [Action::Notify(notice)] = actions.as_slice() else {
            panic!("expected one notice, got {actions:?}");
        };
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.ends_with("Department, Role, Status, Contact"));
        assert!(state.employees.dialog().is_open());
        assert_eq!(state.employees.store().len(), 10);
    }

    #[test]
    fn save_adds_and_reports() {
        let mut state = state();
        handle_event(&mut state, &Event::SwitchTab(ResourceKind::Department)).unwrap();
        handle_event(&mut state, &Event::OpenAdd).unwrap();
        handle_event(&mut state, &set("name", "Oncology")).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Save).unwrap();
        assert_eq!(actions, [Action::Notify(Notice::success("Department 7 added"))]);
        assert_eq!(state.departments.store().len(), 7);
    }

    #[test]
    fn save_without_dialog_is_reported() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Save).unwrap();
        assert_eq!(actions, [Action::Notify(Notice::error("No add or edit dialog is open"))]);
    }

    #[test]
    fn delete_asks_before_removing() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::RequestDelete(2)).unwrap();

        assert!(!render);
        assert!(matches!(actions.as_slice(), [Action::Confirm { .. }]));
        assert_eq!(state.employees.store().len(), 10);
        assert_eq!(state.employees.pending_delete(), Some(2));
    }

    #[test]
    fn dispatch_feeds_confirmation_back() {
        let mut state = state();
        let mut prompter = Recorder { answer: true, ..Recorder::default() };

        let outcome = dispatch(&mut state, Event::RequestDelete(2), &mut prompter).unwrap();

        assert!(outcome.render);
        assert_eq!(prompter.asked, ["Are you sure you want to delete this item?"]);
        assert_eq!(prompter.notices, [Notice::success("Employee 2 deleted")]);
        assert!(state.employees.store().get(2).is_none());
    }

    #[test]
    fn declined_delete_keeps_record() {
        let mut state = state();
        let mut prompter = Recorder::default();

        dispatch(&mut state, Event::RequestDelete(2), &mut prompter).unwrap();

        assert!(prompter.notices.is_empty());
        assert!(state.employees.store().get(2).is_some());
        assert_eq!(state.employees.pending_delete(), None);
    }

    #[test]
    fn import_reports_count_or_failure() {
        let mut state = state();
        let mut prompter = Recorder::default();

        dispatch(&mut state, Event::Import(r#"[{"name":"X"},{"name":"Y"}]"#.into()), &mut prompter).unwrap();
        dispatch(&mut state, Event::Import("{not json".into()), &mut prompter).unwrap();
        dispatch(&mut state, Event::Import(r#"{"name":"X"}"#.into()), &mut prompter).unwrap();

        assert_eq!(
            prompter.notices,
            [
                Notice::success("Imported 2 records"),
                Notice::error("Import failed: invalid JSON format"),
                Notice::error("Invalid data format: expected an array, found object"),
            ]
        );
        assert_eq!(state.employees.store().len(), 12);
    }

    #[test]
    fn blank_import_is_ignored() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Import("  ".into())).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn invalid_page_size_is_reported() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::SetPageSize(3)).unwrap();
        assert!(matches!(actions.as_slice(), [Action::Notify(n)] if n.level == NoticeLevel::Error));
        assert_eq!(state.employees.page().size(), 5);
    }

    #[test]
    fn quit_ends_dispatch() {
        let mut state = state();
        let outcome = dispatch(&mut state, Event::Quit, &mut Recorder::default()).unwrap();
        assert!(outcome.quit);
        assert!(!outcome.render);
    }

    #[test]
    fn tab_switch_routes_events() {
        let mut state = state();
        handle_event(&mut state, &Event::SwitchTab(ResourceKind::Leave)).unwrap();
        handle_event(
            &mut state,
            &Event::SetFilter { key: "fromDate".into(), value: "2024-07-01".into() },
        )
        .unwrap();

        assert_eq!(state.leaves.filtered().len(), 1);
        assert!(state.employees.criteria().is_empty());
    }
}
