//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry points, coordinating view
//! model computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Example
//!
//! ```rust
//! use hrdesk::app::AppState;
//! use hrdesk::ui::{render_to, Theme};
//!
//! let state = AppState::new(Theme::default());
//! let mut screen = Vec::new();
//! render_to(&mut screen, &state, 40, 100)?;
//! assert!(String::from_utf8_lossy(&screen).contains("Alice Johnson"));
//! # Ok::<(), hrdesk::HrdeskError>(())
//! ```

use crate::app::AppState;
use crate::domain::error::Result;
use crate::ui::components;
use crate::ui::helpers::clear_screen;
use std::io::{self, Write};

/// Renders the UI into `out`.
///
/// Clears the screen, then draws the active tab for a terminal of `rows` by
/// `cols` characters.
///
/// # Errors
///
/// Returns [`HrdeskError::Io`](crate::HrdeskError::Io) if writing fails.
pub fn render_to<W: Write>(out: &mut W, state: &AppState, rows: usize, cols: usize) -> Result<()> {
    let viewmodel = state.compute_viewmodel(cols);

    clear_screen(out)?;
    components::render_screen(out, &viewmodel, &state.theme, rows, cols)?;
    out.flush()?;
    Ok(())
}

/// Renders the UI to stdout.
///
/// # Errors
///
/// Returns [`HrdeskError::Io`](crate::HrdeskError::Io) if stdout is closed.
pub fn render(state: &AppState, rows: usize, cols: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(&mut out, state, rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handler::{handle_event, Event};
    use crate::domain::schema::ResourceKind;
    use crate::ui::theme::Theme;

    fn screen(state: &AppState) -> String {
        let mut out = Vec::new();
        render_to(&mut out, state, 40, 120).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_first_page_and_chrome() {
        let state = AppState::new(Theme::default());
        let text = screen(&state);

        assert!(text.starts_with("\u{1b}[2J"));
        assert!(text.contains("Hospital Human Resources Management"));
        assert!(text.contains(" Employees (10) "));
        assert!(text.contains("Total Employees"));
        assert!(text.contains("Alice Johnson"));
        assert!(!text.contains("Robert Miller"));
        assert!(text.contains("Page 1 of 2"));
        assert!(text.contains("Rows per page: [5] 10 25"));
    }

    #[test]
    fn fills_terminal_height() {
        let state = AppState::new(Theme::default());
        let text = screen(&state);
        assert_eq!(text.matches('\n').count(), 40);
    }

    #[test]
    fn renders_empty_state() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::SwitchTab(ResourceKind::Leave)).unwrap();
        handle_event(&mut state, &Event::SetFilter { key: "employeeName".into(), value: "zzz".into() }).unwrap();

        let text = screen(&state);
        assert!(text.contains("No leave records found."));
        assert!(text.contains("Employee Name: zzz"));
    }

    #[test]
    fn renders_dialog_with_options() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::OpenAdd).unwrap();

        let text = screen(&state);
        assert!(text.contains("Add Employee"));
        assert!(text.contains("active | on leave | resigned"));
        assert!(text.contains("fill the starred fields to save"));
        assert!(text.contains("set <field> <value>  save  cancel"));
    }
}
