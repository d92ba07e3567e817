//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component writes
//! whole lines for one part of the interface to any `io::Write`.
//!
//! # Components
//!
//! - [`header`]: Title bar and resource tabs
//! - [`summary`]: Summary cards
//! - [`filters`]: Filter box (criteria and quick search)
//! - [`table`]: Column headers and the current page of rows
//! - [`pagination`]: Page position and page size options
//! - [`dialog`]: Add/edit dialog
//! - [`empty`]: Empty state message for no rows
//! - [`footer`]: Command hints
//! - [`notice`]: Colored notice line
//!
//! # Layout
//!
//! [`render_screen`] assembles the full screen:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Tabs]
//! [Border]
//! [Summary cards]
//! [Filter box - 4 lines]
//! [Table Headers]
//! [Table Rows | Empty state]
//! [Pagination]
//! [Dialog]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

pub mod dialog;
pub mod empty;
pub mod filters;
pub mod footer;
pub mod header;
pub mod notice;
pub mod pagination;
pub mod summary;
pub mod table;

pub use notice::render_notice;

use crate::ui::helpers::write_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::io::{self, Write};

/// Lines reserved below the body for the bottom border and footer.
const FOOTER_LINES: usize = 2;

/// Renders the full screen layout.
///
/// The body is padded with blank lines so the footer lands on the last rows of
/// a terminal `rows` high; a body taller than the terminal is not cut.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_screen<W: Write>(out: &mut W, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> io::Result<()> {
    let mut body = Vec::new();
    writeln!(body)?;
    header::render_header(&mut body, &vm.header, theme, cols)?;
    header::render_tabs(&mut body, &vm.tabs, theme, cols)?;
    write_border(&mut body, &theme.colors.border, cols)?;
    summary::render_summary(&mut body, &vm.summary, theme)?;
    filters::render_filter_box(&mut body, &vm.filters, theme, cols)?;
    table::render_table_headers(&mut body, &vm.columns, theme)?;

    if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(&mut body, empty, theme, cols)?;
    } else {
        table::render_table_rows(&mut body, &vm.rows, &vm.columns, theme)?;
    }

    pagination::render_pagination(&mut body, &vm.pagination, theme)?;
    if let Some(dialog) = &vm.dialog {
        dialog::render_dialog(&mut body, dialog, theme, cols)?;
    }

    let body_lines = body.iter().filter(|&&b| b == b'\n').count();
    out.write_all(&body)?;
    for _ in body_lines..rows.saturating_sub(FOOTER_LINES) {
        writeln!(out)?;
    }

    write_border(out, &theme.colors.border, cols)?;
    footer::render_footer(out, &vm.footer, theme, cols)
}
