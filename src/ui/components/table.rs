//! Table component renderer.
//!
//! This module renders the current page as a table with an identifier column
//! followed by the schema columns. The first data column carries quick-search
//! highlights; a row awaiting delete confirmation is drawn in the error color.

use crate::app::state::ID_COLUMN_WIDTH;
use crate::ui::helpers::{self, width_of, write_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnInfo, RowItem};
use std::io::{self, Write};

/// Renders the table column headers.
///
/// Displays "ID" and the column labels with bold styling, each padded to its
/// column width.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_table_headers<W: Write>(out: &mut W, columns: &[ColumnInfo], theme: &Theme) -> io::Result<()> {
    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))?;
    write_padded(out, "ID", ID_COLUMN_WIDTH)?;
    for column in columns {
        let label: String = column.label.chars().take(column.width.saturating_sub(1)).collect();
        write_padded(out, &label, column.width)?;
    }
    writeln!(out, "{}", Theme::reset())
}

/// Renders all table rows.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_table_rows<W: Write>(out: &mut W, rows: &[RowItem], columns: &[ColumnInfo], theme: &Theme) -> io::Result<()> {
    for row in rows {
        render_table_row(out, row, columns, theme)?;
    }
    Ok(())
}

/// Renders a single table row.
///
/// # Layout
///
/// ```text
/// ID [pad] CELL 1 [pad] CELL 2 [pad] ...
/// ```
///
/// # Styling Precedence
///
/// 1. Pending delete color (if `is_pending_delete`)
/// 2. Quick-search highlights on the first cell
/// 3. Normal text color
fn render_table_row<W: Write>(out: &mut W, row: &RowItem, columns: &[ColumnInfo], theme: &Theme) -> io::Result<()> {
    let base = if row.is_pending_delete {
        &theme.colors.error_fg
    } else {
        &theme.colors.text_normal
    };
    write!(out, "{}", Theme::fg(base))?;
    write_padded(out, &row.id.to_string(), ID_COLUMN_WIDTH)?;

    for (index, (cell, column)) in row.cells.iter().zip(columns).enumerate() {
        if index == 0 && !row.is_pending_delete {
            helpers::write_highlighted(out, cell, &row.highlight_ranges, theme)?;
            write!(out, "{}", " ".repeat(column.width.saturating_sub(width_of(cell))))?;
        } else {
            write_padded(out, cell, column.width)?;
        }
    }

    writeln!(out, "{}", Theme::reset())
}
