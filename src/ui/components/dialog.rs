//! Add/edit dialog renderer.
//!
//! This module renders the open dialog below the table: a titled frame with
//! one line per field. Required fields are starred, blank required fields are
//! flagged in the required color, and choice inputs list their options.

use crate::ui::helpers::{width_of, write_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DialogField, DialogView};
use std::io::{self, Write};

const LABEL_WIDTH: usize = 18;

/// Renders the dialog frame and its fields.
///
/// # Layout
///
/// ```text
/// ┌─ Edit Employee ─────────────────────────┐
/// │ * Name              Linda Brown
/// │ * Status            on leave   [active | on leave | resigned]
/// └─ save (Update) ───────────────────────┘
/// ```
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_dialog<W: Write>(out: &mut W, dialog: &DialogView, theme: &Theme, cols: usize) -> io::Result<()> {
    let border = Theme::fg(&theme.colors.filter_border);
    let title = format!("─ {} ", dialog.title);
    writeln!(
        out,
        "{border}┌{title}{}{}",
        "─".repeat(cols.saturating_sub(width_of(&title) + 1)),
        Theme::reset()
    )?;

    for field in &dialog.fields {
        write!(out, "{border}│{} ", Theme::reset())?;
        render_field(out, field, theme)?;
    }

    let hint = if dialog.can_save {
        format!("─ save ({}) ", dialog.submit_label)
    } else {
        "─ fill the starred fields to save ".to_string()
    };
    writeln!(
        out,
        "{border}└{hint}{}{}",
        "─".repeat(cols.saturating_sub(width_of(&hint) + 1)),
        Theme::reset()
    )
}

fn render_field<W: Write>(out: &mut W, field: &DialogField, theme: &Theme) -> io::Result<()> {
    let marker = if field.required { "* " } else { "  " };
    let label_color = if field.missing {
        &theme.colors.required_fg
    } else {
        &theme.colors.text_dim
    };

    write!(out, "{}{marker}", Theme::fg(label_color))?;
    write_padded(out, &field.label, LABEL_WIDTH)?;
    write!(out, "{}{}", Theme::fg(&theme.colors.text_normal), field.value)?;

    if !field.options.is_empty() {
        write!(
            out,
            "  {}[{}]",
            Theme::fg(&theme.colors.text_dim),
            field.options.join(" | ")
        )?;
    }
    writeln!(out, "{}", Theme::reset())
}
