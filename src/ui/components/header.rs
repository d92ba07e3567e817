//! Header component renderer.
//!
//! This module renders the page title bar with centered text, theme-aware
//! colors, and optional background styling, followed by the resource tabs.

use crate::ui::helpers::{width_of, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, TabInfo};
use std::io::{self, Write};

/// Renders the header title bar.
///
/// Displays the title centered horizontally with bold styling and theme colors.
/// Pads the line to fill the entire terminal width.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_header<W: Write>(out: &mut W, header: &HeaderInfo, theme: &Theme, cols: usize) -> io::Result<()> {
    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))?;
    if let Some(bg) = &theme.colors.header_bg {
        write!(out, "{}", Theme::bg(bg))?;
    }
    write_centered(out, &header.title, cols)?;
    write!(out, "{}", Theme::reset())
}

/// Renders the tab strip, the active tab inverted.
///
/// ```text
///  Employees (10)   Departments (6)   Leave / Off Days (2)
/// ```
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_tabs<W: Write>(out: &mut W, tabs: &[TabInfo], theme: &Theme, cols: usize) -> io::Result<()> {
    let mut used = 0;
    for tab in tabs {
        let label = format!(" {} ({}) ", tab.label, tab.count);
        if tab.is_active {
            write!(
                out,
                "{}{}{}{label}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.tab_active_fg),
                Theme::bg(&theme.colors.tab_active_bg),
                Theme::reset()
            )?;
        } else {
            write!(out, "{}{label}{}", Theme::fg(&theme.colors.text_dim), Theme::reset())?;
        }
        write!(out, " ")?;
        used += width_of(&label) + 1;
    }
    writeln!(out, "{}", " ".repeat(cols.saturating_sub(used)))
}
