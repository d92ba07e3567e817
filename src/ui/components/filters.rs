//! Filter box component renderer.
//!
//! This module renders the bordered box holding the active tab's filter
//! values and its quick-search query.

use crate::ui::helpers::width_of;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;
use std::io::{self, Write};

/// Horizontal margin for the filter box (spaces on left and right).
const FILTER_BOX_MARGIN: usize = 2;

/// Placeholder for a filter with no value.
const UNSET: &str = "-";

/// Renders the filter box.
///
/// # Layout
///
/// ```text
/// [margin] ┌───────────────────────────────────────┐ [margin]
/// [margin] │ Name: -  Department: Nursing  Role: - │ [margin]
/// [margin] │ Search: -                             │ [margin]
/// [margin] └───────────────────────────────────────┘ [margin]
/// ```
///
/// The box width is `cols - 2 * FILTER_BOX_MARGIN`. Content longer than the
/// inner width is cut at the border.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_filter_box<W: Write>(out: &mut W, filters: &FilterBarInfo, theme: &Theme, cols: usize) -> io::Result<()> {
    let box_width = cols.saturating_sub(FILTER_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(FILTER_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.filter_border);

    writeln!(out, "{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset())?;

    let criteria = filters
        .entries
        .iter()
        .map(|e| format!("{}: {}", e.label, or_unset(&e.value)))
        .collect::<Vec<_>>()
        .join("  ");
    let search = format!("Search: {}", or_unset(&filters.quick_search));

    for line in [criteria, search] {
        let content: String = format!(" {line}").chars().take(inner_width).collect();
        let padding = inner_width.saturating_sub(width_of(&content));
        writeln!(
            out,
            "{margin}{border}│{}{content}{}{border}│{}",
            Theme::fg(&theme.colors.text_normal),
            " ".repeat(padding),
            Theme::reset()
        )?;
    }

    writeln!(out, "{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset())
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        UNSET
    } else {
        value
    }
}
