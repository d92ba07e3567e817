//! Empty state component renderer.
//!
//! This module renders the message displayed in place of table rows when the
//! filtered view of the active tab is empty.

use crate::ui::helpers::write_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// Renders the empty state message.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// [blank line]
/// ```
///
/// Both lines are horizontally centered. The message uses the `empty_state_fg`
/// theme color, and the subtitle uses `text_dim` with dim styling.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_empty_state<W: Write>(out: &mut W, empty: &EmptyState, theme: &Theme, cols: usize) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", Theme::fg(&theme.colors.empty_state_fg))?;
    write_centered(out, &empty.message, cols)?;
    write!(out, "{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))?;
    write_centered(out, &empty.subtitle, cols)?;
    writeln!(out, "{}", Theme::reset())
}
