//! Summary card strip renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SummaryCard;
use std::io::{self, Write};

/// Renders the summary cards on one line, values emphasized.
///
/// Writes nothing when `cards` is empty.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_summary<W: Write>(out: &mut W, cards: &[SummaryCard], theme: &Theme) -> io::Result<()> {
    if cards.is_empty() {
        return Ok(());
    }

    for card in cards {
        write!(
            out,
            "  {}{}: {}{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            card.label,
            Theme::bold(),
            Theme::fg(&theme.colors.summary_fg),
            card.value,
            Theme::reset()
        )?;
    }
    writeln!(out)
}
