//! Footer component renderer.
//!
//! This module renders the footer help bar with centered command hints.

use crate::ui::helpers::write_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use std::io::{self, Write};

/// Renders the footer help bar.
///
/// Displays command hints centered horizontally with dimmed styling. Pads
/// the line to fill the entire terminal width.
///
/// # Truncation
///
/// If the help text exceeds terminal width, it is truncated to fit. This
/// prevents layout corruption on narrow terminals.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_footer<W: Write>(out: &mut W, footer: &FooterInfo, theme: &Theme, cols: usize) -> io::Result<()> {
    let help_text: String = footer.keybindings.chars().take(cols).collect();

    write!(out, "{}", Theme::fg(&theme.colors.text_dim))?;
    write_centered(out, &help_text, cols)?;
    write!(out, "{}", Theme::reset())
}
