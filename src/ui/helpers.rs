//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: screen clearing, padding, centering, and quick-search match
//! highlighting with proper ANSI escape sequence management.
//!
//! All widths are measured in characters, not bytes, so names with accents
//! keep their columns aligned.
//!
//! # Example
//!
//! ```rust
//! use hrdesk::ui::helpers::write_highlighted;
//! use hrdesk::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut out = Vec::new();
//! write_highlighted(&mut out, "Sophia Davis", &[(0, 6)], &theme)?;
//! assert!(String::from_utf8(out).unwrap().ends_with(" Davis"));
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::ui::theme::Theme;
use std::io::{self, Write};

/// Clears the screen and moves the cursor to the top-left corner.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\u{1b}[2J\u{1b}[H")
}

/// Character count of `text`.
#[must_use]
pub fn width_of(text: &str) -> usize {
    text.chars().count()
}

/// Writes `text` left-aligned in a field of `width` characters.
///
/// Longer text is written as-is; callers truncate beforehand.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_padded<W: Write>(out: &mut W, text: &str, width: usize) -> io::Result<()> {
    write!(out, "{text}{}", " ".repeat(width.saturating_sub(width_of(text))))
}

/// Writes `text` centered in `cols` columns, followed by a newline.
///
/// Padding is split evenly on both sides. If the width cannot evenly divide,
/// the right padding is slightly larger.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_centered<W: Write>(out: &mut W, text: &str, cols: usize) -> io::Result<()> {
    let len = width_of(text).min(cols);
    let padding = cols.saturating_sub(len) / 2;
    write!(out, "{}", " ".repeat(padding))?;
    write_padded(out, text, cols.saturating_sub(padding))?;
    writeln!(out)
}

/// Writes a horizontal rule of `cols` characters in `color`.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_border<W: Write>(out: &mut W, color: &str, cols: usize) -> io::Result<()> {
    writeln!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset())
}

/// Writes text with highlighted character ranges for quick-search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. After each highlighted section the normal text color is
/// restored.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
///
/// Ranges that fall outside `text` are ignored.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_highlighted<W: Write>(
    out: &mut W,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
) -> io::Result<()> {
    if ranges.is_empty() {
        return write!(out, "{text}");
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        write!(out, "{normal_section}")?;

        let highlighted_section: String = chars[start..end].iter().collect();
        write!(
            out,
            "{}{}{highlighted_section}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset(),
            Theme::fg(&theme.colors.text_normal),
        )?;

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        write!(out, "{remaining}")?;
    }
    Ok(())
}
