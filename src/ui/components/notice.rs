//! Notice line renderer.

use crate::app::prompt::{Notice, NoticeLevel};
use crate::ui::theme::Theme;
use std::io::{self, Write};

/// Renders one notice, colored by level.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_notice<W: Write>(out: &mut W, notice: &Notice, theme: &Theme) -> io::Result<()> {
    let prefix = match notice.level {
        NoticeLevel::Info => "",
        NoticeLevel::Success => "✓ ",
        NoticeLevel::Warning => "! ",
        NoticeLevel::Error => "✗ ",
    };

    writeln!(
        out,
        "{}{prefix}{}{}",
        Theme::fg(theme.notice_color(notice.level)),
        notice.message,
        Theme::reset()
    )
}
