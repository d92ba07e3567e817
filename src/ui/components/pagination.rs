//! Pagination control renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;
use std::io::{self, Write};

/// Renders the pagination line.
///
/// ```text
/// Page 1 of 2  |  10 rows  |  Rows per page: [5] 10 25
/// ```
///
/// Page numbers are shown 1-based; the current page size is bracketed.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_pagination<W: Write>(out: &mut W, info: &PaginationInfo, theme: &Theme) -> io::Result<()> {
    let sizes = info
        .size_options
        .iter()
        .map(|&size| {
            if size == info.page_size {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let noun = if info.total == 1 { "row" } else { "rows" };

    writeln!(
        out,
        "{}Page {} of {}  |  {} {noun}  |  Rows per page: {sizes}{}",
        Theme::fg(&theme.colors.text_dim),
        info.page_index + 1,
        info.page_count,
        info.total,
        Theme::reset()
    )
}
