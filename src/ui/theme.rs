//! Color themes for the desk.
//!
//! A [`Theme`] maps every styled element of the screen to a hex color. Two
//! Catppuccin flavors ship inside the binary; any other palette can be loaded
//! from a TOML file with the same keys. Colors are emitted as 24-bit ANSI
//! escapes through [`Theme::fg`] and [`Theme::bg`].
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark, the default
//! - `catppuccin-latte`: light, with a tinted header bar
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#89b4fa"
//! # header_bg = "#dce0e8"
//! tab_active_fg = "#1e1e2e"
//! tab_active_bg = "#89b4fa"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! filter_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! summary_fg = "#94e2d5"
//! required_fg = "#f38ba8"
//! success_fg = "#a6e3a1"
//! warning_fg = "#f9e2af"
//! error_fg = "#f38ba8"
//! ```
//!
//! # Example
//!
//! ```rust
//! use hrdesk::ui::theme::Theme;
//!
//! let latte = Theme::from_name("catppuccin-latte").unwrap();
//! let title = format!("{}{}Staff{}", Theme::fg(&latte.colors.header_fg), Theme::bold(), Theme::reset());
//! assert!(title.ends_with("Staff\u{1b}[0m"));
//! ```

use crate::app::prompt::NoticeLevel;
use crate::domain::error::{HrdeskError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

const FALLBACK_RGB: (u8, u8, u8) = (255, 255, 255);

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for each styled element.
///
/// Only `header_bg` may be omitted; without it the title bar is unfilled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title and column headings.
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub tab_active_fg: String,
    pub tab_active_bg: String,

    pub text_normal: String,
    /// Footer hints, page position, inactive tabs.
    pub text_dim: String,

    /// Horizontal rules.
    pub border: String,

    pub filter_border: String,
    /// Quick-search match colors.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// "No employees found." and friends.
    pub empty_state_fg: String,

    /// Summary card values.
    pub summary_fg: String,

    /// Marker color of required and missing dialog fields.
    pub required_fg: String,

    pub success_fg: String,
    pub warning_fg: String,
    pub error_fg: String,
}

impl Theme {
    /// Returns a built-in theme, or `None` for an unknown name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };
        toml::from_str(source).ok()
    }

    /// Reads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::Theme`] when the file is unreadable or is not a
    /// complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| HrdeskError::Theme(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&text)
            .map_err(|e| HrdeskError::Theme(format!("invalid theme {}: {}", path.display(), e.message())))
    }

    /// Color used for a notice of the given level.
    #[must_use]
    pub fn notice_color(&self, level: NoticeLevel) -> &str {
        match level {
            NoticeLevel::Info => &self.colors.text_normal,
            NoticeLevel::Success => &self.colors.success_fg,
            NoticeLevel::Warning => &self.colors.warning_fg,
            NoticeLevel::Error => &self.colors.error_fg,
        }
    }

    /// Parses `#rrggbb` (the `#` is optional); anything else renders white.
    fn rgb(hex: &str) -> (u8, u8, u8) {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return FALLBACK_RGB;
        }

        u32::from_str_radix(digits, 16).map_or(FALLBACK_RGB, |packed| {
            let [_, r, g, b] = packed.to_be_bytes();
            (r, g, b)
        })
    }

    /// 24-bit foreground escape for a hex color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hrdesk::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Resets every attribute and color.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// The `catppuccin-mocha` built-in.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme file does not parse, which the theme tests
    /// rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in catppuccin-mocha theme parses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn latte_has_header_background() {
        assert!(Theme::from_name("catppuccin-latte").unwrap().colors.header_bg.is_some());
        assert!(Theme::default().colors.header_bg.is_none());
    }

    #[test]
    fn from_file_round_trips_and_reports_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = Theme { name: "custom".into(), ..Theme::default() };
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), custom);

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        broken.write_all(b"name = \"x\"\n").unwrap();
        assert!(matches!(Theme::from_file(broken.path()), Err(HrdeskError::Theme(_))));
        assert!(matches!(Theme::from_file("/nonexistent/theme.toml"), Err(HrdeskError::Theme(_))));
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#12345"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("zzzzzz"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn notice_colors_follow_level() {
        let theme = Theme::default();
        assert_eq!(theme.notice_color(NoticeLevel::Error), theme.colors.error_fg);
        assert_eq!(theme.notice_color(NoticeLevel::Success), theme.colors.success_fg);
    }
}
