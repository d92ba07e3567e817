//! hrdesk: a hospital human resources desk for the terminal.
//!
//! hrdesk manages three in-memory HR resources (employees, departments and
//! leave records), each in its own tab:
//! - Multi-field filters (substring, exact and date-range predicates)
//! - Fuzzy quick search with match highlighting
//! - Pagination with 5, 10 or 25 rows per page
//! - Add/edit dialogs bound to each resource's schema
//! - Confirmed deletes and bulk JSON import
//!
//! Nothing is persisted: every session starts from the same seed data.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Console Shell (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and action dispatch               │
//! │  - Resource managers (one per tab)                  │
//! │  - Dialog controller, command parsing               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Engine Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (engine/)     │
//! │ - Rendering   │   │ - Store trait │   │ - Filtering   │
//! │ - Theming     │   │ - Memory store│   │ - Quick search│
//! │ - Components  │   │ - JSON import │   │ - Pagination  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Records, schemas, seed data (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing-subscriber fmt layer                     │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (records, schemas, errors)
//! - [`engine`]: Filter and pagination engines
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Resource store trait, in-memory store, import decoder
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! The binary reads an optional TOML file from `$HRDESK_CONFIG` or
//! `~/.config/hrdesk/config.toml`:
//!
//! ```toml
//! page_size = 10
//! initial_tab = "leave"
//! theme = "catppuccin-latte"
//! # theme_file = "~/.config/hrdesk/my-theme.toml"
//! trace_level = "debug"
//! # log_file = "/tmp/hrdesk.log"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use hrdesk::{handle_event, initialize, Action, Config, Event, Storage};
//!
//! let mut state = initialize(&Config::default());
//!
//! let events = vec![
//!     Event::OpenAdd,
//!     Event::SetField { name: "name".into(), value: "Dana Scully".into() },
//!     Event::SetField { name: "department".into(), value: "Radiology".into() },
//!     Event::SetField { name: "role".into(), value: "Radiologist".into() },
//!     Event::SetField { name: "status".into(), value: "active".into() },
//!     Event::SetField { name: "contact".into(), value: "dana@hospital.com".into() },
//!     Event::Save,
//! ];
//! for event in &events {
//!     let (_render, actions) = handle_event(&mut state, event)?;
//!     assert!(actions.iter().all(|a| !matches!(a, Action::Quit)));
//! }
//!
//! assert_eq!(state.employees.store().len(), 11);
//! # Ok::<(), hrdesk::HrdeskError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## One Manager per Resource
//!
//! Each tab owns a `ResourceManager` with its own store, criteria, page and
//! dialog. Switching tabs discards the draft of the tab being left.
//!
//! ## Injected Prompts
//!
//! The handler never blocks on the user. A delete returns a
//! `Action::Confirm`; the shell asks through a `Prompter` and feeds the answer
//! back as `Event::ConfirmDelete`.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes expensive operations (fuzzy match highlighting)

pub mod app;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod observability;
pub mod storage;

pub mod ui;

pub use app::{dispatch, handle_event, parse_command, Action, AppState, Dispatch, Event, Notice, Prompter};
pub use domain::{HrdeskError, Record, RecordId, ResourceKind, Result};
pub use engine::DEFAULT_PAGE_SIZE;
pub use storage::{MemoryStore, Storage};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::Path;

/// Desk configuration.
///
/// Values come from a TOML file or a string map; every key is optional.
///
/// # Example
///
/// ```toml
/// page_size = 10
/// initial_tab = "departments"
/// theme = "catppuccin-mocha"
/// theme_file = "/path/to/theme.toml"
/// trace_level = "debug"
/// log_file = "/tmp/hrdesk.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Rows per page for every tab.
    ///
    /// One of 5, 10 or 25. Default: 5
    pub page_size: usize,

    /// Tab shown at startup. Default: employees
    pub initial_tab: ResourceKind,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Default: `<data dir>/hrdesk.log`
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_tab: ResourceKind::Employee,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `page_size`: String → `usize`, one of 5/10/25 (falls back to 5)
    /// - `initial_tab`: resource name, singular or plural (falls back to employees)
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    /// - `log_file`: String → `Option<String>`
    ///
    /// Blank values count as absent. Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use hrdesk::{Config, ResourceKind};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "25".to_string());
    /// map.insert("initial_tab".to_string(), "Leave".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 25);
    /// assert_eq!(config.initial_tab, ResourceKind::Leave);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let page_size = get("page_size")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|size| engine::PAGE_SIZE_OPTIONS.contains(size))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let initial_tab = get("initial_tab")
            .and_then(|s| s.parse::<ResourceKind>().ok())
            .unwrap_or(ResourceKind::Employee);

        Self {
            page_size,
            initial_tab,
            theme_name: get("theme").map(String::from),
            theme_file: get("theme_file").map(String::from),
            trace_level: get("trace_level").map(String::from),
            log_file: get("log_file").map(String::from),
        }
    }

    /// Reads a TOML config file.
    ///
    /// Top-level scalar values are converted to strings and parsed by
    /// [`Config::from_map`]; tables and arrays are ignored.
    ///
    /// # Errors
    ///
    /// - [`HrdeskError::Io`] if the file cannot be read
    /// - [`HrdeskError::Config`] if the content is not valid TOML
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let table: toml::Table = contents
            .parse()
            .map_err(|e: toml::de::Error| HrdeskError::Config(e.message().to_string()))?;

        let map = table
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    toml::Value::Datetime(d) => d.to_string(),
                    toml::Value::Array(_) | toml::Value::Table(_) => {
                        tracing::debug!(key = %key, "ignoring non-scalar config value");
                        return None;
                    }
                };
                Some((key, text))
            })
            .collect();

        Ok(Self::from_map(&map))
    }
}

/// Builds the initial application state.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - Every tab seeded with the sample records
/// - The configured page size and initial tab
///
/// A theme that fails to load falls back to the default with a debug log.
///
/// # Example
///
/// ```rust
/// use hrdesk::{initialize, Config, ResourceKind};
///
/// let config = Config {
///     page_size: 10,
///     initial_tab: ResourceKind::Department,
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.active_tab, ResourceKind::Department);
/// assert_eq!(state.employees.page().size(), 10);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(page_size = config.page_size, tab = %config.initial_tab, "initializing hrdesk");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme);
    for kind in ResourceKind::ALL {
        if let Err(e) = state.manager_mut(kind).set_page_size(config.page_size) {
            tracing::warn!(error = %e, "keeping default page size");
        }
    }
    state.active_tab = config.initial_tab;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn from_map_falls_back_on_bad_values() {
        let config = Config::from_map(&map(&[("page_size", "7"), ("initial_tab", "payroll"), ("theme", "  ")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn from_map_reads_every_key() {
        let config = Config::from_map(&map(&[
            ("page_size", "10"),
            ("initial_tab", "departments"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "/t.toml"),
            ("trace_level", "debug"),
            ("log_file", "/tmp/x.log"),
        ]));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.initial_tab, ResourceKind::Department);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/t.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file.as_deref(), Some("/tmp/x.log"));
    }

    #[test]
    fn from_file_parses_toml_scalars() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 25\ninitial_tab = \"leave\"\ntrace_level = \"warn\"\n[extra]\nkey = 1").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.initial_tab, ResourceKind::Leave);
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn from_file_reports_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = = 5").unwrap();
        assert!(matches!(Config::from_file(file.path()), Err(HrdeskError::Config(_))));
        assert!(matches!(Config::from_file("/nonexistent/hrdesk.toml"), Err(HrdeskError::Io(_))));
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config {
            page_size: 25,
            initial_tab: ResourceKind::Leave,
            theme_name: Some("catppuccin-latte".into()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.active_tab, ResourceKind::Leave);
        assert_eq!(state.theme.name, "catppuccin-latte");
        for kind in ResourceKind::ALL {
            assert_eq!(state.manager(kind).page().size(), 25);
        }
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("solarized".into()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());

        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".into()),
            theme_name: Some("catppuccin-latte".into()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }
}
