//! Confirmation and notification boundary.
//!
//! Destructive operations ask a [`Prompter`] before mutating a store, and
//! outcomes are reported as [`Notice`]s. The core never talks to a terminal
//! directly; the runtime shell supplies the implementation.

use std::fmt;

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-visible message produced by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Yes/no confirmation and notice display supplied by the runtime.
///
/// # Examples
///
/// ```
/// use hrdesk::app::prompt::{Notice, Prompter};
///
/// struct AlwaysYes(Vec<Notice>);
///
/// impl Prompter for AlwaysYes {
///     fn confirm(&mut self, _message: &str) -> bool {
///         true
///     }
///
///     fn notify(&mut self, notice: &Notice) {
///         self.0.push(notice.clone());
///     }
/// }
/// ```
pub trait Prompter {
    /// Asks the user to confirm `message`; `false` aborts the operation.
    fn confirm(&mut self, message: &str) -> bool;

    /// Shows a notice to the user.
    fn notify(&mut self, notice: &Notice);
}
