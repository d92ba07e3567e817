//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! runtime executes them in order against a [`Prompter`](crate::app::prompt::Prompter).
//! Actions are the only way the core asks for user interaction, so the handler
//! itself stays free of I/O.
//!
//! # Example
//!
//! ```rust
//! use hrdesk::app::Action;
//! use hrdesk::app::prompt::Notice;
//!
//! let actions = vec![
//!     Action::Confirm { message: "Are you sure you want to delete this item?".into() },
//!     Action::Notify(Notice::success("Record deleted")),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::app::prompt::Notice;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Asks the user a yes/no question.
    ///
    /// The runtime answers by sending [`Event::ConfirmDelete`](crate::app::Event::ConfirmDelete)
    /// back through the handler.
    Confirm {
        /// Question shown to the user.
        message: String,
    },

    /// Shows a notice (success, warning, or a recovered error).
    Notify(Notice),

    /// Ends the session.
    Quit,
}
