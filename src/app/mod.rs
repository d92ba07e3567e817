//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! console runtime (main.rs) and the domain/engine/storage layers. It
//! implements the event-driven architecture that powers the interactive desk.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Command → Event → Event Handler → State Mutations → Actions → Prompter
//!                        ↑                                         ↓
//!                        └────────── Confirmation answers ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`command`]: Console line parsing into events
//! - [`dialog`]: Add/edit dialog state machine owning the draft record
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`manager`]: Per-tab composition of store, filters, pagination and dialog
//! - [`modes`]: Dialog mode type
//! - [`prompt`]: Injected confirmation and notification interface
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use hrdesk::app::{handle_event, AppState, Event};
//! use hrdesk::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, _actions) = handle_event(&mut state, &Event::OpenAdd)?;
//! assert!(render);
//! # Ok::<(), hrdesk::HrdeskError>(())
//! ```

pub mod actions;
pub mod command;
pub mod dialog;
pub mod handler;
pub mod manager;
pub mod modes;
pub mod prompt;
pub mod state;

pub use actions::Action;
pub use command::parse_command;
pub use handler::{dispatch, handle_event, Dispatch, Event};
pub use manager::ResourceManager;
pub use modes::DialogMode;
pub use prompt::{Notice, NoticeLevel, Prompter};
pub use state::AppState;
