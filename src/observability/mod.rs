//! Structured logging to a rotating file.
//!
//! The desk owns the terminal, so log output never goes to stdout or stderr.
//! Events from the `tracing` macros spread through the crate are formatted by
//! a `tracing-subscriber` fmt layer and appended to `hrdesk.log` in the data
//! directory.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer (no ANSI) → FileWriter → hrdesk.log
//! ```
//!
//! # Features
//!
//! - **File Sink**: `~/.local/share/hrdesk/hrdesk.log`, or `log_file` from the config
//! - **Automatic Rotation**: Files rotate at 10 MiB with 3-backup retention
//! - **Filtering**: Any `EnvFilter` directive string
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `trace_level` config option
//! 2. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early, before the first event is handled:
//!
//! ```rust
//! use hrdesk::observability::init_tracing;
//! use hrdesk::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("desk initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{FileWriter, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, log_path, LOG_FILE_NAME};
