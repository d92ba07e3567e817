//! Infrastructure layer for platform concerns.
//!
//! This module resolves where the desk reads its configuration from and where
//! it writes its log file.
//!
//! # Modules
//!
//! - [`paths`]: Data/config directory resolution and tilde expansion
//!
//! # Examples
//!
//! ```
//! use hrdesk::infrastructure::{data_dir, expand_tilde};
//!
//! let log_file = data_dir().join("hrdesk.log");
//! assert!(log_file.ends_with("hrdesk.log"));
//! assert_eq!(expand_tilde("/etc/hrdesk.toml"), "/etc/hrdesk.toml");
//! ```

pub mod paths;

pub use paths::{config_dir, config_file, data_dir, expand_tilde};
