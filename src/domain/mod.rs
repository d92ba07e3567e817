//! Domain layer for the HR desk.
//!
//! This module contains the core domain types, independent of the terminal
//! presentation and of how records are stored.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Record and field value model
//! - [`schema`]: Resource kinds and their column/filter descriptors
//! - [`seed`]: Sample data every session starts from
//!
//! # Examples
//!
//! ```
//! use hrdesk::domain::{ResourceKind, Result};
//!
//! fn first_employee() -> Result<String> {
//!     let rows = hrdesk::domain::seed::records(ResourceKind::Employee);
//!     Ok(rows[0].text("name").unwrap_or_default().into_owned())
//! }
//! ```

pub mod error;
pub mod record;
pub mod schema;
pub mod seed;

pub use error::{HrdeskError, Result};
pub use record::{FieldValue, Fields, Record, RecordId};
pub use schema::{Predicate, ResourceKind, Schema};
