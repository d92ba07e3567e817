//! Storage layer for resource collections.
//!
//! This module provides the storage abstraction each resource manager owns and
//! the decoder that turns pasted JSON into candidate records.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `memory`: Process-local `Vec` backend
//! - `import`: JSON array decoder for bulk import

pub mod backend;
pub mod import;
pub mod memory;

pub use backend::Storage;
pub use memory::MemoryStore;
