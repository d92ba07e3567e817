//! Stateless table engines.
//!
//! - [`filter`]: narrows a collection by per-field criteria and quick search
//! - [`pagination`]: slices the narrowed view into pages
//!
//! Both operate on borrowed slices and never mutate the collection.

pub mod filter;
pub mod pagination;

pub use filter::{apply, matches, Criteria, QuickSearch};
pub use pagination::{page_count, paginate, PageState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
