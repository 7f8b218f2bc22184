//! # artstack-query
//!
//! In-memory search, filter, sort, and pagination engine for the artstack
//! catalog.
//!
//! This crate provides:
//! - [`QuerySpec`], the combined free-text + filter + sort request shape
//! - [`query`], the AND-combined predicate pipeline with stable sorting
//! - [`paginate`], pure 1-based slicing over sorted results
//! - [`filter_options`], distinct picker values in first-seen order
//!
//! The engine is stateless and pure: it reads entry collections, allocates
//! derived ones, and retains nothing between calls.
//!
//! ## Example
//!
//! ```
//! use artstack_query::{paginate, query, QuerySpec};
//!
//! let entries: Vec<artstack_core::Entry> = Vec::new();
//! let results = query(&entries, &QuerySpec::new().with_text("font"));
//! let first_page = paginate(&results, 1, 24);
//! assert!(first_page.is_empty());
//! ```

pub mod engine;
pub mod options;
pub mod paginate;
pub mod spec;
pub mod text;

// Re-export core types
pub use artstack_core::*;

pub use engine::{matches, query, sort_entries};
pub use options::filter_options;
pub use paginate::paginate;
pub use spec::{QuerySpec, SortBy, SortOrder};
pub use text::fold_case;
