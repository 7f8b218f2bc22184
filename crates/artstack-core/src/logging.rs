//! Structured logging field name constants for the artstack catalog.
//!
//! All crates use these constants for consistent structured logging fields
//! so log queries work the same across every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Catalog unusable for the session (load failure) |
//! | WARN  | Recoverable issue, fallback applied |
//! | INFO  | Lifecycle events (catalog loaded, config resolved) |
//! | DEBUG | Decision points (cache hit/miss, active predicates) |
//! | TRACE | Per-entry iteration during normalization and filtering |

/// Subsystem originating the log event.
/// Values: "catalog", "query", "service"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "load", "normalize", "query", "aggregate"
pub const OPERATION: &str = "op";

/// Free-text query string being evaluated.
pub const QUERY: &str = "query";

/// Number of entries produced by an operation.
pub const RESULT_COUNT: &str = "result_count";

/// Number of entries in the input collection.
pub const ENTRY_COUNT: &str = "entry_count";

/// Number of category summaries produced by aggregation.
pub const CATEGORY_COUNT: &str = "category_count";

/// Where the catalog document came from ("file", "http").
pub const SOURCE_KIND: &str = "source_kind";

/// Whether `load()` was answered from the process-wide cache.
pub const CACHE_HIT: &str = "cache_hit";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
