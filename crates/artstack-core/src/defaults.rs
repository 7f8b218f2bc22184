//! Centralized default constants for the artstack catalog.
//!
//! **This module is the single source of truth** for shared default values.
//! All crates should reference these constants instead of defining their
//! own magic numbers.

// =============================================================================
// CATALOG SOURCE
// =============================================================================

/// Default on-disk location of the catalog document, relative to the
/// working directory. Mirrors the web root layout the catalog ships with.
pub const CATALOG_PATH: &str = "public/database.json";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for browse/search result pages.
pub const PAGE_LIMIT: usize = 24;

/// Default number of entries returned by the popular-items shelf.
pub const POPULAR_LIMIT: usize = 12;

// =============================================================================
// CATEGORY IMAGES
// =============================================================================

/// Fallback category image for creative-asset subgroups without a
/// dedicated image in the static table.
pub const DEFAULT_CREATIVE_IMAGE: &str = "/images/categories/default.jpg";

/// Fallback category image for AI-tool subgroups.
pub const DEFAULT_AI_IMAGE: &str = "/images/categories/ai-tools.png";
