//! Core data models for the artstack catalog.
//!
//! These types are shared across all artstack crates and represent the raw
//! catalog document as loaded from disk or HTTP, and the normalized entries
//! derived from it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// RAW DOCUMENT
// =============================================================================

/// One record as it appears in the raw catalog document.
///
/// Every string field defaults to empty: malformed records are passed
/// through as-is and surface downstream as empty display values. The
/// loader flattens structure, it does not validate content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawEntry {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub entry_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub license_type: String,
    /// Ranking signal, 0-100 by convention; not enforced.
    #[serde(default)]
    pub popularity_score: u32,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub thumbnail_url: String,
    /// Optional OpenGraph image harvested offline; not used by the query layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_image_url: Option<String>,
}

/// Subgroup name -> ordered entry list. `IndexMap` keeps the document's
/// key order, which the normalizer's traversal contract depends on.
pub type SubgroupMap = IndexMap<String, Vec<RawEntry>>;

/// The two top-level groups of the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawGroups {
    #[serde(default)]
    pub creative_assets: SubgroupMap,
    #[serde(default)]
    pub ai_tools: SubgroupMap,
}

/// The catalog document as loaded. Immutable once cached by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawCatalogDocument {
    pub categories: RawGroups,
}

// =============================================================================
// PROVENANCE
// =============================================================================

/// Which top-level group an entry came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMain {
    #[default]
    CreativeAssets,
    AiTools,
}

impl CategoryMain {
    /// Prefix used for synthesized entry ids (`ca_1`, `ai_2`, ...).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::CreativeAssets => "ca",
            Self::AiTools => "ai",
        }
    }

    /// Prefix used for category-summary ids (`creative_fonts`, `ai_ai_video_tools`).
    pub fn group_id_prefix(&self) -> &'static str {
        match self {
            Self::CreativeAssets => "creative",
            Self::AiTools => "ai",
        }
    }
}

impl std::fmt::Display for CategoryMain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreativeAssets => write!(f, "creative_assets"),
            Self::AiTools => write!(f, "ai_tools"),
        }
    }
}

impl std::str::FromStr for CategoryMain {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "creative_assets" => Ok(Self::CreativeAssets),
            "ai_tools" => Ok(Self::AiTools),
            _ => Err(format!("Invalid top-level group: {}", s)),
        }
    }
}

// =============================================================================
// NORMALIZED ENTRY
// =============================================================================

/// One normalized catalog item (an asset or AI tool).
///
/// Ids are synthesized per normalization pass (`<prefix>_<counter>` with a
/// single counter across the whole traversal) and are stable only within
/// one load of the document. Entries are immutable after normalization;
/// the query engine only produces derived views of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub tags: Vec<String>,
    pub description: String,
    pub source_url: String,
    pub license_type: String,
    pub popularity_score: u32,
    pub platform: String,
    pub thumbnail_url: String,
    pub category_main: CategoryMain,
    pub subcategory: String,
}

// =============================================================================
// CATEGORY SUMMARY
// =============================================================================

/// One browsable category: a subgroup with its member entries and display
/// metadata resolved from the static tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub items: Vec<Entry>,
}

// =============================================================================
// FILTER OPTIONS
// =============================================================================

/// Distinct values observed across the full entry collection, in
/// first-seen order. Computed from the unfiltered collection so pickers
/// always let the user broaden a filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub types: Vec<String>,
    pub licenses: Vec<String>,
    pub platforms: Vec<String>,
    pub tags: Vec<String>,
}
