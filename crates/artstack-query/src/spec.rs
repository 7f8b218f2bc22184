//! Query specification: free text, field filters, and sort choice.

use serde::{Deserialize, Serialize};

/// Primary sort key for query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Popularity score, higher first under the default order.
    #[default]
    Popularity,
    /// Entry name, casefolded.
    Name,
    /// Defined alias of [`SortBy::Popularity`], tie-break included: the
    /// catalog has no timestamp field, so popularity stands in for
    /// recency. If a true timestamp ever lands in the data, route it here
    /// and keep this fallback for documents without one.
    Recency,
}

/// Direction of the sort. Each sort key has a natural direction
/// (popularity: higher first under `Descending`; name: A-Z under
/// `Ascending`); the opposite value inverts the entire comparison,
/// tie-breaks included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// The combined free-text + filter + sort request shape.
///
/// All predicates are independent and AND-combined; an absent field is a
/// pass-through. The engine holds no state between calls, so a fresh spec
/// can be submitted on every input change.
///
/// # Example
///
/// ```
/// use artstack_query::QuerySpec;
///
/// let spec = QuerySpec::new()
///     .with_text("clip")
///     .with_category("ai_video_tools")
///     .require_tag("ai");
///
/// assert!(!spec.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuerySpec {
    /// Free-text query; case-insensitive substring over name, description,
    /// tags, and platform. Empty or whitespace-only text passes everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Exact subgroup match (case-sensitive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Exact entry-type match (case-sensitive).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,

    /// Exact license match (case-sensitive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Exact platform match (case-sensitive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Required tags (AND logic): every requested tag must be a
    /// case-insensitive substring of at least one entry tag.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub sort_by: SortBy,

    #[serde(default)]
    pub sort_order: SortOrder,
}

impl QuerySpec {
    /// Create a new empty spec (matches everything, default sort).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Require an exact subgroup.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Require an exact entry type.
    pub fn with_type(mut self, entry_type: impl Into<String>) -> Self {
        self.entry_type = Some(entry_type.into());
        self
    }

    /// Require an exact license.
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    /// Require an exact platform.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Add a required tag (AND logic with other required tags).
    pub fn require_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple required tags (AND logic).
    pub fn require_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Set the sort key.
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Set the sort direction.
    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Check if the spec filters nothing (whitespace-only text counts as
    /// absent). Sort choices do not make a spec non-empty.
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, |t| t.trim().is_empty())
            && self.category.is_none()
            && self.entry_type.is_none()
            && self.license.is_none()
            && self.platform.is_none()
            && self.tags.is_empty()
    }
}
