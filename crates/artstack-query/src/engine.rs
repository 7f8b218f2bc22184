//! The filter and sort pipeline.
//!
//! Filtering is a chain of independent AND-combined predicates; sorting is
//! a stable sort with a deterministic tie-break, so identical inputs always
//! produce identical orderings regardless of the input order. The engine
//! never mutates the source collection — it clones the surviving entries
//! into a fresh result vector.

use crate::spec::{QuerySpec, SortBy, SortOrder};
use crate::text::fold_case;
use artstack_core::Entry;
use std::cmp::Ordering;
use tracing::debug;

/// Filter and sort entries per the spec.
pub fn query(entries: &[Entry], spec: &QuerySpec) -> Vec<Entry> {
    let mut results: Vec<Entry> = entries
        .iter()
        .filter(|e| matches(e, spec))
        .cloned()
        .collect();

    sort_entries(&mut results, spec.sort_by, spec.sort_order);

    debug!(
        subsystem = "query",
        op = "query",
        query = spec.text.as_deref().unwrap_or(""),
        entry_count = entries.len(),
        result_count = results.len(),
    );
    results
}

/// Whether a single entry satisfies every predicate in the spec.
pub fn matches(entry: &Entry, spec: &QuerySpec) -> bool {
    matches_text(entry, spec.text.as_deref())
        && matches_exact(&entry.subcategory, spec.category.as_deref())
        && matches_exact(&entry.entry_type, spec.entry_type.as_deref())
        && matches_exact(&entry.license_type, spec.license.as_deref())
        && matches_exact(&entry.platform, spec.platform.as_deref())
        && matches_tags(entry, &spec.tags)
}

/// Case-insensitive substring over name, description, tags, and platform.
fn matches_text(entry: &Entry, text: Option<&str>) -> bool {
    let needle = match text {
        Some(t) if !t.trim().is_empty() => fold_case(t),
        _ => return true,
    };
    let haystack = fold_case(&format!(
        "{} {} {} {}",
        entry.name,
        entry.description,
        entry.tags.join(" "),
        entry.platform
    ));
    haystack.contains(&needle)
}

/// Exact case-sensitive equality; absent filter passes.
fn matches_exact(value: &str, wanted: Option<&str>) -> bool {
    wanted.map_or(true, |w| value == w)
}

/// Every requested tag must be a case-insensitive substring of at least
/// one entry tag (AND across requested tags).
fn matches_tags(entry: &Entry, wanted: &[String]) -> bool {
    wanted.iter().all(|tag| {
        let needle = fold_case(tag);
        entry.tags.iter().any(|t| fold_case(t).contains(&needle))
    })
}

/// Stable sort with a fully deterministic order.
pub fn sort_entries(entries: &mut [Entry], sort_by: SortBy, sort_order: SortOrder) {
    entries.sort_by(|a, b| {
        let ordering = compare(a, b, sort_by);
        match (sort_by, sort_order) {
            // Popularity's natural direction is "descending" (higher
            // score first); name's is "ascending". The opposite order
            // value inverts the entire comparison, tie-break included.
            (SortBy::Popularity | SortBy::Recency, SortOrder::Ascending) => ordering.reverse(),
            (SortBy::Name, SortOrder::Descending) => ordering.reverse(),
            _ => ordering,
        }
    });
}

fn compare(a: &Entry, b: &Entry, sort_by: SortBy) -> Ordering {
    match sort_by {
        // Recency has no backing field in the data; it is defined to
        // order exactly like popularity.
        SortBy::Popularity | SortBy::Recency => b
            .popularity_score
            .cmp(&a.popularity_score)
            .then_with(|| fold_case(&a.name).cmp(&fold_case(&b.name))),
        SortBy::Name => fold_case(&a.name).cmp(&fold_case(&b.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artstack_core::CategoryMain;

    fn entry(name: &str, score: u32) -> Entry {
        Entry {
            id: format!("ca_{}", name.len()),
            name: name.to_string(),
            entry_type: "font".to_string(),
            tags: vec!["sans".to_string()],
            description: String::new(),
            source_url: String::new(),
            license_type: "OFL".to_string(),
            popularity_score: score,
            platform: "web".to_string(),
            thumbnail_url: String::new(),
            category_main: CategoryMain::CreativeAssets,
            subcategory: "fonts".to_string(),
        }
    }

    fn clipgen() -> Entry {
        Entry {
            id: "ai_2".to_string(),
            name: "ClipGen".to_string(),
            entry_type: "tool".to_string(),
            tags: vec!["video".to_string(), "ai".to_string()],
            description: "AI video editor".to_string(),
            source_url: String::new(),
            license_type: "freemium".to_string(),
            popularity_score: 95,
            platform: "web".to_string(),
            thumbnail_url: String::new(),
            category_main: CategoryMain::AiTools,
            subcategory: "ai_video_tools".to_string(),
        }
    }

    #[test]
    fn test_empty_spec_passes_everything() {
        let entries = vec![entry("Inter", 80), clipgen()];
        let results = query(&entries, &QuerySpec::new());
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let entries = vec![entry("Inter", 80), clipgen()];
        let results = query(&entries, &QuerySpec::new().with_text("CLIP"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "ClipGen");
    }

    #[test]
    fn test_text_matches_description_tags_platform() {
        let entries = vec![clipgen()];
        for needle in ["editor", "video", "web"] {
            assert_eq!(query(&entries, &QuerySpec::new().with_text(needle)).len(), 1);
        }
        assert!(query(&entries, &QuerySpec::new().with_text("blender")).is_empty());
    }

    #[test]
    fn test_whitespace_text_passes() {
        let entries = vec![entry("Inter", 80)];
        assert_eq!(query(&entries, &QuerySpec::new().with_text("  ")).len(), 1);
    }

    #[test]
    fn test_exact_filters_are_case_sensitive() {
        let entries = vec![clipgen()];
        assert_eq!(
            query(&entries, &QuerySpec::new().with_category("ai_video_tools")).len(),
            1
        );
        assert!(query(&entries, &QuerySpec::new().with_category("AI_VIDEO_TOOLS")).is_empty());
        assert_eq!(query(&entries, &QuerySpec::new().with_type("tool")).len(), 1);
        assert_eq!(
            query(&entries, &QuerySpec::new().with_license("freemium")).len(),
            1
        );
        assert_eq!(query(&entries, &QuerySpec::new().with_platform("web")).len(), 1);
        assert!(query(&entries, &QuerySpec::new().with_platform("desktop")).is_empty());
    }

    #[test]
    fn test_tag_filter_and_semantics() {
        let entries = vec![entry("Inter", 80), clipgen()];

        let one_tag = query(&entries, &QuerySpec::new().require_tag("ai"));
        assert_eq!(one_tag.len(), 1);
        assert_eq!(one_tag[0].name, "ClipGen");

        let both = QuerySpec::new()
            .require_tags(vec!["video".to_string(), "ai".to_string()]);
        assert_eq!(query(&entries, &both).len(), 1);

        let impossible = QuerySpec::new()
            .require_tags(vec!["ai".to_string(), "sans".to_string()]);
        assert!(query(&entries, &impossible).is_empty());

        assert!(query(&entries, &QuerySpec::new().require_tag("nonexistent")).is_empty());
    }

    #[test]
    fn test_tag_substring_match_case_insensitive() {
        let entries = vec![clipgen()];
        // "VID" is a case-insensitive substring of the "video" tag.
        assert_eq!(query(&entries, &QuerySpec::new().require_tag("VID")).len(), 1);
    }

    #[test]
    fn test_all_predicates_and_combined() {
        let entries = vec![entry("Inter", 80), clipgen()];
        let spec = QuerySpec::new()
            .with_text("clip")
            .with_category("ai_video_tools")
            .with_type("tool")
            .require_tag("ai");
        assert_eq!(query(&entries, &spec).len(), 1);

        // One failing predicate rejects despite all others passing.
        let spec = spec.with_license("OFL");
        assert!(query(&entries, &spec).is_empty());
    }

    #[test]
    fn test_popularity_sort_descending_default() {
        let entries = vec![entry("Inter", 80), clipgen(), entry("Lora", 90)];
        let results = query(&entries, &QuerySpec::new());
        let scores: Vec<u32> = results.iter().map(|e| e.popularity_score).collect();
        assert_eq!(scores, [95, 90, 80]);
        for pair in results.windows(2) {
            assert!(pair[0].popularity_score >= pair[1].popularity_score);
        }
    }

    #[test]
    fn test_popularity_tie_breaks_by_name() {
        let entries = vec![entry("Zilla", 80), entry("Arial", 80), entry("Lora", 80)];
        let results = query(&entries, &QuerySpec::new());
        let names: Vec<&str> = results.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Arial", "Lora", "Zilla"]);
    }

    #[test]
    fn test_popularity_ascending_inverts_fully() {
        let entries = vec![entry("Zilla", 80), entry("Arial", 80), entry("Lora", 60)];
        let spec = QuerySpec::new().sort_order(SortOrder::Ascending);
        let results = query(&entries, &spec);
        let names: Vec<&str> = results.iter().map(|e| e.name.as_str()).collect();
        // Lowest score first; equal scores tie-break name-descending.
        assert_eq!(names, ["Lora", "Zilla", "Arial"]);
    }

    #[test]
    fn test_name_sort_ascending() {
        let entries = vec![entry("lora", 1), entry("Arial", 2), entry("Zilla", 3)];
        let spec = QuerySpec::new()
            .sort_by(SortBy::Name)
            .sort_order(SortOrder::Ascending);
        let results = query(&entries, &spec);
        let names: Vec<&str> = results.iter().map(|e| e.name.as_str()).collect();
        // Casefolded comparison: "lora" sorts between "Arial" and "Zilla".
        assert_eq!(names, ["Arial", "lora", "Zilla"]);
    }

    #[test]
    fn test_name_sort_descending_inverts() {
        let entries = vec![entry("Arial", 1), entry("Zilla", 2)];
        let spec = QuerySpec::new()
            .sort_by(SortBy::Name)
            .sort_order(SortOrder::Descending);
        let results = query(&entries, &spec);
        assert_eq!(results[0].name, "Zilla");
    }

    #[test]
    fn test_recency_aliases_popularity() {
        let entries = vec![entry("Zilla", 80), entry("Arial", 80), clipgen()];
        let by_popularity = query(&entries, &QuerySpec::new().sort_by(SortBy::Popularity));
        let by_recency = query(&entries, &QuerySpec::new().sort_by(SortBy::Recency));
        assert_eq!(by_popularity, by_recency);
    }

    #[test]
    fn test_query_does_not_mutate_input() {
        let entries = vec![entry("Inter", 80), clipgen()];
        let before = entries.clone();
        let _ = query(&entries, &QuerySpec::new().with_text("clip"));
        assert_eq!(entries, before);
    }

    #[test]
    fn test_refiltering_after_empty_spec_is_idempotent() {
        let entries = vec![entry("Inter", 80), clipgen()];
        let spec = QuerySpec::new().with_text("clip");

        let direct = query(&entries, &spec);
        let via_empty = query(&query(&entries, &QuerySpec::new()), &spec);
        assert_eq!(direct, via_empty);
    }
}
