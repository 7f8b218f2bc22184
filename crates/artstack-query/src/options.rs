//! Derived option lists for filter pickers.

use artstack_core::{Entry, FilterOptions};
use std::collections::HashSet;

/// Collect the distinct filter values observed across all entries, in
/// first-seen order.
///
/// Always compute this over the full unfiltered collection, not the
/// currently filtered view, so users can broaden their filters from any
/// state.
pub fn filter_options(entries: &[Entry]) -> FilterOptions {
    let mut options = FilterOptions::default();
    let mut seen_categories = HashSet::new();
    let mut seen_types = HashSet::new();
    let mut seen_licenses = HashSet::new();
    let mut seen_platforms = HashSet::new();
    let mut seen_tags = HashSet::new();

    for entry in entries {
        push_distinct(&mut options.categories, &mut seen_categories, &entry.subcategory);
        push_distinct(&mut options.types, &mut seen_types, &entry.entry_type);
        push_distinct(&mut options.licenses, &mut seen_licenses, &entry.license_type);
        push_distinct(&mut options.platforms, &mut seen_platforms, &entry.platform);
        for tag in &entry.tags {
            push_distinct(&mut options.tags, &mut seen_tags, tag);
        }
    }
    options
}

fn push_distinct(values: &mut Vec<String>, seen: &mut HashSet<String>, value: &str) {
    if seen.insert(value.to_string()) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artstack_core::CategoryMain;

    fn entry(subcategory: &str, entry_type: &str, license: &str, platform: &str, tags: &[&str]) -> Entry {
        Entry {
            id: String::new(),
            name: String::new(),
            entry_type: entry_type.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: String::new(),
            source_url: String::new(),
            license_type: license.to_string(),
            popularity_score: 0,
            platform: platform.to_string(),
            thumbnail_url: String::new(),
            category_main: CategoryMain::CreativeAssets,
            subcategory: subcategory.to_string(),
        }
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let entries = vec![
            entry("fonts", "font", "OFL", "web", &["sans", "modern"]),
            entry("fonts", "font", "commercial", "desktop", &["serif", "sans"]),
            entry("ai_video_tools", "tool", "freemium", "web", &["ai"]),
        ];
        let options = filter_options(&entries);

        assert_eq!(options.categories, ["fonts", "ai_video_tools"]);
        assert_eq!(options.types, ["font", "tool"]);
        assert_eq!(options.licenses, ["OFL", "commercial", "freemium"]);
        assert_eq!(options.platforms, ["web", "desktop"]);
        assert_eq!(options.tags, ["sans", "modern", "serif", "ai"]);
    }

    #[test]
    fn test_empty_collection() {
        let options = filter_options(&[]);
        assert!(options.categories.is_empty());
        assert!(options.tags.is_empty());
    }

    #[test]
    fn test_empty_strings_are_still_values() {
        // Malformed entries surface their empty fields as picker values
        // rather than being dropped; the layer above decides presentation.
        let entries = vec![entry("fonts", "", "OFL", "web", &[])];
        let options = filter_options(&entries);
        assert_eq!(options.types, [""]);
    }
}
