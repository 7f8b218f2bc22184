//! Groups normalized entries back into browsable category summaries.
//!
//! Summaries appear in first-seen traversal order, one per distinct
//! (top-level group, subgroup) pair that has at least one entry. Subgroups
//! present in the raw document but empty never reach this layer, since the
//! normalizer emits no entries for them. Summaries are recomputed on
//! demand and never cached apart from the entry collection itself.

use artstack_core::{
    subgroup_description, subgroup_image, subgroup_name, CategoryMain, CategorySummary, Entry,
};
use tracing::debug;

/// Group entries by subgroup into category summaries.
pub fn aggregate(entries: &[Entry]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();
    let mut seen: Vec<(CategoryMain, String)> = Vec::new();

    for entry in entries {
        let key = (entry.category_main, entry.subcategory.clone());
        let index = match seen.iter().position(|k| *k == key) {
            Some(i) => i,
            None => {
                seen.push(key);
                summaries.push(summary_shell(entry.category_main, &entry.subcategory));
                summaries.len() - 1
            }
        };
        summaries[index].items.push(entry.clone());
    }

    debug!(
        subsystem = "catalog",
        op = "aggregate",
        entry_count = entries.len(),
        category_count = summaries.len(),
    );
    summaries
}

fn summary_shell(group: CategoryMain, subcategory: &str) -> CategorySummary {
    CategorySummary {
        id: format!("{}_{}", group.group_id_prefix(), subcategory),
        name: subgroup_name(subcategory).to_string(),
        description: subgroup_description(subcategory).to_string(),
        image: subgroup_image(subcategory, group).to_string(),
        items: Vec::new(),
    }
}

/// URL-safe slug for a category display name: lowercase, non-alphanumerics
/// stripped, whitespace runs collapsed to single hyphens.
pub fn slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect();
    let mut out = String::with_capacity(kept.len());
    let mut last_hyphen = false;
    for c in kept.trim().chars() {
        if c == ' ' || c == '-' {
            if !last_hyphen {
                out.push('-');
                last_hyphen = true;
            }
        } else {
            out.push(c);
            last_hyphen = false;
        }
    }
    out.trim_matches('-').to_string()
}

/// Find the category whose display name slugifies to `wanted`.
pub fn category_by_slug(entries: &[Entry], wanted: &str) -> Option<CategorySummary> {
    aggregate(entries).into_iter().find(|c| slug(&c.name) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, group: CategoryMain, subcategory: &str) -> Entry {
        Entry {
            id: id.to_string(),
            name: name.to_string(),
            entry_type: String::new(),
            tags: Vec::new(),
            description: String::new(),
            source_url: String::new(),
            license_type: String::new(),
            popularity_score: 0,
            platform: String::new(),
            thumbnail_url: String::new(),
            category_main: group,
            subcategory: subcategory.to_string(),
        }
    }

    #[test]
    fn test_aggregate_first_seen_order() {
        let entries = vec![
            entry("ca_1", "Opener", CategoryMain::CreativeAssets, "video_templates"),
            entry("ca_2", "Inter", CategoryMain::CreativeAssets, "fonts"),
            entry("ca_3", "Lora", CategoryMain::CreativeAssets, "fonts"),
            entry("ai_4", "ClipGen", CategoryMain::AiTools, "ai_video_tools"),
        ];
        let summaries = aggregate(&entries);
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["creative_video_templates", "creative_fonts", "ai_ai_video_tools"]);
        assert_eq!(summaries[1].items.len(), 2);
    }

    #[test]
    fn test_aggregate_resolves_display_metadata() {
        let entries = vec![entry("ca_1", "Inter", CategoryMain::CreativeAssets, "fonts")];
        let summaries = aggregate(&entries);
        assert_eq!(summaries[0].name, "Fonts");
        assert_eq!(summaries[0].image, "/images/categories/fonts.jpg");
        assert!(!summaries[0].description.is_empty());
    }

    #[test]
    fn test_aggregate_unknown_subgroup_fallbacks() {
        let entries = vec![
            entry("ca_1", "Brush", CategoryMain::CreativeAssets, "brushes"),
            entry("ai_2", "Upscale", CategoryMain::AiTools, "ai_upscalers"),
        ];
        let summaries = aggregate(&entries);
        assert_eq!(summaries[0].name, "brushes");
        assert_eq!(summaries[0].description, "");
        assert_eq!(summaries[0].image, "/images/categories/default.jpg");
        assert_eq!(summaries[1].image, "/images/categories/ai-tools.png");
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_aggregate_keeps_entry_order_within_category() {
        let entries = vec![
            entry("ca_1", "Inter", CategoryMain::CreativeAssets, "fonts"),
            entry("ca_2", "Lora", CategoryMain::CreativeAssets, "fonts"),
        ];
        let summaries = aggregate(&entries);
        let names: Vec<&str> = summaries[0].items.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Inter", "Lora"]);
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("AI Video Tools"), "ai-video-tools");
        assert_eq!(slug("LUTs, Transitions & Overlays"), "luts-transitions-overlays");
        assert_eq!(slug("  Fonts  "), "fonts");
        assert_eq!(slug("3D Models"), "3d-models");
    }

    #[test]
    fn test_category_by_slug() {
        let entries = vec![
            entry("ca_1", "Inter", CategoryMain::CreativeAssets, "fonts"),
            entry("ai_2", "ClipGen", CategoryMain::AiTools, "ai_video_tools"),
        ];
        let found = category_by_slug(&entries, "ai-video-tools").unwrap();
        assert_eq!(found.id, "ai_ai_video_tools");
        assert!(category_by_slug(&entries, "no-such-category").is_none());
    }
}
