//! Flattens the raw catalog document into an ordered entry collection.
//!
//! Traversal order is fixed: creative assets before AI tools, subgroups in
//! document key order, entries in array order. Ids are synthesized as
//! `<group-prefix>_<counter>` with a single counter across the whole
//! traversal, so ids are globally unique within one pass and the same
//! document always normalizes to the same collection.

use artstack_core::{translate_description, CategoryMain, Entry, RawCatalogDocument, RawEntry, SubgroupMap};
use tracing::debug;

/// Flatten the raw document into normalized entries.
///
/// This layer does no validation: records with missing fields come through
/// with empty strings and surface downstream as empty display values.
pub fn normalize(doc: &RawCatalogDocument) -> Vec<Entry> {
    let mut entries = Vec::new();
    let counter = collect_group(
        &mut entries,
        &doc.categories.creative_assets,
        CategoryMain::CreativeAssets,
        1,
    );
    collect_group(&mut entries, &doc.categories.ai_tools, CategoryMain::AiTools, counter);

    debug!(
        subsystem = "catalog",
        op = "normalize",
        entry_count = entries.len(),
    );
    entries
}

/// Append one top-level group's entries, threading the id counter through
/// explicitly. Returns the counter value for the next group.
fn collect_group(
    entries: &mut Vec<Entry>,
    subgroups: &SubgroupMap,
    group: CategoryMain,
    mut counter: u64,
) -> u64 {
    for (subcategory, records) in subgroups {
        for raw in records {
            entries.push(normalize_entry(raw, group, subcategory, counter));
            counter += 1;
        }
    }
    counter
}

fn normalize_entry(raw: &RawEntry, group: CategoryMain, subcategory: &str, counter: u64) -> Entry {
    Entry {
        id: format!("{}_{}", group.id_prefix(), counter),
        name: raw.name.clone(),
        entry_type: raw.entry_type.clone(),
        tags: raw.tags.clone(),
        description: translate_description(&raw.description).to_string(),
        source_url: raw.source_url.clone(),
        license_type: raw.license_type.clone(),
        popularity_score: raw.popularity_score,
        platform: raw.platform.clone(),
        thumbnail_url: raw.thumbnail_url.clone(),
        category_main: group,
        subcategory: subcategory.to_string(),
    }
}
