//! Groups the mod collection by assigned category.

use std::collections::HashMap;

use itertools::Itertools;
use tracing::instrument;

use crate::model::{CategoryId, ModId, ModMap};

/// Mod ids bucketed by category id. Categories nobody references have no entry.
pub type ModsByCategory = HashMap<CategoryId, Vec<ModId>>;

/// Bucket every categorized mod under its category id.
///
/// Mods without a category attribute are skipped silently; they are simply
/// "not categorized", never an error. Order within a bucket follows the
/// iteration order of the mod map.
#[instrument(level = "debug", skip(mods))]
pub fn mods_by_category(mods: &ModMap) -> ModsByCategory {
    mods.iter()
        .filter_map(|(mod_id, entry)| {
            entry
                .attributes
                .category
                .as_ref()
                .map(|category| (category.clone(), mod_id.clone()))
        })
        .into_group_map()
}
