//! Category subsystem for mod management.
//!
//! Converts a flat, parent-pointer category map plus a mod collection into a
//! rooted, ordered, multi-level tree suitable for display. The computation is
//! pure: inputs are only read, the output tree owns all of its nodes, and
//! repeated builds from the same snapshot are deep-equal.

pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod grouping;
pub mod model;
pub mod node;
pub mod subtitle;
pub mod tree_traits;
pub mod util;

pub use builder::TreeBuilder;
pub use errors::{StateError, TreeError, TreeResult};
pub use grouping::{mods_by_category, ModsByCategory};
pub use model::{Category, CategoryId, CategoryMap, Mod, ModId, ModMap, StateSnapshot};
pub use node::{iter_preorder, CategoryTreeNode};
pub use subtitle::{generate_subtitle, Translate, Translations};

/// Build the category forest in one call.
///
/// Convenience wrapper around [`TreeBuilder`] for callers that do not need
/// orphan reporting.
pub fn build_category_tree(
    t: &dyn Translate,
    categories: &CategoryMap,
    mods: &ModMap,
) -> TreeResult<Vec<CategoryTreeNode>> {
    TreeBuilder::new().build(t, categories, mods)
}
