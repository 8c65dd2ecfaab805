//! Domain entities: categories, mods and the persisted application state.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{StateError, StateResult};

/// Unique key of a category in the category map.
pub type CategoryId = String;

/// Unique key of a mod in the mod collection.
pub type ModId = String;

/// A named grouping entity with an optional parent, forming a forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Display name, becomes the tree node title
    pub name: String,
    /// Parent category key, `None` for roots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<CategoryId>,
    /// Sibling sort key, ascending
    pub order: i64,
}

/// Flat category map as persisted by the hosting application.
/// `BTreeMap` keeps iteration deterministic, which fixes sibling tie-breaking.
pub type CategoryMap = BTreeMap<CategoryId, Category>;

/// Mod attributes relevant to categorization.
///
/// Mods carry many more attributes (version, endorsement state, install
/// path, ...); everything beyond `category` is preserved opaquely so a
/// snapshot can round-trip through this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModAttributes {
    /// Assigned category, at most one per mod
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// An installed mod as seen by the category subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mod {
    #[serde(default)]
    pub attributes: ModAttributes,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Mod collection keyed by mod id.
pub type ModMap = BTreeMap<ModId, Mod>;

/// Snapshot of the slice of application state this crate consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default)]
    pub categories: CategoryMap,
    #[serde(default)]
    pub mods: ModMap,
}

impl StateSnapshot {
    /// Load a snapshot from a JSON state file.
    pub fn load(path: &Path) -> StateResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| StateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StateError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
