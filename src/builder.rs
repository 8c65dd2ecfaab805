//! Tree builder: turns the flat category map into a display-ready forest.

use std::collections::{HashMap, HashSet};

use tracing::{instrument, warn};

use crate::errors::{TreeError, TreeResult};
use crate::grouping::{mods_by_category, ModsByCategory};
use crate::model::{CategoryId, CategoryMap, ModMap};
use crate::node::CategoryTreeNode;
use crate::subtitle::{generate_subtitle, Translate};

/// Constructs category trees from the flat parent-pointer map.
///
/// The map is indexed once into an adjacency table instead of re-filtering
/// all categories at every level, and cyclic parent chains are rejected up
/// front instead of recursing forever.
pub struct TreeBuilder {
    children_of: HashMap<CategoryId, Vec<CategoryId>>,
    roots: Vec<CategoryId>,
    orphans: Vec<CategoryId>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            children_of: HashMap::new(),
            roots: Vec::new(),
            orphans: Vec::new(),
        }
    }

    /// Build the ordered forest of root-level tree nodes.
    ///
    /// Groups `mods` by category attribute, then walks the hierarchy from
    /// the roots. Each invocation recomputes from the current snapshot; the
    /// result shares nothing with the inputs.
    #[instrument(level = "debug", skip_all)]
    pub fn build(
        &mut self,
        t: &dyn Translate,
        categories: &CategoryMap,
        mods: &ModMap,
    ) -> TreeResult<Vec<CategoryTreeNode>> {
        let grouped = mods_by_category(mods);
        self.build_grouped(t, categories, &grouped)
    }

    /// Like [`build`](Self::build), for callers that already grouped the mods.
    #[instrument(level = "debug", skip_all)]
    pub fn build_grouped(
        &mut self,
        t: &dyn Translate,
        categories: &CategoryMap,
        mods: &ModsByCategory,
    ) -> TreeResult<Vec<CategoryTreeNode>> {
        self.index(categories);
        self.ensure_acyclic(categories)?;

        self.roots
            .clone()
            .iter()
            .map(|root| self.build_node(t, categories, mods, root))
            .collect()
    }

    /// Categories dropped from the last build because their declared parent
    /// id does not exist in the map. Their descendants are dropped with them.
    pub fn orphans(&self) -> &[CategoryId] {
        &self.orphans
    }

    /// Index the category map once: adjacency table plus sorted root list.
    /// Sibling order is ascending by `order`; the sort is stable, so ties
    /// keep the map's lexicographic id order.
    fn index(&mut self, categories: &CategoryMap) {
        self.children_of.clear();
        self.roots.clear();
        self.orphans.clear();

        for (id, category) in categories {
            match &category.parent_category {
                None => self.roots.push(id.clone()),
                Some(parent) if categories.contains_key(parent) => {
                    self.children_of
                        .entry(parent.clone())
                        .or_default()
                        .push(id.clone());
                }
                Some(parent) => {
                    warn!(category = %id, parent = %parent, "dropping category with missing parent");
                    self.orphans.push(id.clone());
                }
            }
        }

        self.roots.sort_by_key(|id| categories[id].order);
        for children in self.children_of.values_mut() {
            children.sort_by_key(|id| categories[id].order);
        }
    }

    /// Reject cyclic parent chains before walking the hierarchy.
    ///
    /// Follows each category's parent chain with a per-walk path set;
    /// ids proven acyclic are memoized, so the whole pass is O(n).
    fn ensure_acyclic(&self, categories: &CategoryMap) -> TreeResult<()> {
        let mut acyclic: HashSet<&CategoryId> = HashSet::with_capacity(categories.len());

        for start in categories.keys() {
            if acyclic.contains(start) {
                continue;
            }

            let mut path: Vec<&CategoryId> = Vec::new();
            let mut on_path: HashSet<&CategoryId> = HashSet::new();
            let mut current = start;

            loop {
                if acyclic.contains(current) {
                    break;
                }
                if !on_path.insert(current) {
                    return Err(TreeError::CycleDetected(current.clone()));
                }
                path.push(current);

                match categories
                    .get(current)
                    .and_then(|c| c.parent_category.as_ref())
                {
                    Some(parent) if categories.contains_key(parent) => current = parent,
                    // Root or dangling parent ends the chain
                    _ => break,
                }
            }

            acyclic.extend(path);
        }

        Ok(())
    }

    fn build_node(
        &self,
        t: &dyn Translate,
        categories: &CategoryMap,
        mods: &ModsByCategory,
        id: &CategoryId,
    ) -> TreeResult<CategoryTreeNode> {
        let category = categories
            .get(id)
            .ok_or_else(|| TreeError::InternalError(format!("unindexed category: {id}")))?;

        let children = self
            .children_of
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|child| self.build_node(t, categories, mods, child))
            .collect::<TreeResult<Vec<_>>>()?;

        Ok(CategoryTreeNode {
            category_id: id.clone(),
            title: category.name.clone(),
            subtitle: generate_subtitle(t, id, mods),
            expanded: false,
            mod_count: mods.get(id).map_or(0, Vec::len),
            parent_id: category.parent_category.clone(),
            order: category.order,
            children,
        })
    }
}
