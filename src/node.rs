//! Display-ready tree nodes produced by the builder.

use serde::{Deserialize, Serialize};

use crate::model::CategoryId;

/// One category rendered for display: counts, ordering and nested children.
///
/// The tree owns its nodes outright; nothing aliases the input maps, so a
/// rebuilt tree can be compared or diffed against an earlier one directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTreeNode {
    pub category_id: CategoryId,
    /// Category name
    pub title: String,
    /// Localized caption, e.g. "3 mods"
    pub subtitle: String,
    /// Always initialized collapsed; the view layer toggles this
    pub expanded: bool,
    /// Number of mods directly in this category
    pub mod_count: usize,
    pub parent_id: Option<CategoryId>,
    pub order: i64,
    pub children: Vec<CategoryTreeNode>,
}

impl CategoryTreeNode {
    /// Height of the subtree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(CategoryTreeNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Ids of all leaf categories below (and including) this node.
    pub fn leaf_ids(&self) -> Vec<CategoryId> {
        if self.children.is_empty() {
            vec![self.category_id.clone()]
        } else {
            let mut leaves = Vec::new();
            for child in &self.children {
                leaves.extend(child.leaf_ids());
            }
            leaves
        }
    }
}

/// Pre-order traversal over a forest of tree nodes.
pub fn iter_preorder(roots: &[CategoryTreeNode]) -> NodeIterator<'_> {
    NodeIterator::new(roots)
}

pub struct NodeIterator<'a> {
    stack: Vec<&'a CategoryTreeNode>,
}

impl<'a> NodeIterator<'a> {
    fn new(roots: &'a [CategoryTreeNode]) -> Self {
        // Reversed so the stack pops left-to-right
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for NodeIterator<'a> {
    type Item = &'a CategoryTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
