/*
Workaround for error: https://doc.rust-lang.org/error_codes/E0116.html
Cannot define inherent `impl` for a type outside of the crate where the type is defined

define a trait that has the desired associated functions/types/constants and implement the trait for the type in question
 */
use termtree::Tree;

use crate::node::CategoryTreeNode;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for CategoryTreeNode {
    fn to_tree_string(&self) -> Tree<String> {
        let label = if self.subtitle.is_empty() {
            self.title.clone()
        } else {
            format!("{} [{}]", self.title, self.subtitle)
        };

        // Recursively construct the children
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree_string()).collect();

        Tree::new(label).with_leaves(leaves)
    }
}
