//! Human-readable tree rendering for diagnostics.

use std::fmt::Display;

use termtree::Tree;

use crate::node::{Link, TreeNode};

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeDisplay for TreeNode<T> {
    fn to_tree_string(&self) -> Tree<String> {
        let root = self.value.to_string();
        if self.is_leaf() {
            return Tree::new(root);
        }
        // Both slots are rendered so left and right stay distinguishable
        // when only one child is present.
        let leaves: Vec<_> = [&self.left, &self.right]
            .into_iter()
            .map(TreeDisplay::to_tree_string)
            .collect();
        Tree::new(root).with_leaves(leaves)
    }
}

impl<T: Display> TreeDisplay for Link<T> {
    fn to_tree_string(&self) -> Tree<String> {
        match self.as_deref() {
            Some(node) => node.to_tree_string(),
            None => Tree::new("(empty)".to_string()),
        }
    }
}
