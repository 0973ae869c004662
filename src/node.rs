//! Binary tree node: one value plus two optional, exclusively-owned subtrees.

use crate::iter::{LevelOrderIter, PostOrderIter, PreOrderIter};

/// A possibly-absent, exclusively-owned subtree.
///
/// `None` denotes the empty tree / absent child. Absence is an explicit
/// variant, never a sentinel value, so "no subtree" stays distinguishable
/// from "subtree holding a zero/default value".
pub type Link<T> = Option<Box<TreeNode<T>>>;

/// Node of a binary tree.
///
/// `Box` ownership of the children makes the structure acyclic by
/// construction: no node is reachable via two distinct paths from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T, left: Link<T>, right: Link<T>) -> Self {
        Self { value, left, right }
    }

    /// A node with no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of the subtree rooted here: 1 for a single node.
    pub fn depth(&self) -> usize {
        let left = self.left.as_deref().map_or(0, TreeNode::depth);
        let right = self.right.as_deref().map_or(0, TreeNode::depth);
        1 + left.max(right)
    }

    /// Total number of nodes in the subtree rooted here.
    pub fn node_count(&self) -> usize {
        let left = self.left.as_deref().map_or(0, TreeNode::node_count);
        let right = self.right.as_deref().map_or(0, TreeNode::node_count);
        1 + left + right
    }

    /// Visits node, then left subtree, then right subtree.
    pub fn iter_preorder(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(Some(self))
    }

    /// Visits left subtree, then right subtree, then node.
    pub fn iter_postorder(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(Some(self))
    }

    /// Visits all nodes at depth d before any node at depth d + 1.
    pub fn iter_level_order(&self) -> LevelOrderIter<'_, T> {
        LevelOrderIter::new(Some(self))
    }
}

// The derived drop glue recurses once per level, which overflows the call
// stack on very deep chains. Detach subtrees onto an explicit stack instead,
// matching the iterators in `iter`.
impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Builds a present subtree from a value and two child links.
pub fn node<T>(value: T, left: Link<T>, right: Link<T>) -> Link<T> {
    Some(Box::new(TreeNode::new(value, left, right)))
}

/// Builds a present leaf subtree.
pub fn leaf<T>(value: T) -> Link<T> {
    node(value, None, None)
}
