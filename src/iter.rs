//! Explicit-stack and queue iterators over borrowed tree nodes.
//!
//! Tree depth may exceed safe call-stack recursion on pathological inputs,
//! so the collection-style traversals run on these instead of recursing.

use std::collections::VecDeque;

use crate::node::TreeNode;

/// Pre-order traversal: node, left subtree, right subtree.
pub struct PreOrderIter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> PreOrderIter<'a, T> {
    pub(crate) fn new(root: Option<&'a TreeNode<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push right first so the left subtree is visited before the right.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(node)
    }
}

/// Post-order traversal: left subtree, right subtree, node.
///
/// Two-phase stack: a node is pushed back marked as visited and only
/// emitted on its second pop, after both subtrees have drained.
pub struct PostOrderIter<'a, T> {
    stack: Vec<(&'a TreeNode<T>, bool)>,
}

impl<'a, T> PostOrderIter<'a, T> {
    pub(crate) fn new(root: Option<&'a TreeNode<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(node);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Level-order (breadth-first) traversal.
///
/// FIFO queue seeded with the root; children are enqueued left before
/// right, so ties at the same node resolve left-to-right.
pub struct LevelOrderIter<'a, T> {
    queue: VecDeque<&'a TreeNode<T>>,
}

impl<'a, T> LevelOrderIter<'a, T> {
    pub(crate) fn new(root: Option<&'a TreeNode<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.push_back(right);
        }
        Some(node)
    }
}
