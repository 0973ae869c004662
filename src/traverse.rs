//! Pure traversal algorithms over a possibly-absent binary tree.
//!
//! Every function here is a read-only pass: the tree is never mutated and
//! all results are freshly owned values. An absent root is a normal input
//! answered with the documented base case.

use std::fmt::Display;
use std::hash::Hash;

use itertools::Itertools;
use tracing::instrument;

use crate::iter::{LevelOrderIter, PostOrderIter};
use crate::node::{Link, TreeNode};

/// Sums the values of all leaf nodes.
///
/// A leaf has no left and no right child; internal nodes contribute
/// nothing themselves. An absent root sums to 0.
#[instrument(level = "trace", skip_all)]
pub fn leaf_sum(root: &Link<i64>) -> i64 {
    fn walk(link: &Link<i64>) -> i64 {
        match link.as_deref() {
            None => 0,
            Some(node) => {
                let own = if node.is_leaf() { node.value } else { 0 };
                own + walk(&node.left) + walk(&node.right)
            }
        }
    }
    walk(root)
}

/// Counts the nodes having at least one child.
///
/// An absent root counts 0.
#[instrument(level = "trace", skip_all)]
pub fn internal_count<T>(root: &Link<T>) -> usize {
    match root.as_deref() {
        None => 0,
        Some(node) => {
            usize::from(!node.is_leaf()) + internal_count(&node.left) + internal_count(&node.right)
        }
    }
}

/// Concatenates the `Display` form of every value in post-order
/// (left subtree, right subtree, node).
///
/// An absent root yields the empty string.
#[instrument(level = "trace", skip_all)]
pub fn post_order_string<T: Display>(root: &Link<T>) -> String {
    let mut out = String::new();
    for node in PostOrderIter::new(root.as_deref()) {
        out.push_str(&node.value.to_string());
    }
    out
}

/// Collects all values breadth-first: root, then depth 1 left-to-right,
/// then depth 2, and so on.
///
/// Runs on an explicit FIFO queue, never on recursion, so it stays safe
/// on pathologically deep trees. An absent root yields an empty vector.
#[instrument(level = "trace", skip_all)]
pub fn level_order_values<T: Clone>(root: &Link<T>) -> Vec<T> {
    LevelOrderIter::new(root.as_deref())
        .map(|node| node.value.clone())
        .collect()
}

/// Counts distinct values across all nodes; duplicates count once.
///
/// Any full traversal gives the same answer — the order is irrelevant,
/// only complete coverage matters. An absent root counts 0.
#[instrument(level = "trace", skip_all)]
pub fn distinct_count<T: Eq + Hash>(root: &Link<T>) -> usize {
    LevelOrderIter::new(root.as_deref())
        .map(|node| &node.value)
        .unique()
        .count()
}

/// Reports whether at least one root-to-leaf path is strictly increasing
/// (each child's value strictly greater than its parent's).
///
/// The previous value is carried as `Option<i64>`: `None` stands for the
/// conceptual negative infinity, so the root always passes the first
/// comparison, even a root holding `i64::MIN`. A branch is pruned the
/// moment its node fails the comparison; the search short-circuits on the
/// first successful path. An absent root yields `false`.
#[instrument(level = "trace", skip_all)]
pub fn has_strictly_increasing_path(root: &Link<i64>) -> bool {
    fn climb(node: &TreeNode<i64>, prev: Option<i64>) -> bool {
        if prev.is_some_and(|p| node.value <= p) {
            return false;
        }
        if node.is_leaf() {
            return true;
        }
        let prev = Some(node.value);
        node.left.as_deref().is_some_and(|left| climb(left, prev))
            || node.right.as_deref().is_some_and(|right| climb(right, prev))
    }
    root.as_deref().is_some_and(|node| climb(node, None))
}

/// Reports whether two trees have exactly the same arrangement of nodes.
///
/// Values are never compared — the two trees may even hold different value
/// types. Both trees are walked in lock-step; the comparison stops at the
/// first structural mismatch. Two absent trees are vacuously same-shaped.
#[instrument(level = "trace", skip_all)]
pub fn same_shape<T, U>(a: &Link<T>, b: &Link<U>) -> bool {
    match (a.as_deref(), b.as_deref()) {
        (None, None) => true,
        (Some(x), Some(y)) => same_shape(&x.left, &y.left) && same_shape(&x.right, &y.right),
        _ => false,
    }
}

/// Enumerates every root-to-leaf path, in pre-order: all leaves of the
/// left subtree before any leaf of the right.
///
/// A single shared trail is pushed on entry to each node and popped after
/// its subtrees finish, so sibling branches never see stale ancestor
/// values. Each emitted path is an independent snapshot taken at the
/// moment its leaf is reached. An absent root yields an empty vector; a
/// lone root yields one single-value path.
#[instrument(level = "trace", skip_all)]
pub fn all_paths<T: Clone>(root: &Link<T>) -> Vec<Vec<T>> {
    fn descend<T: Clone>(node: &TreeNode<T>, trail: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        trail.push(node.value.clone());
        if node.is_leaf() {
            out.push(trail.clone());
        } else {
            if let Some(left) = node.left.as_deref() {
                descend(left, trail, out);
            }
            if let Some(right) = node.right.as_deref() {
                descend(right, trail, out);
            }
        }
        trail.pop();
    }

    let mut out = Vec::new();
    if let Some(node) = root.as_deref() {
        let mut trail = Vec::new();
        descend(node, &mut trail, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{leaf, node};

    #[test]
    fn test_absent_root_base_cases() {
        let empty: Link<i64> = None;
        assert_eq!(leaf_sum(&empty), 0);
        assert_eq!(internal_count(&empty), 0);
        assert_eq!(post_order_string(&empty), "");
        assert_eq!(level_order_values(&empty), Vec::<i64>::new());
        assert_eq!(distinct_count(&empty), 0);
        assert!(!has_strictly_increasing_path(&empty));
        assert_eq!(all_paths(&empty), Vec::<Vec<i64>>::new());
    }

    #[test]
    fn test_single_node_properties() {
        let tree = leaf(7);
        assert_eq!(leaf_sum(&tree), 7);
        assert_eq!(internal_count(&tree), 0);
        assert_eq!(post_order_string(&tree), "7");
        assert_eq!(level_order_values(&tree), vec![7]);
        assert_eq!(distinct_count(&tree), 1);
        assert!(has_strictly_increasing_path(&tree));
        assert_eq!(all_paths(&tree), vec![vec![7]]);
    }

    #[test]
    fn test_internal_node_value_not_summed() {
        let tree = node(10, leaf(1), None);
        assert_eq!(leaf_sum(&tree), 1);
        assert_eq!(internal_count(&tree), 1);
    }
}
