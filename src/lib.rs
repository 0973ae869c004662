//! Pure traversal algorithms over a generic binary tree.
//!
//! The tree itself is the only collaborator: a [`TreeNode`] owns its value
//! and two optional subtrees, and every algorithm here is a read-only pass
//! producing a fresh derived value (a sum, a string, a sequence of paths).
//! Nothing in this crate mutates, inserts into, or deletes from a tree.
//!
//! An absent root or child is a normal input, answered with the documented
//! base case (`0`, `""`, an empty vector, `false`, or the vacuous `true`
//! when two absent trees are compared for shape) — never an error.
//!
//! ```
//! use treewalk::{leaf, node, leaf_sum, all_paths};
//!
//! let tree = node(1, node(2, leaf(4), leaf(5)), node(3, None, leaf(6)));
//! assert_eq!(leaf_sum(&tree), 15);
//! assert_eq!(all_paths(&tree), vec![vec![1, 2, 4], vec![1, 2, 5], vec![1, 3, 6]]);
//! ```

pub mod builder;
pub mod errors;
pub mod iter;
pub mod node;
pub mod render;
pub mod traverse;
pub mod util;

pub use builder::from_level_order;
pub use errors::{BuildError, BuildResult};
pub use iter::{LevelOrderIter, PostOrderIter, PreOrderIter};
pub use node::{leaf, node, Link, TreeNode};
pub use render::TreeDisplay;
pub use traverse::{
    all_paths, distinct_count, has_strictly_increasing_path, internal_count, leaf_sum,
    level_order_values, post_order_string, same_shape,
};
