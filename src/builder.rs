//! Builds trees from a compact level-order encoding.
//!
//! Traversal functions take trees constructed elsewhere; this is the
//! constructor their callers (and this crate's own tests) use.

use tracing::instrument;

use crate::errors::{BuildError, BuildResult};
use crate::node::{Link, TreeNode};

/// Decodes a level-order slot encoding into a tree.
///
/// Slots use complete-array indexing: slot `i`'s children live at
/// `2 * i + 1` and `2 * i + 2`, `Some(v)` is a node holding `v`, `None` is
/// an absent child, and slots past the end of the slice are absent. An
/// empty slice decodes to the empty tree.
///
/// A `Some` slot whose parent slot is `None` has nothing to attach to and
/// is rejected with [`BuildError::OrphanNode`].
///
/// ```
/// use treewalk::{from_level_order, level_order_values};
///
/// let tree = from_level_order(&[Some(1), Some(2), Some(3), None, Some(5)]).unwrap();
/// assert_eq!(level_order_values(&tree), vec![1, 2, 3, 5]);
/// ```
#[instrument(level = "debug", skip_all, fields(slots = slots.len()))]
pub fn from_level_order<T: Clone>(slots: &[Option<T>]) -> BuildResult<Link<T>> {
    for (index, slot) in slots.iter().enumerate().skip(1) {
        let parent = (index - 1) / 2;
        if slot.is_some() && slots[parent].is_none() {
            return Err(BuildError::OrphanNode { index, parent });
        }
    }
    Ok(build(slots, 0))
}

fn build<T: Clone>(slots: &[Option<T>], index: usize) -> Link<T> {
    let value = slots.get(index).and_then(|slot| slot.as_ref())?;
    Some(Box::new(TreeNode::new(
        value.clone(),
        build(slots, 2 * index + 1),
        build(slots, 2 * index + 2),
    )))
}
