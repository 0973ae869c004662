//! Errors for tree construction.
//!
//! Traversal itself has no error conditions — absence is a normal input —
//! so only the level-order builder is fallible.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("slot {index} holds a node but its parent slot {parent} is absent")]
    OrphanNode { index: usize, parent: usize },
}

pub type BuildResult<T> = Result<T, BuildError>;
