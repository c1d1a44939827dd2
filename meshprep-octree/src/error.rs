//! Error types for octree operations.

use thiserror::Error;

/// Errors that can occur while populating an octree.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum OctreeError {
    /// The item's bounding volume does not intersect any leaf of the tree,
    /// i.e. it lies entirely outside the root domain. Recoverable: rebuild
    /// the tree with a larger domain and retry.
    #[error("item lies outside the octree domain")]
    ItemNotInserted,

    /// A split was requested for a node that is not a leaf or that already
    /// sits at the maximum depth. Callers never trigger this through
    /// insertion; it guards the tree's own splitting logic.
    #[error("node {code:#x} cannot be split")]
    CannotSplitNode {
        /// Location code of the offending node.
        code: u64,
    },
}
