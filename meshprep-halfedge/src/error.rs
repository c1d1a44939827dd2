//! Error types for half-edge topology operations.

use thiserror::Error;

/// Errors raised by the half-edge kernel.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopologyError {
    /// The mesh source describes a non-manifold surface: after pairing,
    /// some half-edges were left without a twin. Fatal for the mesh.
    #[error("non-manifold mesh: {unpaired} half-edges could not be paired")]
    NonManifold {
        /// Number of half-edges left unpaired by the builder.
        unpaired: usize,
    },

    /// A vertex-fan traversal was requested for a vertex without any
    /// incident half-edge.
    #[error("vertex {vertex} has no incident half-edge")]
    IsolatedVertex {
        /// The vertex in question.
        vertex: usize,
    },

    /// A vertex-fan traversal hit an open boundary. Fans are only defined
    /// on closed meshes.
    #[error("vertex {vertex} lies on an open boundary")]
    BoundaryVertex {
        /// The vertex in question.
        vertex: usize,
    },
}
