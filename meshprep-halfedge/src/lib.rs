//! Index-based half-edge kernel for manifold polygonal meshes.
//!
//! This crate provides the connectivity core of meshprep:
//!
//! - [`HalfEdgeMesh`] - the half-edge mesh structure and its builder
//! - [`MeshSource`] / [`MeshSink`] - the abstract input/output contract
//! - [`MeshBuffer`] - a plain in-memory source/sink
//! - [`TopologyError`] - failures raised by the kernel
//!
//! All entities (vertices, faces, half-edges, patches) live in dense
//! arrays and reference each other by index. The kernel supports
//! orientation repair, component discovery, feature-edge detection,
//! submesh extraction, in-place merge, and rigid translation.
//!
//! # Example
//!
//! ```
//! use meshprep_geometry::Point3;
//! use meshprep_halfedge::{HalfEdgeMesh, MeshBuffer};
//!
//! // A closed tetrahedron.
//! let mut buffer = MeshBuffer::new();
//! for point in [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ] {
//!     buffer.push_vertex(point);
//! }
//! buffer.push_face(vec![0, 2, 1], None);
//! buffer.push_face(vec![0, 1, 3], None);
//! buffer.push_face(vec![1, 2, 3], None);
//! buffer.push_face(vec![0, 3, 2], None);
//!
//! let mut mesh = HalfEdgeMesh::from_source(&buffer).unwrap();
//! assert!(mesh.is_closed());
//! assert_eq!(mesh.components().len(), 1);
//!
//! mesh.compute_feature_edges(30.0_f64.to_radians());
//! assert!(!mesh.feature_edges().is_empty());
//! ```
//!
//! # Manifoldness
//!
//! The builder accepts only surfaces whose every edge is shared by exactly
//! two faces and rejects everything else as [`TopologyError::NonManifold`].
//! Open boundaries still arise naturally - extracting a subset of faces
//! severs the twins that point outside the selection.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod elements;
mod error;
mod extract;
mod features;
mod mesh;
mod orient;
mod source;

pub use elements::{Face, HalfEdge, Patch, Vertex};
pub use error::TopologyError;
pub use mesh::HalfEdgeMesh;
pub use source::{MeshBuffer, MeshSink, MeshSource};
