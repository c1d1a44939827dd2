//! Polygonal surface-mesh toolkit for CFD preprocessing.
//!
//! This umbrella crate re-exports the meshprep crates behind short module
//! names, providing a unified API for surface-mesh work: ingesting
//! Wavefront OBJ files, repairing orientation, discovering components and
//! feature edges, extracting and merging submeshes, and accelerating
//! point/ray/triangle/box queries with a linear octree.
//!
//! # Quick Start
//!
//! ```no_run
//! use meshprep::prelude::*;
//!
//! // Load a surface and build connectivity.
//! let source = meshprep::obj::load_obj("car.obj.gz").unwrap();
//! let mut mesh = HalfEdgeMesh::from_source(&source).unwrap();
//!
//! // Repair orientation and mark creases.
//! mesh.orient();
//! mesh.compute_feature_edges(30.0_f64.to_radians());
//!
//! // Index the triangles for ray queries.
//! let domain = mesh.aabb().unwrap().buffered(0.01);
//! let mut octree = Octree::new(domain);
//! for face in 0..mesh.face_count() {
//!     let vertices = mesh.face_vertices(face);
//!     octree
//!         .insert(Triangle::new(
//!             mesh.vertex(vertices[0]).point,
//!             mesh.vertex(vertices[1]).point,
//!             mesh.vertex(vertices[2]).point,
//!         ))
//!         .unwrap();
//! }
//!
//! let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0));
//! let hits = octree.query(&ray);
//! println!("{} triangles hit", hits.len());
//! ```
//!
//! # Module Organization
//!
//! - [`geometry`] - primitives and intersection predicates
//! - [`halfedge`] - manifold connectivity kernel
//! - [`octree`] - linear spatial index
//! - [`obj`] - Wavefront OBJ reader/writer

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Geometric primitives and intersection predicates.
pub use meshprep_geometry as geometry;

/// Half-edge connectivity kernel.
pub use meshprep_halfedge as halfedge;

/// Wavefront OBJ reader/writer.
pub use meshprep_obj as obj;

/// Linear location-coded octree.
pub use meshprep_octree as octree;

/// Common imports for mesh preprocessing.
///
/// # Usage
///
/// ```
/// use meshprep::prelude::*;
/// ```
pub mod prelude {
    pub use meshprep_geometry::{Aabb, Intersects, Point3, Ray, Triangle, Vector3};
    pub use meshprep_halfedge::{HalfEdgeMesh, MeshBuffer, MeshSink, MeshSource};
    pub use meshprep_obj::{load_obj, save_obj};
    pub use meshprep_octree::Octree;
}
