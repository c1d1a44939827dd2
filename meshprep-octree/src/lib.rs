//! Linear (location-coded) octree for meshprep.
//!
//! This crate provides a bounded spatial index over geometric items:
//!
//! - [`Octree`] - the tree, generic over any item answering an AABB test
//! - [`OctreeNode`] - a node addressed by its location code
//! - [`OctreeError`] - insertion and split failures
//!
//! # Location Codes
//!
//! Every node is identified by a 64-bit code encoding its path from the
//! root: the root is `1`, and child `k` of code `c` is `(c << 3) | k`.
//! The node table is a hash map from code to node, so memory tracks the
//! populated region and leaves may sit at different depths. With
//! [`MAX_DEPTH`] of 21 levels, codes stay within 64 bits.
//!
//! # Queries
//!
//! A query descends the tree using the query shape's AABB test and probes
//! the items of every leaf it reaches with the capability matching the
//! query type: an [`meshprep_geometry::Aabb`] probes items with their box
//! test, a [`meshprep_geometry::Ray`] with the ray test, a
//! [`meshprep_geometry::Triangle`] with the triangle test. Items are
//! tested once per query and reported without duplicates.
//!
//! # Example
//!
//! ```
//! use meshprep_geometry::{Aabb, Point3, Vector3};
//! use meshprep_octree::Octree;
//!
//! let domain = Aabb::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
//! let mut octree = Octree::new(domain);
//!
//! for i in 0..10 {
//!     let value = f64::from(i) / 10.0;
//!     octree.insert(Point3::new(value, value, value)).unwrap();
//! }
//!
//! let probe = Aabb::new(Point3::origin(), Vector3::new(0.35, 0.35, 0.35));
//! assert_eq!(octree.query(&probe).len(), 4);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod node;
mod tree;

pub use error::OctreeError;
pub use node::{OctreeNode, MAX_DEPTH, MAX_LEAF_ITEMS};
pub use tree::Octree;
