//! Geometric primitives for meshprep.
//!
//! This crate provides the foundational value types shared by the half-edge
//! kernel and the octree spatial index:
//!
//! - [`Aabb`] - Axis-aligned bounding box stored as center + half-size
//! - [`Triangle`] - A triangle with concrete vertex positions
//! - [`Ray`] - A ray with origin and direction
//! - [`Intersects`] - The intersection capability trait
//!
//! # Units and Coordinate System
//!
//! This library is **unit-agnostic**. All coordinates are `f64` in a
//! right-handed coordinate system. Triangle winding is counter-clockwise
//! when viewed from the front (normals follow the right-hand rule).
//!
//! # Intersection Capabilities
//!
//! Each primitive answers the intersection queries it supports through
//! [`Intersects`] instantiations. A `Triangle` can answer "do I intersect
//! this box?" (`Intersects<Aabb>`, separating-axis test) and "does this ray
//! hit me?" (`Intersects<Ray>`, Möller-Trumbore), but not "do I intersect
//! this triangle?" - that capability is simply not implemented, and generic
//! consumers such as the octree surface this at compile time.
//!
//! # Example
//!
//! ```
//! use meshprep_geometry::{Aabb, Intersects, Point3, Ray, Triangle, Vector3};
//!
//! let domain = Aabb::new(
//!     Point3::new(0.5, 0.5, 0.5),
//!     Vector3::new(0.5, 0.5, 0.5),
//! );
//!
//! let ray = Ray::new(Point3::new(0.5, 0.5, -1.0), Vector3::new(0.0, 0.0, 1.0));
//! assert!(ray.intersects(&domain));
//!
//! let triangle = Triangle::new(
//!     Point3::new(0.25, 0.25, 0.25),
//!     Point3::new(0.25, 0.75, 0.25),
//!     Point3::new(0.75, 0.75, 0.75),
//! );
//! assert!(triangle.intersects(&domain));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod aabb;
mod intersect;
mod ray;
mod triangle;

pub use aabb::Aabb;
pub use intersect::{Intersects, EPSILON};
pub use ray::Ray;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
