//! Triangle type for geometric calculations.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle with concrete vertex positions.
///
/// Winding is **counter-clockwise when viewed from the front**: the normal
/// follows the right-hand rule and points toward the viewer.
///
/// # Example
///
/// ```
/// use meshprep_geometry::{Point3, Triangle};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 2.0, 0.0),
/// );
///
/// assert_eq!(tri.normal().z, 2.0);
/// assert_eq!(tri.unit_normal().z, 1.0);
/// assert_eq!(tri.area(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Compute the (unnormalized) face normal `(v1 - v0) x (v2 - v0)`.
    ///
    /// The magnitude equals twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal(&self) -> Vector3<f64> {
        let u = self.v1 - self.v0;
        let v = self.v2 - self.v0;
        u.cross(&v)
    }

    /// Compute the unit face normal.
    ///
    /// Degenerate (zero-area) triangles produce non-finite components.
    #[inline]
    #[must_use]
    pub fn unit_normal(&self) -> Vector3<f64> {
        let normal = self.normal();
        normal / normal.norm()
    }

    /// Compute the area of the triangle.
    ///
    /// # Example
    ///
    /// ```
    /// use meshprep_geometry::{Point3, Triangle};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(1.0, 1.0, 0.0),
    /// );
    /// assert_eq!(tri.area(), 0.5);
    /// ```
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal().norm() * 0.5
    }
}
