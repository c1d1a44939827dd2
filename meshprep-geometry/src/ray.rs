//! Ray type for intersection queries.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A ray defined by an origin point and a direction vector.
///
/// The direction does not need to be normalized. A zero direction component
/// is tolerated by the slab test against an [`crate::Aabb`] (the division
/// yields infinities the min/max folding absorbs), but the direction as a
/// whole must be non-zero.
///
/// # Example
///
/// ```
/// use meshprep_geometry::{Point3, Ray, Vector3};
///
/// let ray = Ray::new(Point3::origin(), Vector3::new(2.0, 0.0, 0.0));
/// assert_eq!(ray.point_at(3.0), Point3::new(6.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray {
    /// The origin of the ray.
    pub origin: Point3<f64>,
    /// The direction of the ray (not necessarily normalized).
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Create a new ray with the given origin and direction.
    #[inline]
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Return the point along the ray at parameter `t`.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_scales_direction() {
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(ray.point_at(0.0), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.point_at(2.5), Point3::new(1.0, 2.5, 0.0));
    }
}
