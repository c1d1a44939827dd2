//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (AABB).
///
/// The box is stored as a center point and a non-negative half-size per
/// axis. The min/max corners are derived as `center - half_size` and
/// `center + half_size`. This representation makes the octant subdivision
/// used by the octree a pair of cheap shifts rather than corner arithmetic.
///
/// # Example
///
/// ```
/// use meshprep_geometry::{Aabb, Point3, Vector3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.5, 0.5, 0.5),
///     Vector3::new(0.5, 0.5, 0.5),
/// );
///
/// assert_eq!(aabb.min_bound(), Point3::new(0.0, 0.0, 0.0));
/// assert_eq!(aabb.max_bound(), Point3::new(1.0, 1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Center of the box.
    pub center: Point3<f64>,
    /// Half-size per axis. Always non-negative.
    pub half_size: Vector3<f64>,
}

impl Aabb {
    /// Create a new AABB from its center and half-size.
    ///
    /// Negative half-size components are corrected to their absolute value.
    ///
    /// # Example
    ///
    /// ```
    /// use meshprep_geometry::{Aabb, Point3, Vector3};
    ///
    /// let aabb = Aabb::new(Point3::origin(), Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(aabb.max_bound(), Point3::new(1.0, 2.0, 3.0));
    /// ```
    #[must_use]
    pub fn new(center: Point3<f64>, half_size: Vector3<f64>) -> Self {
        Self {
            center,
            half_size: half_size.abs(),
        }
    }

    /// Create an AABB from its min/max corners.
    ///
    /// The corners may be given in any order per axis.
    ///
    /// # Example
    ///
    /// ```
    /// use meshprep_geometry::{Aabb, Point3, Vector3};
    ///
    /// let aabb = Aabb::from_bounds(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(2.0, 2.0, 2.0),
    /// );
    /// assert_eq!(aabb.center, Point3::new(1.0, 1.0, 1.0));
    /// assert_eq!(aabb.half_size, Vector3::new(1.0, 1.0, 1.0));
    /// ```
    #[must_use]
    pub fn from_bounds(min: Point3<f64>, max: Point3<f64>) -> Self {
        let center = Point3::new(
            (min.x + max.x) * 0.5,
            (min.y + max.y) * 0.5,
            (min.z + max.z) * 0.5,
        );
        let half_size = (max - min) * 0.5;
        Self::new(center, half_size)
    }

    /// Create the tightest AABB enclosing a set of points.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use meshprep_geometry::{Aabb, Point3};
    ///
    /// let points = vec![
    ///     Point3::new(-1.0, 0.0, 0.0),
    ///     Point3::new(3.0, 2.0, 1.0),
    /// ];
    /// let aabb = Aabb::from_points(points.iter()).unwrap();
    /// assert_eq!(aabb.min_bound(), Point3::new(-1.0, 0.0, 0.0));
    /// assert_eq!(aabb.max_bound(), Point3::new(3.0, 2.0, 1.0));
    /// ```
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Option<Self> {
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut seen = false;

        for point in points {
            seen = true;
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            min.z = min.z.min(point.z);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
            max.z = max.z.max(point.z);
        }

        seen.then(|| Self::from_bounds(min, max))
    }

    /// Get the minimum corner.
    #[inline]
    #[must_use]
    pub fn min_bound(&self) -> Point3<f64> {
        self.center - self.half_size
    }

    /// Get the maximum corner.
    #[inline]
    #[must_use]
    pub fn max_bound(&self) -> Point3<f64> {
        self.center + self.half_size
    }

    /// Grow the box about its center by a fraction of its half-size.
    ///
    /// `buffered(0.01)` grows each half-size component by 1%, which is the
    /// conventional padding applied to an octree domain so that geometry on
    /// the hull of a mesh still falls strictly inside the root box.
    ///
    /// # Example
    ///
    /// ```
    /// use meshprep_geometry::{Aabb, Point3, Vector3};
    ///
    /// let aabb = Aabb::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
    /// let padded = aabb.buffered(0.5);
    /// assert_eq!(padded.half_size, Vector3::new(1.5, 1.5, 1.5));
    /// ```
    #[must_use]
    pub fn buffered(&self, fraction: f64) -> Self {
        Self::new(self.center, self.half_size * (1.0 + fraction))
    }

    /// Compute one of the eight octant children of the box.
    ///
    /// The child has half the half-size and its center is shifted by a
    /// quarter of the parent size per axis. Bit 2 of `octant` selects the
    /// positive x side, bit 1 the positive y side, and bit 0 the positive
    /// z side.
    ///
    /// # Panics
    ///
    /// Panics if `octant >= 8`; an out-of-range octant is a programming
    /// error.
    ///
    /// # Example
    ///
    /// ```
    /// use meshprep_geometry::{Aabb, Point3, Vector3};
    ///
    /// let aabb = Aabb::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
    /// let child = aabb.octant(0b111);
    /// assert_eq!(child.center, Point3::new(0.5, 0.5, 0.5));
    /// assert_eq!(child.half_size, Vector3::new(0.5, 0.5, 0.5));
    /// ```
    #[must_use]
    pub fn octant(&self, octant: usize) -> Self {
        assert!(octant < 8, "octant index out of range: {octant}");

        let half_size = self.half_size * 0.5;
        let mut center = self.center;

        center.x += if octant & 4 == 4 { half_size.x } else { -half_size.x };
        center.y += if octant & 2 == 2 { half_size.y } else { -half_size.y };
        center.z += if octant & 1 == 1 { half_size.z } else { -half_size.z };

        Self { center, half_size }
    }
}
