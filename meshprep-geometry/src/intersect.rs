//! Intersection predicates between the geometric primitives.
//!
//! Every predicate is exposed through the [`Intersects`] trait so that
//! generic consumers (most importantly the octree) can require exactly the
//! capabilities they dispatch on. The implemented pairs are:
//!
//! | Subject | Query | Algorithm |
//! |---|---|---|
//! | `Point3<f64>` | [`Aabb`] | inclusive axis containment |
//! | [`Aabb`] | [`Aabb`] | inclusive slab overlap |
//! | [`Ray`] | [`Aabb`] | slab method |
//! | [`Ray`] | [`Triangle`] | Möller-Trumbore, back-face culling |
//! | [`Triangle`] | [`Aabb`] | Akenine-Möller separating axis test |
//! | [`Triangle`] | [`Ray`] | delegates to the ray test |

use nalgebra::{Point3, Vector3};

use crate::{Aabb, Ray, Triangle};

/// Tolerance used by the ray/triangle test to reject grazing and
/// back-facing hits.
pub const EPSILON: f64 = 1e-8;

/// Capability to answer an intersection query against another primitive.
///
/// A type implements `Intersects<T>` for each query shape `T` it can be
/// tested against. Absent capabilities are absent impls; there is no
/// runtime fallback.
pub trait Intersects<T> {
    /// Return true if `self` and `other` spatially intersect.
    fn intersects(&self, other: &T) -> bool;
}

impl Intersects<Aabb> for Point3<f64> {
    /// Inclusive containment: points on the boundary intersect.
    fn intersects(&self, other: &Aabb) -> bool {
        let min = other.min_bound();
        let max = other.max_bound();

        self.x >= min.x
            && self.x <= max.x
            && self.y >= min.y
            && self.y <= max.y
            && self.z >= min.z
            && self.z <= max.z
    }
}

impl Intersects<Aabb> for Aabb {
    /// Inclusive overlap: touching boxes intersect.
    fn intersects(&self, other: &Aabb) -> bool {
        let a_min = self.min_bound();
        let a_max = self.max_bound();
        let b_min = other.min_bound();
        let b_max = other.max_bound();

        a_min.x <= b_max.x
            && a_max.x >= b_min.x
            && a_min.y <= b_max.y
            && a_max.y >= b_min.y
            && a_min.z <= b_max.z
            && a_max.z >= b_min.z
    }
}

impl Intersects<Aabb> for Ray {
    /// Slab method over the three axis intervals.
    ///
    /// The direction need not be normalized; zero components produce
    /// infinite slab parameters which the min/max folding absorbs. A ray
    /// that runs exactly along a box edge (a zero direction component with
    /// the origin on the corresponding face plane) produces NaN and is
    /// reported as a **miss**; callers must not rely on grazing hits.
    fn intersects(&self, other: &Aabb) -> bool {
        let min = other.min_bound();
        let max = other.max_bound();

        let t1 = (min.x - self.origin.x) / self.direction.x;
        let t2 = (max.x - self.origin.x) / self.direction.x;
        let mut tmin = t1.min(t2);
        let mut tmax = t1.max(t2);

        let t1 = (min.y - self.origin.y) / self.direction.y;
        let t2 = (max.y - self.origin.y) / self.direction.y;
        tmin = tmin.max(t1.min(t2));
        tmax = tmax.min(t1.max(t2));

        let t1 = (min.z - self.origin.z) / self.direction.z;
        let t2 = (max.z - self.origin.z) / self.direction.z;
        tmin = tmin.max(t1.min(t2));
        tmax = tmax.min(t1.max(t2));

        tmax >= tmin.max(0.0)
    }
}

impl Intersects<Triangle> for Ray {
    /// Möller-Trumbore with back-face culling.
    ///
    /// The determinant is tested as `det < EPSILON` rather than
    /// `|det| < EPSILON`, so rays hitting the back face (or running
    /// parallel to the plane) miss. Hits behind the origin miss as well.
    fn intersects(&self, other: &Triangle) -> bool {
        let e1 = other.v1 - other.v0;
        let e2 = other.v2 - other.v0;

        let p = self.direction.cross(&e2);
        let det = e1.dot(&p);

        if det < EPSILON {
            return false;
        }

        let inv_det = 1.0 / det;
        let s = self.origin - other.v0;
        let u = inv_det * s.dot(&p);

        if !(0.0..=1.0).contains(&u) {
            return false;
        }

        let q = s.cross(&e1);
        let v = inv_det * self.direction.dot(&q);

        if v < 0.0 || u + v > 1.0 {
            return false;
        }

        inv_det * e2.dot(&q) > EPSILON
    }
}

impl Intersects<Aabb> for Triangle {
    /// Akenine-Möller separating axis test.
    ///
    /// Thirteen axes are tested: the three box axes, the nine cross
    /// products of triangle edges with box axes, and the triangle's own
    /// plane. All comparisons are inclusive, so touching contact counts as
    /// an intersection.
    fn intersects(&self, other: &Aabb) -> bool {
        let h = other.half_size;

        // Work in a frame with the box center at the origin.
        let v0 = self.v0 - other.center;
        let v1 = self.v1 - other.center;
        let v2 = self.v2 - other.center;

        let e0 = v1 - v0;
        let e1 = v2 - v1;
        let e2 = v0 - v2;

        // Box axes against the triangle's own bounds.
        for i in 0..3 {
            let min = v0[i].min(v1[i]).min(v2[i]);
            let max = v0[i].max(v1[i]).max(v2[i]);

            if min > h[i] || max < -h[i] {
                return false;
            }
        }

        // Cross products of each triangle edge with each box axis.
        for edge in [e0, e1, e2] {
            for i in 0..3 {
                let mut axis = Vector3::zeros();
                axis[i] = 1.0;
                let axis = axis.cross(&edge);

                let p0 = axis.dot(&v0);
                let p1 = axis.dot(&v1);
                let p2 = axis.dot(&v2);
                let rad = h.x * axis.x.abs() + h.y * axis.y.abs() + h.z * axis.z.abs();

                if p0.min(p1).min(p2) > rad || p0.max(p1).max(p2) < -rad {
                    return false;
                }
            }
        }

        // The triangle's plane against the box diagonal.
        plane_overlaps_box(&e0.cross(&e1), &v0, &h)
    }
}

impl Intersects<Ray> for Triangle {
    /// A triangle answers a ray query with the ray/triangle test.
    #[inline]
    fn intersects(&self, other: &Ray) -> bool {
        other.intersects(self)
    }
}

/// Test whether the plane with `normal` through `vert` cuts the box
/// `[-half, half]` centered at the origin.
fn plane_overlaps_box(normal: &Vector3<f64>, vert: &Vector3<f64>, half: &Vector3<f64>) -> bool {
    let mut vmin = Vector3::zeros();
    let mut vmax = Vector3::zeros();

    for i in 0..3 {
        if normal[i] > 0.0 {
            vmin[i] = -half[i] - vert[i];
            vmax[i] = half[i] - vert[i];
        } else {
            vmin[i] = half[i] - vert[i];
            vmax[i] = -half[i] - vert[i];
        }
    }

    normal.dot(&vmin) <= 0.0 && normal.dot(&vmax) >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Point3::new(0.5, 0.5, 0.5), Vector3::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn point_inside_aabb() {
        let aabb = unit_box();

        assert!(Point3::new(0.5, 0.5, 0.5).intersects(&aabb));
        assert!(Point3::new(0.0, 0.0, 0.0).intersects(&aabb));
        assert!(Point3::new(1.0, 1.0, 1.0).intersects(&aabb));
        assert!(!Point3::new(-0.1, 0.5, 0.5).intersects(&aabb));
        assert!(!Point3::new(0.5, 0.5, 1.1).intersects(&aabb));
    }

    #[test]
    fn aabb_overlap() {
        let a = unit_box();
        let b = Aabb::new(Point3::new(1.2, 0.5, 0.5), Vector3::new(0.5, 0.5, 0.5));
        let c = Aabb::new(Point3::new(3.0, 3.0, 3.0), Vector3::new(0.5, 0.5, 0.5));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn aabb_touching_is_inclusive() {
        let a = unit_box();
        let b = Aabb::new(Point3::new(1.5, 0.5, 0.5), Vector3::new(0.5, 0.5, 0.5));

        assert!(a.intersects(&b));
    }

    #[test]
    fn ray_aabb_origin_inside() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
        assert!(ray.intersects(&unit_box()));
    }

    #[test]
    fn ray_aabb_origin_outside() {
        let ray = Ray::new(Point3::new(-10.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
        assert!(ray.intersects(&unit_box()));
    }

    // A ray running exactly along a box edge divides zero by zero in the
    // slab test and is reported as a miss. Pinned per axis.

    #[test]
    fn ray_aabb_along_x_edge_misses() {
        let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(!ray.intersects(&unit_box()));
    }

    #[test]
    fn ray_aabb_along_y_edge_misses() {
        let ray = Ray::new(Point3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert!(!ray.intersects(&unit_box()));
    }

    #[test]
    fn ray_aabb_along_z_edge_misses() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(!ray.intersects(&unit_box()));
    }

    #[test]
    fn ray_aabb_pointing_away_misses() {
        let ray = Ray::new(Point3::new(-1.0, 0.5, 0.5), Vector3::new(-1.0, 0.0, 0.0));
        assert!(!ray.intersects(&unit_box()));
    }

    #[test]
    fn ray_aabb_beside_misses() {
        let ray = Ray::new(Point3::new(-1.0, 0.0, 2.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(!ray.intersects(&unit_box()));
    }

    #[test]
    fn ray_triangle_front_face_hits() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.0), Vector3::new(0.0, 0.0, 1.0));
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(0.0, 1.0, 2.0),
            Point3::new(1.0, 1.0, 2.0),
        );

        assert!(ray.intersects(&tri));
        assert!(tri.intersects(&ray));
    }

    #[test]
    fn ray_triangle_back_face_misses() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.0), Vector3::new(0.0, 0.0, 1.0));
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(1.0, 1.0, 2.0),
        );

        assert!(!ray.intersects(&tri));
    }

    #[test]
    fn ray_triangle_behind_origin_misses() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.0), Vector3::new(0.0, 0.0, 1.0));
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, -2.0),
            Point3::new(0.0, 1.0, -2.0),
            Point3::new(1.0, 1.0, -2.0),
        );

        assert!(!ray.intersects(&tri));
    }

    #[test]
    fn ray_triangle_outside_barycentric_misses() {
        let ray = Ray::new(Point3::new(2.0, 2.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(0.0, 1.0, 2.0),
            Point3::new(1.0, 1.0, 2.0),
        );

        assert!(!ray.intersects(&tri));
    }

    #[test]
    fn triangle_aabb_fully_inside() {
        let tri = Triangle::new(
            Point3::new(0.25, 0.25, 0.25),
            Point3::new(0.25, 0.75, 0.25),
            Point3::new(0.75, 0.75, 0.75),
        );

        assert!(tri.intersects(&unit_box()));
    }

    #[test]
    fn triangle_aabb_outside() {
        let tri = Triangle::new(
            Point3::new(1.25, 1.25, 1.25),
            Point3::new(1.25, 1.75, 1.25),
            Point3::new(1.75, 1.75, 1.75),
        );

        assert!(!tri.intersects(&unit_box()));
    }

    #[test]
    fn triangle_aabb_crossing_face() {
        let tri = Triangle::new(
            Point3::new(0.5, 0.5, 0.5),
            Point3::new(1.25, 0.75, 0.5),
            Point3::new(1.25, 0.25, 0.5),
        );

        assert!(tri.intersects(&unit_box()));
    }

    #[test]
    fn triangle_aabb_spanning_box() {
        let tri = Triangle::new(
            Point3::new(-2.0, -1.0, 0.5),
            Point3::new(1.5, 3.0, 0.5),
            Point3::new(1.5, -1.0, 0.5),
        );

        assert!(tri.intersects(&unit_box()));
    }

    #[test]
    fn triangle_aabb_rejected_by_plane() {
        let tri = Triangle::new(
            Point3::new(0.1, 1.1, 0.9),
            Point3::new(0.5, 0.8, 1.5),
            Point3::new(0.9, 1.1, 0.9),
        );

        assert!(!tri.intersects(&unit_box()));
    }

    #[test]
    fn triangle_aabb_rejected_by_edge_axis() {
        let tri = Triangle::new(
            Point3::new(0.5, 1.1, 0.9),
            Point3::new(0.5, 0.8, 1.5),
            Point3::new(0.5, 1.3, 1.2),
        );

        assert!(!tri.intersects(&unit_box()));
    }

    #[test]
    fn triangle_aabb_touching_face_is_inclusive() {
        let tri = Triangle::new(
            Point3::new(0.25, 0.25, 1.0),
            Point3::new(0.75, 0.25, 1.0),
            Point3::new(0.5, 0.75, 1.0),
        );

        assert!(tri.intersects(&unit_box()));
    }
}
