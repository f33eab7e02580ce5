// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use vista_math::{Axis, Matrix4, Point3, Vector3, EPSILON};

use crate::mesh::triangle::Triangle;
use crate::types::bounds::{BoundingCube, BoundingSphere};
use crate::types::plane::Plane;

/// Up to two non-negative ray parameters, ascending.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Roots {
    values: [f32; 2],
    len: usize,
}

impl Roots {
    /// No intersection.
    pub const NONE: Self = Self {
        values: [0.0; 2],
        len: 0,
    };

    const fn one(t: f32) -> Self {
        Self {
            values: [t, t],
            len: 1,
        }
    }

    const fn two(t0: f32, t1: f32) -> Self {
        Self {
            values: [t0, t1],
            len: 2,
        }
    }

    /// Number of roots (0, 1, or 2).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` when the ray missed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Roots as a slice, ascending.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values[..self.len]
    }

    /// Smallest root, if any.
    #[must_use]
    pub fn nearest(&self) -> Option<f32> {
        self.as_slice().first().copied()
    }
}

/// Parametric ray `P(t) = origin + t·direction`, `t >= 0`.
///
/// The direction need not be unit length; `t` is measured in multiples of it.
/// Normalise first to read `t` as world distance.
///
/// # Examples
/// ```
/// use vista_geom::{BoundingSphere, RayCast};
/// use vista_math::{Point3, Vector3};
/// let ray = RayCast::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
/// let sphere = BoundingSphere::new(Point3::ORIGIN, 1.0);
/// assert_eq!(ray.sphere_intersections(&sphere).as_slice(), &[4.0, 6.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RayCast {
    origin: Point3,
    direction: Vector3,
}

impl RayCast {
    /// World-space ray.
    #[must_use]
    pub const fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Picking ray through viewport pixel `(x, y)`, in view space.
    ///
    /// The viewport origin is top-left with +y down. The ray starts at the
    /// eye with a unit direction through the pixel on the `z = -1` plane.
    /// Move it to world space with [`RayCast::transformed`] and the inverse
    /// view matrix before testing world geometry.
    #[must_use]
    pub fn from_viewport(x: f32, y: f32, width: f32, height: f32, projection: &Matrix4) -> Self {
        let (p00, p11) = (projection.get(0, 0), projection.get(1, 1));
        if p00.abs() <= EPSILON || p11.abs() <= EPSILON {
            tracing::trace!(p00, p11, "degenerate picking projection");
        }
        let ndc_x = 2.0 * x / width - 1.0;
        let ndc_y = 1.0 - 2.0 * y / height;
        let direction = Vector3::new(
            (ndc_x + projection.get(2, 0)) / p00,
            (ndc_y + projection.get(2, 1)) / p11,
            -1.0,
        );
        Self {
            origin: Point3::ORIGIN,
            direction: direction.normalized(),
        }
    }

    /// Start point.
    #[must_use]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Direction vector.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Moves the start point.
    pub fn set_origin(&mut self, origin: Point3) -> &mut Self {
        self.origin = origin;
        self
    }

    /// Replaces the direction.
    pub fn set_direction(&mut self, direction: Vector3) -> &mut Self {
        self.direction = direction;
        self
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }

    /// Ray with origin and direction moved by `matrix`.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        Self {
            origin: matrix.transform_point(&self.origin),
            direction: matrix.transform_direction(&self.direction),
        }
    }

    /// Parameter where the ray meets `plane`.
    ///
    /// `None` when the ray runs parallel to the plane or the hit lies behind
    /// the origin.
    #[must_use]
    pub fn plane_intersection(&self, plane: &Plane) -> Option<f32> {
        let denom = plane.normal().dot(&self.direction);
        if denom.abs() <= EPSILON {
            tracing::trace!(denom, "ray parallel to plane");
            return None;
        }
        let t = -plane.distance(&self.origin) / denom;
        (t >= 0.0).then_some(t)
    }

    /// See [`RayCast::plane_intersection`].
    #[must_use]
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        self.plane_intersection(plane).is_some()
    }

    /// See [`RayCast::plane_intersection`].
    #[must_use]
    pub fn plane_intersection_point(&self, plane: &Plane) -> Option<Point3> {
        self.plane_intersection(plane).map(|t| self.point_at(t))
    }

    /// Parameter where the ray hits triangle `a, b, c`.
    ///
    /// Only the front face counts: the ray must travel against the
    /// counter-clockwise normal. Edges are inclusive. Degenerate triangles
    /// never report a hit.
    #[must_use]
    pub fn triangle_intersection(&self, a: &Point3, b: &Point3, c: &Point3) -> Option<f32> {
        let (ab, ac) = (*b - *a, *c - *a);
        let normal = ab.cross(&ac);
        let twice_area = normal.magnitude();
        if twice_area <= EPSILON * ab.magnitude() * ac.magnitude() {
            tracing::trace!("degenerate triangle");
            return None;
        }
        if self.direction.is_zero() {
            return None;
        }
        let denom = normal.dot(&self.direction);
        if denom / (twice_area * self.direction.magnitude()) >= -EPSILON {
            return None;
        }
        let t = (*a - self.origin).dot(&normal) / denom;
        if t < 0.0 {
            return None;
        }
        let hit = self.point_at(t);
        let edges = [(a, b), (b, c), (c, a)];
        edges
            .iter()
            .all(|(from, to)| (**to - **from).cross(&(hit - **from)).dot(&normal) >= 0.0)
            .then_some(t)
    }

    /// See [`RayCast::triangle_intersection`].
    #[must_use]
    pub fn intersects_triangle(&self, a: &Point3, b: &Point3, c: &Point3) -> bool {
        self.triangle_intersection(a, b, c).is_some()
    }

    /// See [`RayCast::triangle_intersection`].
    #[must_use]
    pub fn triangle_intersection_point(&self, a: &Point3, b: &Point3, c: &Point3) -> Option<Point3> {
        self.triangle_intersection(a, b, c).map(|t| self.point_at(t))
    }

    /// [`RayCast::triangle_intersection`] against a mesh [`Triangle`].
    #[must_use]
    pub fn triangle_intersection_for(&self, triangle: &Triangle) -> Option<f32> {
        let [a, b, c] = triangle.positions();
        self.triangle_intersection(&a, &b, &c)
    }

    /// Non-negative parameters where the ray crosses the sphere surface.
    ///
    /// Two ascending roots for a ray passing through, one for a tangent ray or
    /// for an origin inside the sphere (only the exit lies ahead), none for a
    /// miss or a sphere entirely behind the origin.
    #[must_use]
    pub fn sphere_intersections(&self, sphere: &BoundingSphere) -> Roots {
        if self.direction.is_zero() {
            tracing::trace!("degenerate ray direction");
            return Roots::NONE;
        }
        // Solved along the unit direction, then rescaled to the caller's `t`.
        let len = self.direction.magnitude();
        let unit = self.direction * len.recip();
        let oc = self.origin - sphere.centre();
        let half_b = oc.dot(&unit);
        let radius_sqr = sphere.radius() * sphere.radius();
        // r² − |perpendicular offset|², free of the |oc|² − b² cancellation.
        let perpendicular = oc - unit * half_b;
        let discriminant = radius_sqr - perpendicular.magnitude_sqr();
        let tangent_band = EPSILON * radius_sqr;
        if discriminant < -tangent_band {
            return Roots::NONE;
        }
        if discriminant <= tangent_band {
            let t = -half_b / len;
            return if t >= 0.0 { Roots::one(t) } else { Roots::NONE };
        }
        let root = discriminant.sqrt();
        let t0 = (-half_b - root) / len;
        let t1 = (-half_b + root) / len;
        if t1 < 0.0 {
            Roots::NONE
        } else if t0 < 0.0 {
            Roots::one(t1)
        } else {
            Roots::two(t0, t1)
        }
    }

    /// See [`RayCast::sphere_intersections`].
    #[must_use]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        !self.sphere_intersections(sphere).is_empty()
    }

    /// Nearest point where the ray crosses the sphere surface.
    #[must_use]
    pub fn sphere_intersection_point(&self, sphere: &BoundingSphere) -> Option<Point3> {
        self.sphere_intersections(sphere)
            .nearest()
            .map(|t| self.point_at(t))
    }

    /// Entry and exit parameters through `cube` (slab method), clipped to
    /// `t >= 0`. An origin inside the box enters at `t = 0`.
    #[must_use]
    pub fn cube_intersection(&self, cube: &BoundingCube) -> Option<(f32, f32)> {
        if !cube.is_valid() {
            return None;
        }
        let (min, max) = (cube.min(), cube.max());
        let mut t_enter = 0.0_f32;
        let mut t_exit = f32::INFINITY;
        for axis in Axis::ALL {
            let i = axis.index();
            let o = self.origin[i];
            let d = self.direction[i];
            if d.abs() <= EPSILON {
                if o < min[i] || o > max[i] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let (near, far) = {
                let t0 = (min[i] - o) * inv;
                let t1 = (max[i] - o) * inv;
                if t0 <= t1 {
                    (t0, t1)
                } else {
                    (t1, t0)
                }
            };
            t_enter = t_enter.max(near);
            t_exit = t_exit.min(far);
            if t_enter > t_exit {
                return None;
            }
        }
        Some((t_enter, t_exit))
    }

    /// See [`RayCast::cube_intersection`].
    #[must_use]
    pub fn intersects_cube(&self, cube: &BoundingCube) -> bool {
        self.cube_intersection(cube).is_some()
    }

    /// Entry point into `cube`.
    #[must_use]
    pub fn cube_intersection_point(&self, cube: &BoundingCube) -> Option<Point3> {
        self.cube_intersection(cube).map(|(t, _)| self.point_at(t))
    }
}
