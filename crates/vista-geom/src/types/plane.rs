// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use vista_math::{Matrix4, Point3, Tolerance, Vector3, Vector4, EPSILON};

use crate::error::GeomError;

/// Oriented plane `normal · P + d = 0`.
///
/// Invariants:
/// - `normal` is unit length after every constructor and after
///   [`Plane::normalize`]. The one exception is a degenerate normal, which is
///   kept as given (and traced) rather than divided by zero.
/// - Positive signed distance means the point lies on the side the normal
///   points toward.
///
/// Winding: [`Plane::from_points`] expects counter-clockwise order when viewed
/// from the side the normal should face.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    normal: Vector3,
    d: f32,
}

impl Plane {
    /// Plane through `point` with the given `normal` (normalised here).
    #[must_use]
    pub fn new(normal: Vector3, point: Point3) -> Self {
        let normal = normal.normalized();
        let d = -normal.dot(&point.to_vector());
        Self { normal, d }
    }

    /// Plane through three counter-clockwise points.
    ///
    /// Collinear points produce a zero normal and a plane that reports zero
    /// distance everywhere; use [`Plane::try_from_points`] to reject them.
    #[must_use]
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> Self {
        let normal = (b - a).cross(&(c - a));
        Self::new(normal, a)
    }

    /// Checked form of [`Plane::from_points`].
    pub fn try_from_points(a: Point3, b: Point3, c: Point3) -> Result<Self, GeomError> {
        let normal = (b - a).cross(&(c - a));
        if normal.magnitude() <= EPSILON {
            return Err(GeomError::CollinearPoints);
        }
        Ok(Self::new(normal, a))
    }

    /// Plane `a·x + b·y + c·z + d = 0`, rescaled so the normal is unit length.
    #[must_use]
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Self {
        let mut plane = Self {
            normal: Vector3::new(a, b, c),
            d,
        };
        plane.normalize();
        plane
    }

    /// Unit normal.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Plane constant `d`.
    #[must_use]
    pub fn d(&self) -> f32 {
        self.d
    }

    /// Coefficients `[a, b, c, d]`.
    #[must_use]
    pub fn coefficients(&self) -> [f32; 4] {
        let [a, b, c] = self.normal.to_array();
        [a, b, c, self.d]
    }

    /// Signed distance from `point` along the normal.
    #[must_use]
    pub fn distance(&self, point: &Point3) -> f32 {
        self.normal.dot(&point.to_vector()) + self.d
    }

    /// `true` when `point` lies on the normal side or on the plane.
    #[must_use]
    pub fn inside(&self, point: &Point3) -> bool {
        self.distance(point) >= 0.0
    }

    /// `true` when the whole sphere at `point` with `radius` lies on the
    /// normal side (touching counts).
    #[must_use]
    pub fn inside_radius(&self, point: &Point3, radius: f32) -> bool {
        self.distance(point) - radius >= 0.0
    }

    /// Orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn nearest_point(&self, point: &Point3) -> Point3 {
        *point - self.normal * self.distance(point)
    }

    /// Rescales `normal` and `d` so the normal is unit length.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.normal.magnitude();
        if len <= EPSILON {
            tracing::trace!(normal = ?self.normal.to_array(), "plane normal is degenerate");
            return self;
        }
        let inv = 1.0 / len;
        self.normal *= inv;
        self.d *= inv;
        self
    }

    /// The same plane facing the opposite way.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            d: -self.d,
        }
    }

    /// Transforms the plane in place by `matrix`.
    ///
    /// Planes map through the inverse-transpose of the point transform, so
    /// this inverts `matrix` first. On failure `self` is unchanged.
    pub fn transform(&mut self, matrix: &Matrix4) -> Result<&mut Self, GeomError> {
        *self = self.transformed(matrix)?;
        Ok(self)
    }

    /// Returns the plane transformed by `matrix`; see [`Plane::transform`].
    pub fn transformed(&self, matrix: &Matrix4) -> Result<Self, GeomError> {
        let inverse_transpose = matrix.inversed()?.transposed();
        Ok(self.transform_by_inverse_transpose(&inverse_transpose))
    }

    /// Applies an inverse-transpose the caller already holds, skipping the
    /// inversion. Useful when many planes share one transform.
    #[must_use]
    pub fn transform_by_inverse_transpose(&self, inverse_transpose: &Matrix4) -> Self {
        let [a, b, c] = self.normal.to_array();
        let v = inverse_transpose.multiply_vector(&Vector4::new(a, b, c, self.d));
        Self::from_coefficients(v.x(), v.y(), v.z(), v.w())
    }

    /// Compares normal and constant under an explicit tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.normal.approx_eq(&other.normal, tolerance) && tolerance.approx_eq(self.d, other.d)
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::DEFAULT)
    }
}
