// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar::{clamp, rad_to_deg, Tolerance, EPSILON};
use crate::vec4::Vector4;

/// 3D direction-and-magnitude vector.
///
/// * Use [`crate::Point3`] for locations; `Point3 - Point3` yields a `Vector3`.
/// * Equality is component-wise within `EPSILON`; use [`Vector3::approx_eq`]
///   to compare with a different [`Tolerance`].
/// * Normalising or dividing a degenerate vector is a no-op, never an error.
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    data: [f32; 3],
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.data[0] = x;
        self
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.data[1] = y;
        self
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, z: f32) -> &mut Self {
        self.data[2] = z;
        self
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product with another vector (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn magnitude(&self) -> f32 {
        self.magnitude_sqr().sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn magnitude_sqr(&self) -> f32 {
        self.dot(self)
    }

    /// Distance between the tips of two vectors.
    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).magnitude()
    }

    /// Returns `true` when the magnitude is within `EPSILON` of zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude() <= EPSILON
    }

    /// Normalises the vector in place.
    ///
    /// A vector whose magnitude is within `EPSILON` of zero is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.magnitude();
        if len <= EPSILON {
            tracing::trace!(magnitude = len, "skipping normalisation of degenerate vector");
            return self;
        }
        let inv = 1.0 / len;
        for c in &mut self.data {
            *c *= inv;
        }
        self
    }

    /// Returns a normalised copy; degenerate vectors are returned unchanged.
    pub fn normalized(&self) -> Self {
        let mut out = *self;
        out.normalize();
        out
    }

    /// Linear interpolation from `a` to `b`; `t` is clamped to `[0, 1]`.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        let t = clamp(t, 0.0, 1.0);
        Self::new(
            a.data[0] + (b.data[0] - a.data[0]) * t,
            a.data[1] + (b.data[1] - a.data[1]) * t,
            a.data[2] + (b.data[2] - a.data[2]) * t,
        )
    }

    /// Angle between two vectors in degrees.
    ///
    /// Both inputs must already be normalised; they are not re-normalised
    /// here. The dot product is clamped to `[-1, 1]` before `acos`.
    pub fn angle_between(u: &Self, v: &Self) -> f32 {
        rad_to_deg(clamp(u.dot(v), -1.0, 1.0).acos())
    }

    /// Component-wise comparison under an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.approx_eq_slice(&self.data, &other.data)
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            self.data[0].min(other.data[0]),
            self.data[1].min(other.data[1]),
            self.data[2].min(other.data[2]),
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.data[0].max(other.data[0]),
            self.data[1].max(other.data[1]),
            self.data[2].max(other.data[2]),
        )
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::DEFAULT)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

/// Divides `xyz` by `w` when `w > 0`; otherwise copies `xyz` unchanged.
impl From<Vector4> for Vector3 {
    fn from(value: Vector4) -> Self {
        value.to_vector3()
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] + rhs.data[0],
            self.data[1] + rhs.data[1],
            self.data[2] + rhs.data[2],
        )
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] - rhs.data[0],
            self.data[1] - rhs.data[1],
            self.data[2] - rhs.data[2],
        )
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2])
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.data[0] * rhs, self.data[1] * rhs, self.data[2] * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

/// Division by a scalar within `EPSILON` of zero returns the vector unchanged.
impl Div<f32> for Vector3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        if rhs.abs() <= EPSILON {
            return self;
        }
        self * (1.0 / rhs)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
