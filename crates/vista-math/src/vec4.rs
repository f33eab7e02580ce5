// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::point3::Point3;
use crate::scalar::{clamp, Tolerance, EPSILON};
use crate::vec3::Vector3;

/// Homogeneous 4D vector.
///
/// The fourth component `w` distinguishes directions (`w = 0`, unaffected by
/// translation) from positions (`w = 1`). Converting back to a [`Vector3`]
/// divides by `w` only when `w > 0`; otherwise `xyz` is copied unchanged.
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4 {
    data: [f32; 4],
}

impl Vector4 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            data: [x, y, z, w],
        }
    }

    /// Extends a [`Vector3`] with an explicit `w`.
    pub const fn from_vector3(v: Vector3, w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Direction (`w = 0`).
    pub const fn direction(v: Vector3) -> Self {
        Self::from_vector3(v, 0.0)
    }

    /// Position (`w = 1`).
    pub const fn position(p: Point3) -> Self {
        Self::new(p.x(), p.y(), p.z(), 1.0)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 4] {
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

    /// Homogeneous W component.
    pub const fn w(&self) -> f32 {
        self.data[3]
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

    /// Sets the W component.
    pub fn set_w(&mut self, w: f32) -> &mut Self {
        self.data[3] = w;
        self
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Four-component magnitude.
    pub fn magnitude(&self) -> f32 {
        self.magnitude_sqr().sqrt()
    }

    /// Squared four-component magnitude.
    pub fn magnitude_sqr(&self) -> f32 {
        self.dot(self)
    }

    /// Normalises all four components in place; no-op for degenerate vectors.
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

    /// Component-wise linear interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        let t = clamp(t, 0.0, 1.0);
        let mut out = *a;
        for (o, (x, y)) in out.data.iter_mut().zip(a.data.iter().zip(b.data.iter())) {
            *o = x + (y - x) * t;
        }
        out
    }

    /// Projects back to 3D: `xyz / w` when `w > 0`, else `xyz` unchanged.
    pub fn to_vector3(&self) -> Vector3 {
        let [x, y, z, w] = self.data;
        if w > 0.0 {
            Vector3::new(x / w, y / w, z / w)
        } else {
            Vector3::new(x, y, z)
        }
    }

    /// The `xyz` part without any homogeneous divide.
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Component-wise comparison under an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.approx_eq_slice(&self.data, &other.data)
    }
}

impl PartialEq for Vector4 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::DEFAULT)
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Add for Vector4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for (o, r) in out.data.iter_mut().zip(rhs.data) {
            *o += r;
        }
        out
    }
}

impl Sub for Vector4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for (o, r) in out.data.iter_mut().zip(rhs.data) {
            *o -= r;
        }
        out
    }
}

impl Neg for Vector4 {
    type Output = Self;
    fn neg(self) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, -w)
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(x * rhs, y * rhs, z * rhs, w * rhs)
    }
}

impl Mul<Vector4> for f32 {
    type Output = Vector4;
    fn mul(self, rhs: Vector4) -> Vector4 {
        rhs * self
    }
}

/// Division by a scalar within `EPSILON` of zero returns the vector unchanged.
impl Div<f32> for Vector4 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        if rhs.abs() <= EPSILON {
            return self;
        }
        self * (1.0 / rhs)
    }
}

impl AddAssign for Vector4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vector4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
