// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Index, Sub, SubAssign};

use crate::scalar::{clamp, Tolerance};
use crate::vec3::Vector3;

/// A location in 3D space.
///
/// Affine rules apply: `Point3 - Point3` is a displacement [`Vector3`],
/// `Point3 ± Vector3` is another `Point3`. Points cannot be added to each
/// other or scaled. Equality is component-wise within `EPSILON`.
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    data: [f32; 3],
}

impl Point3 {
    /// The coordinate origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a point from coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the coordinates as an array.
    pub const fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X coordinate.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y coordinate.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z coordinate.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Sets the X coordinate.
    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.data[0] = x;
        self
    }

    /// Sets the Y coordinate.
    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.data[1] = y;
        self
    }

    /// Sets the Z coordinate.
    pub fn set_z(&mut self, z: f32) -> &mut Self {
        self.data[2] = z;
        self
    }

    /// Position vector from the origin to this point.
    pub const fn to_vector(self) -> Vector3 {
        Vector3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Squared distance to another point.
    pub fn distance_sqr(&self, other: &Self) -> f32 {
        (*self - *other).magnitude_sqr()
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).magnitude()
    }

    /// Linear interpolation from `a` to `b`; `t` is clamped to `[0, 1]`.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        let t = clamp(t, 0.0, 1.0);
        *a + (*b - *a) * t
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

    /// Component-wise comparison under an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.approx_eq_slice(&self.data, &other.data)
    }
}

impl PartialEq for Point3 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::DEFAULT)
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

/// Interprets a vector as the position it reaches from the origin.
impl From<Vector3> for Point3 {
    fn from(value: Vector3) -> Self {
        Self {
            data: value.to_array(),
        }
    }
}

impl From<Point3> for Vector3 {
    fn from(value: Point3) -> Self {
        value.to_vector()
    }
}

impl Index<usize> for Point3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl Sub for Point3 {
    type Output = Vector3;
    fn sub(self, rhs: Self) -> Vector3 {
        Vector3::new(
            self.data[0] - rhs.data[0],
            self.data[1] - rhs.data[1],
            self.data[2] - rhs.data[2],
        )
    }
}

impl Add<Vector3> for Point3 {
    type Output = Self;
    fn add(self, rhs: Vector3) -> Self {
        Self::new(
            self.data[0] + rhs.x(),
            self.data[1] + rhs.y(),
            self.data[2] + rhs.z(),
        )
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Self;
    fn sub(self, rhs: Vector3) -> Self {
        Self::new(
            self.data[0] - rhs.x(),
            self.data[1] - rhs.y(),
            self.data[2] - rhs.z(),
        )
    }
}

impl AddAssign<Vector3> for Point3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl SubAssign<Vector3> for Point3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}
