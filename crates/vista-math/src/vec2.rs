// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, Mul, Neg, Sub};

use crate::scalar::{clamp, Tolerance, EPSILON};

/// 2D vector, used mainly for per-vertex texture coordinates.
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    data: [f32; 2],
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// X (or U) component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y (or V) component.
    pub const fn y(&self) -> f32 {
        self.data[1]
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

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1]
    }

    /// Vector length.
    pub fn magnitude(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalises in place; no-op when the magnitude is within `EPSILON` of zero.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.magnitude();
        if len <= EPSILON {
            tracing::trace!(magnitude = len, "skipping normalisation of degenerate vector");
            return self;
        }
        self.data[0] /= len;
        self.data[1] /= len;
        self
    }

    /// Linear interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        let t = clamp(t, 0.0, 1.0);
        Self::new(
            a.data[0] + (b.data[0] - a.data[0]) * t,
            a.data[1] + (b.data[1] - a.data[1]) * t,
        )
    }

    /// Component-wise comparison under an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.approx_eq_slice(&self.data, &other.data)
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::DEFAULT)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.data[0] + rhs.data[0], self.data[1] + rhs.data[1])
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.data[0] - rhs.data[0], self.data[1] - rhs.data[1])
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.data[0], -self.data[1])
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.data[0] * rhs, self.data[1] * rhs)
    }
}
