// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers shared by every value type: the comparison epsilon, the
//! configurable [`Tolerance`], clamping, and angle conversion.

use std::f32::consts::TAU;

/// Global epsilon used for equality and for detecting degenerate values
/// (zero-length vectors, zero divisors, singular matrices).
pub const EPSILON: f32 = 1e-6;

/// Comparison tolerance for float32 equality.
///
/// Two values `a` and `b` compare equal when
/// `|a - b| <= max(absolute, relative * max(|a|, |b|))`. The default is the
/// purely absolute `EPSILON` used by every `PartialEq` impl in this crate;
/// call sites that need a looser or tighter check pass their own value to the
/// `approx_eq` methods.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    /// Absolute error floor.
    #[cfg_attr(feature = "serde", serde(default = "Tolerance::default_absolute"))]
    pub absolute: f32,
    /// Error allowance proportional to the larger operand magnitude.
    #[cfg_attr(feature = "serde", serde(default))]
    pub relative: f32,
}

impl Tolerance {
    /// Tolerance used by every `PartialEq` implementation.
    pub const DEFAULT: Self = Self {
        absolute: EPSILON,
        relative: 0.0,
    };

    /// Purely absolute tolerance.
    pub const fn absolute(absolute: f32) -> Self {
        Self {
            absolute,
            relative: 0.0,
        }
    }

    /// Tolerance with both an absolute floor and a relative component.
    pub const fn new(absolute: f32, relative: f32) -> Self {
        Self { absolute, relative }
    }

    #[cfg(feature = "serde")]
    const fn default_absolute() -> f32 {
        EPSILON
    }

    /// Largest difference accepted when comparing against `reference`.
    pub fn allowed_error(&self, reference: f32) -> f32 {
        self.absolute.max(self.relative * reference.abs())
    }

    /// Returns `true` when `a` and `b` are equal within this tolerance.
    ///
    /// Identical values always compare equal, infinities included.
    pub fn approx_eq(&self, a: f32, b: f32) -> bool {
        a == b || (a - b).abs() <= self.allowed_error(a.abs().max(b.abs()))
    }

    /// Component-wise [`Tolerance::approx_eq`] over two equally sized slices.
    pub fn approx_eq_slice(&self, a: &[f32], b: &[f32]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.approx_eq(*x, *y))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returns `true` when `a` and `b` differ by at most `EPSILON`.
pub fn approx_eq(a: f32, b: f32) -> bool {
    Tolerance::DEFAULT.approx_eq(a, b)
}

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Cardinal axis selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The X axis (component 0).
    X,
    /// The Y axis (component 1).
    Y,
    /// The Z axis (component 2).
    Z,
}

impl Axis {
    /// All three axes in component order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of this axis.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}
