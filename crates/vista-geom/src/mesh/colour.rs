// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use vista_math::{clamp, Tolerance};

/// Linear RGBA colour with `f32` channels, nominally in `[0, 1]`.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour {
    data: [f32; 4],
}

impl Colour {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Colour from all four channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { data: [r, g, b, a] }
    }

    /// Opaque colour.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Channels as `[r, g, b, a]`.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Red channel.
    #[must_use]
    pub const fn r(&self) -> f32 {
        self.data[0]
    }

    /// Green channel.
    #[must_use]
    pub const fn g(&self) -> f32 {
        self.data[1]
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(&self) -> f32 {
        self.data[2]
    }

    /// Alpha channel.
    #[must_use]
    pub const fn a(&self) -> f32 {
        self.data[3]
    }

    /// Same colour with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.data[0], self.data[1], self.data[2], a)
    }

    /// Channel-wise clamp to `[0, 1]`.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let [r, g, b, a] = self.data.map(|c| clamp(c, 0.0, 1.0));
        Self::new(r, g, b, a)
    }

    /// Channel-wise comparison under an explicit tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.approx_eq_slice(&self.data, &other.data)
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::WHITE
    }
}

impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::DEFAULT)
    }
}

impl From<[f32; 4]> for Colour {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}
