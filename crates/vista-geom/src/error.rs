// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;
use vista_math::MathError;

/// Errors returned by the checked constructors and validators in this crate.
///
/// The hot-path queries never return these; they are reserved for callers
/// that opt into validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// A matrix operation underneath failed (for example a singular
    /// transform handed to [`crate::Plane::transform`]).
    #[error(transparent)]
    Math(#[from] MathError),
    /// Three points meant to span a plane or triangle are collinear.
    #[error("points are collinear and do not span a plane")]
    CollinearPoints,
    /// Frustum parameters cannot describe a visible volume.
    #[error("invalid frustum parameters (fov {fov}, aspect {aspect}, near {near}, far {far})")]
    InvalidFrustum {
        /// Vertical field of view in degrees.
        fov: f32,
        /// Width over height.
        aspect: f32,
        /// Near clip distance.
        near: f32,
        /// Far clip distance.
        far: f32,
    },
    /// Texture coordinate unit beyond [`crate::MAX_TEXTURE_UNITS`].
    #[error("texture unit {unit} out of range (max {max})")]
    TextureUnitOutOfRange {
        /// Requested unit.
        unit: usize,
        /// Number of supported units.
        max: usize,
    },
    /// A vertex in a batch disagrees with the layout of the first vertex.
    #[error("vertex {index} is incompatible with the batch layout")]
    IncompatibleVertex {
        /// Position of the offending vertex in the batch.
        index: usize,
    },
}
