// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Vista math core.

This crate provides:
- Vector and point primitives (`Vector2`, `Vector3`, `Vector4`, `Point3`).
- A column-major 4x4 transform matrix (`Matrix4`) with two independent
  inversion algorithms (cofactor expansion and Cramer's rule).
- Named-constructor factory functions for rotation, translation, scale,
  look-at, perspective, and orthographic matrices (`build`).

Design notes:
- Value types only: every operation either returns a new value or mutates the
  receiver in place and returns it for chaining.
- Float32 throughout. Equality is tolerance-based (`EPSILON`, `Tolerance`),
  never bitwise.
- Degenerate inputs (zero vectors, zero axes, zero divisors) are silent
  no-ops; matrix inversion is the only fallible operation.
"]

pub mod build;
mod error;
mod mat4;
mod point3;
mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat4::Matrix4;
pub use point3::Point3;
pub use scalar::{approx_eq, clamp, deg_to_rad, rad_to_deg, Axis, Tolerance, EPSILON};
pub use vec2::Vector2;
pub use vec3::Vector3;
pub use vec4::Vector4;
