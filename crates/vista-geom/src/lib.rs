// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Spatial queries for Vista.

This crate provides:
- Planes with signed distance, containment, and inverse-transpose transforms
  (`Plane`).
- A camera-space view frustum with point, sphere, and box culling
  (`Frustum`).
- Parametric rays with plane, triangle, sphere, and box intersection, plus
  unprojection of viewport coordinates for picking (`RayCast`).
- Axis-aligned boxes and spheres (`BoundingCube`, `BoundingSphere`).
- Vertices with optional attributes, triangles, and mesh-level bounding
  volume derivation (`mesh`).
- A narrow line-drawing port for debug visualisation (`debug_draw`).

Design notes:
- Value types only; nothing here allocates except the caller-owned slices
  handed to `mesh`.
- Conventions follow `vista-math`: right-handed, degrees, cameras look down
  the negative Z axis, counter-clockwise front faces.
- Boolean and point-returning intersection queries share one computation, so
  their answers always agree.
"]

/// Line-drawing port for visualising volumes and rays.
pub mod debug_draw;
mod error;
/// Vertices, triangles, and mesh-level bounding volumes.
pub mod mesh;
/// Foundational spatial types.
pub mod types;

pub use error::GeomError;
pub use mesh::colour::Colour;
pub use mesh::triangle::Triangle;
pub use mesh::vertex::{Vertex, VertexLayout, MAX_TEXTURE_UNITS};
pub use types::bounds::{BoundingCube, BoundingSphere};
pub use types::frustum::{Frustum, FrustumSide};
pub use types::plane::Plane;
pub use types::ray::{RayCast, Roots};
