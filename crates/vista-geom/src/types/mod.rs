// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core spatial types: planes, frustum, rays, and bounding volumes.
//!
//! Containment notes:
//! - Every "inside" query is inclusive, so points on a boundary count as
//!   inside.
//! - Sphere "inside" forms demand full containment; the frustum's
//!   `intersects_*` forms are the conservative culling variants.

#[doc = "Axis-aligned boxes and spheres."]
pub mod bounds;
#[doc = "Camera-space view frustum."]
pub mod frustum;
#[doc = "Oriented planes."]
pub mod plane;
#[doc = "Parametric rays and intersection queries."]
pub mod ray;
