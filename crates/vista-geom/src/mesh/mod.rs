// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mesh-level utilities over triangle lists supplied by an asset loader.
//!
//! Every volume produced here is in model space. Transform it into world
//! space (see [`BoundingCube::transformed`] and
//! [`BoundingSphere::transformed`]) before culling or picking against it.

use vista_math::Point3;

use crate::error::GeomError;
use crate::types::bounds::{BoundingCube, BoundingSphere};

/// RGBA vertex colour.
pub mod colour;
/// Three-vertex faces.
pub mod triangle;
/// Vertices with optional attributes.
pub mod vertex;

use triangle::Triangle;
use vertex::{Vertex, VertexLayout};

fn positions(triangles: &[Triangle]) -> impl Iterator<Item = Point3> + '_ {
    triangles.iter().flat_map(Triangle::positions)
}

/// Sphere about the model origin reaching the furthest vertex.
///
/// Assumes the mesh is centred near its origin; an empty list yields a zero
/// radius (invalid) sphere.
#[must_use]
pub fn calculate_bounding_sphere(triangles: &[Triangle]) -> BoundingSphere {
    if triangles.is_empty() {
        tracing::trace!("bounding sphere of empty mesh");
    }
    let radius_sqr = positions(triangles)
        .map(|p| p.distance_sqr(&Point3::ORIGIN))
        .fold(0.0_f32, f32::max);
    BoundingSphere::new(Point3::ORIGIN, radius_sqr.sqrt())
}

/// Component-wise min/max over every vertex; empty (invalid) for an empty
/// list.
#[must_use]
pub fn calculate_bounding_box(triangles: &[Triangle]) -> BoundingCube {
    if triangles.is_empty() {
        tracing::trace!("bounding box of empty mesh");
    }
    let mut out = BoundingCube::empty();
    for p in positions(triangles) {
        out.expand_to_include(&p);
    }
    out
}

/// Sphere centred on the bounding-box centre, reaching the furthest vertex.
///
/// Tighter than [`calculate_bounding_sphere`] for meshes offset from their
/// origin.
#[must_use]
pub fn calculate_centred_bounding_sphere(triangles: &[Triangle]) -> BoundingSphere {
    let bounds = calculate_bounding_box(triangles);
    if !bounds.is_valid() {
        return BoundingSphere::default();
    }
    let centre = bounds.centre();
    let radius_sqr = positions(triangles)
        .map(|p| p.distance_sqr(&centre))
        .fold(0.0_f32, f32::max);
    BoundingSphere::new(centre, radius_sqr.sqrt())
}

/// Checks that every vertex in a draw batch shares the first vertex's
/// layout, returning that layout.
///
/// An empty batch is trivially consistent and reports the bare layout.
pub fn validate_batch(vertices: &[Vertex]) -> Result<VertexLayout, GeomError> {
    let Some(first) = vertices.first() else {
        return Ok(VertexLayout::default());
    };
    let layout = first.layout();
    if let Some(index) = vertices.iter().position(|v| v.layout() != layout) {
        tracing::debug!(index, expected = ?layout, "vertex batch layout mismatch");
        return Err(GeomError::IncompatibleVertex { index });
    }
    Ok(layout)
}
