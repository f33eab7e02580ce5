// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Debug-draw port shared with external line renderers (physics debug
//! views, editor overlays).
//!
//! The crate never draws anything itself. Helpers decompose volumes into line
//! segments and hand them to a caller-supplied [`LineSink`].

use vista_math::{Matrix4, Point3};

use crate::mesh::colour::Colour;
use crate::types::bounds::BoundingCube;
use crate::types::frustum::Frustum;
use crate::types::ray::RayCast;

/// Receiver for debug line segments.
pub trait LineSink {
    /// Draw one segment from `from` to `to`.
    fn draw_line(&mut self, from: Point3, to: Point3, colour: Colour);
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn draw_line(&mut self, from: Point3, to: Point3, colour: Colour) {
        (**self).draw_line(from, to, colour);
    }
}

/// Adapter that moves every segment by a matrix before forwarding it.
///
/// Use it to draw model- or camera-space volumes in world space, for example
/// a [`Frustum`] through the inverse view matrix.
#[derive(Debug)]
pub struct TransformedSink<S> {
    inner: S,
    matrix: Matrix4,
}

impl<S: LineSink> TransformedSink<S> {
    /// Wraps `inner`, transforming by `matrix`.
    pub fn new(inner: S, matrix: Matrix4) -> Self {
        Self { inner, matrix }
    }

    /// Current transform.
    pub fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// Replaces the transform.
    pub fn set_matrix(&mut self, matrix: Matrix4) -> &mut Self {
        self.matrix = matrix;
        self
    }

    /// Unwraps the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: LineSink> LineSink for TransformedSink<S> {
    fn draw_line(&mut self, from: Point3, to: Point3, colour: Colour) {
        let from = self.matrix.transform_point(&from);
        let to = self.matrix.transform_point(&to);
        self.inner.draw_line(from, to, colour);
    }
}

/// Corner index pairs of the 12 box edges, using the
/// [`BoundingCube::corners`] bit layout.
const CUBE_EDGES: [(usize, usize); 12] = [
    (0b000, 0b001),
    (0b010, 0b011),
    (0b100, 0b101),
    (0b110, 0b111),
    (0b000, 0b010),
    (0b001, 0b011),
    (0b100, 0b110),
    (0b101, 0b111),
    (0b000, 0b100),
    (0b001, 0b101),
    (0b010, 0b110),
    (0b011, 0b111),
];

/// Draws the 12 edges of `cube`. Invalid boxes draw nothing.
pub fn draw_cube(sink: &mut impl LineSink, cube: &BoundingCube, colour: Colour) {
    if !cube.is_valid() {
        return;
    }
    let corners = cube.corners();
    for (a, b) in CUBE_EDGES {
        sink.draw_line(corners[a], corners[b], colour);
    }
}

/// Draws the near and far clip rectangles and the four connecting edges.
pub fn draw_frustum(sink: &mut impl LineSink, frustum: &Frustum, colour: Colour) {
    let near = frustum.near_clip();
    let far = frustum.far_clip();
    for i in 0..4 {
        let j = (i + 1) % 4;
        sink.draw_line(near[i], near[j], colour);
        sink.draw_line(far[i], far[j], colour);
        sink.draw_line(near[i], far[i], colour);
    }
}

/// Draws the ray from its origin to `point_at(length)`.
pub fn draw_ray(sink: &mut impl LineSink, ray: &RayCast, length: f32, colour: Colour) {
    sink.draw_line(ray.origin(), ray.point_at(length), colour);
}
