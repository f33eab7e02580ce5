// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use vista_math::{Point3, Vector3, EPSILON};

use crate::mesh::vertex::Vertex;
use crate::types::plane::Plane;

/// Three vertices in counter-clockwise order (viewed from the front).
///
/// Derived quantities are recomputed on every call; nothing is cached.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    vertices: [Vertex; 3],
}

impl Triangle {
    /// Triangle from three vertices.
    #[must_use]
    pub const fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Triangle from bare positions (no optional attributes).
    #[must_use]
    pub const fn from_points(a: Point3, b: Point3, c: Point3) -> Self {
        Self::new(Vertex::new(a), Vertex::new(b), Vertex::new(c))
    }

    /// All three vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.vertices
    }

    /// Vertex `index` (0, 1, or 2).
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Mutable access to vertex `index`.
    pub fn vertex_mut(&mut self, index: usize) -> Option<&mut Vertex> {
        self.vertices.get_mut(index)
    }

    /// Vertex positions in winding order.
    #[must_use]
    pub fn positions(&self) -> [Point3; 3] {
        self.vertices.map(|v| v.position())
    }

    fn edges(&self) -> (Vector3, Vector3) {
        let [a, b, c] = self.positions();
        (b - a, c - a)
    }

    /// Unit face normal by the right-hand rule; zero for degenerate
    /// triangles.
    #[must_use]
    pub fn calculate_normal(&self) -> Vector3 {
        let (ab, ac) = self.edges();
        let normal = ab.cross(&ac);
        let len = normal.magnitude();
        if is_degenerate(len, &ab, &ac) {
            return normal;
        }
        normal * len.recip()
    }

    /// Surface area.
    #[must_use]
    pub fn calculate_area(&self) -> f32 {
        let (ab, ac) = self.edges();
        ab.cross(&ac).magnitude() * 0.5
    }

    /// Centroid.
    #[must_use]
    pub fn calculate_centre_point(&self) -> Point3 {
        let [a, b, c] = self.positions();
        let sum = a.to_vector() + b.to_vector() + c.to_vector();
        Point3::from(sum / 3.0)
    }

    /// Circumradius `|ab|·|ac|·|bc| / (4·area)`; 0 for degenerate triangles.
    #[must_use]
    pub fn calculate_radius(&self) -> f32 {
        let (ab, ac) = self.edges();
        let twice_area = ab.cross(&ac).magnitude();
        if is_degenerate(twice_area, &ab, &ac) {
            tracing::trace!("circumradius of degenerate triangle");
            return 0.0;
        }
        ab.magnitude() * ac.magnitude() * (ac - ab).magnitude() / (2.0 * twice_area)
    }

    /// Supporting plane, facing the front side.
    #[must_use]
    pub fn plane(&self) -> Plane {
        let [a, b, c] = self.positions();
        Plane::from_points(a, b, c)
    }

    /// `true` when all three vertices share one attribute layout.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let [a, b, c] = &self.vertices;
        a.is_compatible_with(b) && a.is_compatible_with(c)
    }
}

/// Collinear within EPSILON of the sine of the corner angle, independent of scale.
fn is_degenerate(twice_area: f32, ab: &Vector3, ac: &Vector3) -> bool {
    twice_area <= EPSILON * ab.magnitude() * ac.magnitude()
}
