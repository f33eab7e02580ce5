// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use vista_math::{Axis, Matrix4, Point3, Vector3};

/// Axis-aligned box given by its minimum and maximum corners.
///
/// Invariants:
/// - The box is valid iff `min <= max` component-wise. An invalid box is the
///   legitimate empty state, not an error: [`BoundingCube::empty`] starts
///   there and grows with [`BoundingCube::expand_to_include`].
/// - Containment and overlap are inclusive on faces.
/// - Extents, areas, and volume are only meaningful for valid boxes.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingCube {
    min: Point3,
    max: Point3,
}

impl BoundingCube {
    /// Box from its corners, stored as given.
    #[must_use]
    pub const fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// The empty box: `min = +inf`, `max = -inf`.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point; empty for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Self {
        let mut out = Self::empty();
        for p in points {
            out.expand_to_include(p);
        }
        out
    }

    /// Minimum corner.
    #[must_use]
    pub fn min(&self) -> Point3 {
        self.min
    }

    /// Maximum corner.
    #[must_use]
    pub fn max(&self) -> Point3 {
        self.max
    }

    /// Replaces the minimum corner.
    pub fn set_min(&mut self, min: Point3) -> &mut Self {
        self.min = min;
        self
    }

    /// Replaces the maximum corner.
    pub fn set_max(&mut self, max: Point3) -> &mut Self {
        self.max = max;
        self
    }

    /// `true` iff `min <= max` on every axis.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Axis::ALL.iter().all(|a| self.min[a.index()] <= self.max[a.index()])
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn is_point_inside(&self, point: &Point3) -> bool {
        Axis::ALL.iter().all(|a| {
            let i = a.index();
            point[i] >= self.min[i] && point[i] <= self.max[i]
        })
    }

    /// Size along `axis`.
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f32 {
        self.max[axis.index()] - self.min[axis.index()]
    }

    /// Size along X.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.extent(Axis::X)
    }

    /// Size along Y.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.extent(Axis::Y)
    }

    /// Size along Z.
    #[must_use]
    pub fn depth(&self) -> f32 {
        self.extent(Axis::Z)
    }

    /// Area of one face perpendicular to `axis`.
    #[must_use]
    pub fn face_area(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.height() * self.depth(),
            Axis::Y => self.width() * self.depth(),
            Axis::Z => self.width() * self.height(),
        }
    }

    /// Total area of all six faces.
    #[must_use]
    pub fn surface_area(&self) -> f32 {
        2.0 * Axis::ALL.iter().map(|a| self.face_area(*a)).sum::<f32>()
    }

    /// Enclosed volume.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.width() * self.height() * self.depth()
    }

    /// Midpoint of the two corners.
    #[must_use]
    pub fn centre(&self) -> Point3 {
        Point3::lerp(&self.min, &self.max, 0.5)
    }

    /// The eight corners, indexed by bits `0bzyx` (bit set selects `max`).
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        let mut out = [Point3::ORIGIN; 8];
        for (index, corner) in out.iter_mut().enumerate() {
            let pick = |bit: usize, axis: Axis| {
                if (index >> bit) & 1 == 0 {
                    self.min[axis.index()]
                } else {
                    self.max[axis.index()]
                }
            };
            *corner = Point3::new(pick(0, Axis::X), pick(1, Axis::Y), pick(2, Axis::Z));
        }
        out
    }

    /// Grows the box to contain `point`.
    pub fn expand_to_include(&mut self, point: &Point3) -> &mut Self {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
        self
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// `true` when the boxes share any point, faces included.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.is_valid()
            && other.is_valid()
            && Axis::ALL.iter().all(|a| {
                let i = a.index();
                self.max[i] >= other.min[i] && self.min[i] <= other.max[i]
            })
    }

    /// Box grown by `margin` on every side.
    #[must_use]
    pub fn inflate(&self, margin: f32) -> Self {
        let delta = Vector3::new(margin, margin, margin);
        Self {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    /// Axis-aligned bounds of this box after `matrix` moves its corners.
    ///
    /// Invalid boxes are returned unchanged.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        if !self.is_valid() {
            return *self;
        }
        let mut out = Self::empty();
        for corner in &self.corners() {
            out.expand_to_include(&matrix.transform_point(corner));
        }
        out
    }
}

impl Default for BoundingCube {
    fn default() -> Self {
        Self::empty()
    }
}

/// Sphere given by centre and radius.
///
/// A sphere is valid iff `radius > 0`; containment is inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingSphere {
    centre: Point3,
    radius: f32,
}

impl BoundingSphere {
    /// Sphere from centre and radius.
    #[must_use]
    pub const fn new(centre: Point3, radius: f32) -> Self {
        Self { centre, radius }
    }

    /// Sphere circumscribing `cube`.
    #[must_use]
    pub fn from_cube(cube: &BoundingCube) -> Self {
        Self {
            centre: cube.centre(),
            radius: cube.min.distance(&cube.max) * 0.5,
        }
    }

    /// Centre point.
    #[must_use]
    pub fn centre(&self) -> Point3 {
        self.centre
    }

    /// Radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Moves the centre.
    pub fn set_centre(&mut self, centre: Point3) -> &mut Self {
        self.centre = centre;
        self
    }

    /// Replaces the radius.
    pub fn set_radius(&mut self, radius: f32) -> &mut Self {
        self.radius = radius;
        self
    }

    /// `true` iff the radius is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.radius > 0.0
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn is_point_inside(&self, point: &Point3) -> bool {
        self.centre.distance_sqr(point) <= self.radius * self.radius
    }

    /// `true` when the spheres touch or overlap.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let reach = self.radius + other.radius;
        self.centre.distance_sqr(&other.centre) <= reach * reach
    }

    /// Sphere enclosing this one after `matrix`.
    ///
    /// The centre is transformed as a point; the radius is scaled by the
    /// longest basis column, which bounds any non-uniform scale.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        let scale = (0..3)
            .map(|col| matrix.column(col).xyz().magnitude())
            .fold(0.0_f32, f32::max);
        Self {
            centre: matrix.transform_point(&self.centre),
            radius: self.radius * scale,
        }
    }
}
