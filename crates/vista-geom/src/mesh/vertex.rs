// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use vista_math::{Point3, Vector2, Vector3};

use crate::error::GeomError;
use crate::mesh::colour::Colour;

/// Number of texture coordinate slots a vertex carries.
pub const MAX_TEXTURE_UNITS: usize = 8;

/// Which optional attributes a vertex carries.
///
/// Two vertices can share a draw batch iff their layouts are equal; values
/// do not matter, only presence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexLayout {
    normal: bool,
    colour: bool,
    tex_units: u8,
}

impl VertexLayout {
    /// Layout with a normal present.
    #[must_use]
    pub const fn has_normal(&self) -> bool {
        self.normal
    }

    /// Layout with a colour present.
    #[must_use]
    pub const fn has_colour(&self) -> bool {
        self.colour
    }

    /// `true` when texture unit `unit` is populated.
    #[must_use]
    pub const fn has_tex_coord(&self, unit: usize) -> bool {
        unit < MAX_TEXTURE_UNITS && self.tex_units & (1 << unit) != 0
    }

    /// Bitmask of populated texture units (bit `n` is unit `n`).
    #[must_use]
    pub const fn tex_unit_mask(&self) -> u8 {
        self.tex_units
    }

    /// Number of populated texture units.
    #[must_use]
    pub const fn tex_unit_count(&self) -> u32 {
        self.tex_units.count_ones()
    }
}

/// Mesh vertex: a position plus optional normal, colour, and per-unit texture
/// coordinates.
///
/// Absence is part of the value and is queried with the `has_*` methods.
///
/// # Examples
/// ```
/// use vista_geom::Vertex;
/// use vista_math::{Point3, Vector2, Vector3};
/// let lit = Vertex::new(Point3::ORIGIN).with_normal(Vector3::UNIT_Y);
/// let plain = Vertex::new(Point3::new(1.0, 0.0, 0.0));
/// assert!(!lit.is_compatible_with(&plain));
/// let uv = plain.with_tex_coord(0, Vector2::new(0.5, 0.5)).unwrap();
/// assert!(uv.has_tex_coord(0));
/// assert!(!uv.has_colour());
/// assert!(Vertex::new(Point3::ORIGIN).with_tex_coord(8, Vector2::ZERO).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    position: Point3,
    normal: Option<Vector3>,
    colour: Option<Colour>,
    tex_coords: [Option<Vector2>; MAX_TEXTURE_UNITS],
}

impl Vertex {
    /// Vertex at `position` with no optional attributes.
    #[must_use]
    pub const fn new(position: Point3) -> Self {
        Self {
            position,
            normal: None,
            colour: None,
            tex_coords: [None; MAX_TEXTURE_UNITS],
        }
    }

    /// Position.
    #[must_use]
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Moves the vertex.
    pub fn set_position(&mut self, position: Point3) -> &mut Self {
        self.position = position;
        self
    }

    /// Normal, if present.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3> {
        self.normal
    }

    /// Colour, if present.
    #[must_use]
    pub fn colour(&self) -> Option<Colour> {
        self.colour
    }

    /// Texture coordinate for `unit`, if present. Out-of-range units read as
    /// absent.
    #[must_use]
    pub fn tex_coord(&self, unit: usize) -> Option<Vector2> {
        self.tex_coords.get(unit).copied().flatten()
    }

    /// Builder form of [`Vertex::set_normal`].
    #[must_use]
    pub fn with_normal(mut self, normal: Vector3) -> Self {
        self.normal = Some(normal);
        self
    }

    /// Builder form of [`Vertex::set_colour`].
    #[must_use]
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = Some(colour);
        self
    }

    /// Builder form of [`Vertex::set_tex_coord`].
    pub fn with_tex_coord(mut self, unit: usize, uv: Vector2) -> Result<Self, GeomError> {
        self.set_tex_coord(unit, uv)?;
        Ok(self)
    }

    /// Attaches a normal.
    pub fn set_normal(&mut self, normal: Vector3) -> &mut Self {
        self.normal = Some(normal);
        self
    }

    /// Attaches a colour.
    pub fn set_colour(&mut self, colour: Colour) -> &mut Self {
        self.colour = Some(colour);
        self
    }

    /// Attaches a texture coordinate to `unit`.
    pub fn set_tex_coord(&mut self, unit: usize, uv: Vector2) -> Result<&mut Self, GeomError> {
        let slot = self
            .tex_coords
            .get_mut(unit)
            .ok_or(GeomError::TextureUnitOutOfRange {
                unit,
                max: MAX_TEXTURE_UNITS,
            })?;
        *slot = Some(uv);
        Ok(self)
    }

    /// Removes the normal.
    pub fn clear_normal(&mut self) -> &mut Self {
        self.normal = None;
        self
    }

    /// Removes the colour.
    pub fn clear_colour(&mut self) -> &mut Self {
        self.colour = None;
        self
    }

    /// Removes the texture coordinate in `unit`; out-of-range units are
    /// already absent.
    pub fn clear_tex_coord(&mut self, unit: usize) -> &mut Self {
        if let Some(slot) = self.tex_coords.get_mut(unit) {
            *slot = None;
        }
        self
    }

    /// `true` when a normal is present.
    #[must_use]
    pub fn has_normal(&self) -> bool {
        self.normal.is_some()
    }

    /// `true` when a colour is present.
    #[must_use]
    pub fn has_colour(&self) -> bool {
        self.colour.is_some()
    }

    /// `true` when `unit` holds a texture coordinate.
    #[must_use]
    pub fn has_tex_coord(&self, unit: usize) -> bool {
        self.tex_coord(unit).is_some()
    }

    /// Presence summary of the optional attributes.
    #[must_use]
    pub fn layout(&self) -> VertexLayout {
        let tex_units = self
            .tex_coords
            .iter()
            .enumerate()
            .filter(|(_, uv)| uv.is_some())
            .fold(0_u8, |mask, (unit, _)| mask | (1 << unit));
        VertexLayout {
            normal: self.has_normal(),
            colour: self.has_colour(),
            tex_units,
        }
    }

    /// `true` when both vertices carry exactly the same set of optional
    /// attributes.
    #[must_use]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.layout() == other.layout()
    }
}

impl From<Point3> for Vertex {
    fn from(position: Point3) -> Self {
        Self::new(position)
    }
}
