// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use vista_math::{deg_to_rad, Point3, Vector3};

use crate::error::GeomError;
use crate::types::bounds::{BoundingCube, BoundingSphere};
use crate::types::plane::Plane;

/// Identifies one of the six frustum planes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrustumSide {
    /// Near clip plane (`z = -near`).
    Near,
    /// Far clip plane (`z = -far`).
    Far,
    /// Left side plane through the eye.
    Left,
    /// Right side plane through the eye.
    Right,
    /// Top side plane through the eye.
    Top,
    /// Bottom side plane through the eye.
    Bottom,
}

impl FrustumSide {
    /// Every side in storage order.
    pub const ALL: [Self; 6] = [
        Self::Near,
        Self::Far,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
    ];

    /// Storage index of this side in [`Frustum::planes`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Near => 0,
            Self::Far => 1,
            Self::Left => 2,
            Self::Right => 3,
            Self::Top => 4,
            Self::Bottom => 5,
        }
    }
}

/// Camera-space view frustum: six inward-facing planes and the eight clip
/// corners, all derived from the projection parameters.
///
/// Conventions match [`vista_math::build::build_perspective`]: the eye sits at
/// the origin looking down −Z, `fov` is the vertical field of view in
/// degrees, and `aspect` is width over height. Clip corners are ordered
/// top-left, top-right, bottom-right, bottom-left.
///
/// Every plane normal points into the volume, so each containment query is a
/// uniform non-negative distance test. Test world-space geometry by first
/// moving it into camera space with the view matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum {
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    planes: [Plane; 6],
    near_clip: [Point3; 4],
    far_clip: [Point3; 4],
}

impl Frustum {
    /// Builds the frustum for the given projection parameters.
    ///
    /// Parameters are not validated; see [`Frustum::try_new`].
    #[must_use]
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let eye = Plane::new(Vector3::UNIT_Z, Point3::ORIGIN);
        let mut out = Self {
            fov,
            aspect,
            near,
            far,
            planes: [eye; 6],
            near_clip: [Point3::ORIGIN; 4],
            far_clip: [Point3::ORIGIN; 4],
        };
        out.init(fov, aspect, near, far);
        out
    }

    /// Checked form of [`Frustum::new`].
    ///
    /// Requires finite values with `0 < fov < 180`, `aspect > 0`, and
    /// `0 < near < far`.
    pub fn try_new(fov: f32, aspect: f32, near: f32, far: f32) -> Result<Self, GeomError> {
        let finite = [fov, aspect, near, far].iter().all(|v| v.is_finite());
        if !finite || fov <= 0.0 || fov >= 180.0 || aspect <= 0.0 || near <= 0.0 || far <= near {
            tracing::debug!(fov, aspect, near, far, "rejected frustum parameters");
            return Err(GeomError::InvalidFrustum {
                fov,
                aspect,
                near,
                far,
            });
        }
        Ok(Self::new(fov, aspect, near, far))
    }

    /// Recomputes every plane and corner from scratch.
    pub fn init(&mut self, fov: f32, aspect: f32, near: f32, far: f32) -> &mut Self {
        self.fov = fov;
        self.aspect = aspect;
        self.near = near;
        self.far = far;

        let tan_half = (deg_to_rad(fov) * 0.5).tan();
        self.near_clip = clip_corners(near, tan_half, aspect);
        self.far_clip = clip_corners(far, tan_half, aspect);

        let [ntl, ntr, nbr, _] = self.near_clip;
        let [ftl, ftr, fbr, fbl] = self.far_clip;
        let eye = Point3::ORIGIN;
        self.planes[FrustumSide::Near.index()] = Plane::from_points(ntl, ntr, nbr);
        self.planes[FrustumSide::Far.index()] = Plane::from_points(ftl, fbl, fbr);
        self.planes[FrustumSide::Left.index()] = Plane::from_points(eye, fbl, ftl);
        self.planes[FrustumSide::Right.index()] = Plane::from_points(eye, ftr, fbr);
        self.planes[FrustumSide::Top.index()] = Plane::from_points(eye, ftl, ftr);
        self.planes[FrustumSide::Bottom.index()] = Plane::from_points(eye, fbr, fbl);
        self
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clip distance.
    #[must_use]
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip distance.
    #[must_use]
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Changes the field of view and rebuilds.
    pub fn set_fov(&mut self, fov: f32) -> &mut Self {
        self.init(fov, self.aspect, self.near, self.far)
    }

    /// Changes the aspect ratio and rebuilds.
    pub fn set_aspect(&mut self, aspect: f32) -> &mut Self {
        self.init(self.fov, aspect, self.near, self.far)
    }

    /// Changes the near distance and rebuilds.
    pub fn set_near(&mut self, near: f32) -> &mut Self {
        self.init(self.fov, self.aspect, near, self.far)
    }

    /// Changes the far distance and rebuilds.
    pub fn set_far(&mut self, far: f32) -> &mut Self {
        self.init(self.fov, self.aspect, self.near, far)
    }

    /// One bounding plane.
    #[must_use]
    pub fn plane(&self, side: FrustumSide) -> &Plane {
        &self.planes[side.index()]
    }

    /// All six planes, indexed by [`FrustumSide::index`].
    #[must_use]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Near clip corners (TL, TR, BR, BL).
    #[must_use]
    pub fn near_clip(&self) -> &[Point3; 4] {
        &self.near_clip
    }

    /// Far clip corners (TL, TR, BR, BL).
    #[must_use]
    pub fn far_clip(&self) -> &[Point3; 4] {
        &self.far_clip
    }

    /// `true` when `point` is inside or on every plane.
    #[must_use]
    pub fn inside(&self, point: &Point3) -> bool {
        self.planes.iter().all(|p| p.inside(point))
    }

    /// `true` when the sphere at `point` is entirely inside.
    #[must_use]
    pub fn inside_radius(&self, point: &Point3, radius: f32) -> bool {
        self.planes.iter().all(|p| p.inside_radius(point, radius))
    }

    /// [`Frustum::inside_radius`] for a [`BoundingSphere`].
    #[must_use]
    pub fn inside_sphere(&self, sphere: &BoundingSphere) -> bool {
        self.inside_radius(&sphere.centre(), sphere.radius())
    }

    /// `true` when all of `cube` is inside.
    ///
    /// Checks, per plane, the corner furthest against the normal.
    #[must_use]
    pub fn inside_cube(&self, cube: &BoundingCube) -> bool {
        self.planes
            .iter()
            .all(|p| p.inside(&support_corner(cube, p, false)))
    }

    /// `false` only when the sphere is entirely outside some plane.
    ///
    /// Conservative: spheres near a frustum edge may pass while outside.
    #[must_use]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        let centre = sphere.centre();
        self.planes
            .iter()
            .all(|p| p.distance(&centre) + sphere.radius() >= 0.0)
    }

    /// `false` only when `cube` is entirely outside some plane.
    ///
    /// Checks, per plane, the corner furthest along the normal.
    #[must_use]
    pub fn intersects_cube(&self, cube: &BoundingCube) -> bool {
        self.planes
            .iter()
            .all(|p| p.inside(&support_corner(cube, p, true)))
    }
}

fn clip_corners(distance: f32, tan_half: f32, aspect: f32) -> [Point3; 4] {
    let h = distance * tan_half;
    let w = h * aspect;
    let z = -distance;
    [
        Point3::new(-w, h, z),
        Point3::new(w, h, z),
        Point3::new(w, -h, z),
        Point3::new(-w, -h, z),
    ]
}

/// Corner of `cube` furthest along (`positive`) or against the plane normal.
fn support_corner(cube: &BoundingCube, plane: &Plane, positive: bool) -> Point3 {
    let n = plane.normal();
    let (min, max) = (cube.min(), cube.max());
    let pick = |i: usize| {
        if (n[i] >= 0.0) == positive {
            max[i]
        } else {
            min[i]
        }
    };
    Point3::new(pick(0), pick(1), pick(2))
}
