// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use vista_geom::{BoundingCube, BoundingSphere, Frustum, FrustumSide, GeomError};
use vista_math::{deg_to_rad, Point3, Vector3};

fn camera() -> Frustum {
    Frustum::new(45.0, 4.0 / 3.0, 1.0, 100.0)
}

#[test]
fn off_axis_point_between_clip_planes_is_inside() {
    let f = camera();
    // Looking down -Z, z = 0 is the eye plane and the near plane sits at z = -1.
    assert!(f.inside(&Point3::new(0.0, 0.25, -2.0)));
    assert!(f.inside(&Point3::new(0.0, 0.0, -50.0)));
}

#[test]
fn far_away_point_is_outside() {
    assert!(!camera().inside(&Point3::new(100000.0, 100000.0, -100000.0)));
}

#[test]
fn eye_plane_points_are_outside() {
    // z = 0 sits between the eye and the near plane.
    let f = camera();
    assert!(!f.inside(&Point3::new(0.0, 0.25, 0.0)));
    assert!(!f.inside(&Point3::ORIGIN));
}

#[test]
fn each_plane_rejects_its_own_side() {
    let f = camera();
    let cases = [
        (FrustumSide::Near, Point3::new(0.0, 0.0, -0.5)),
        (FrustumSide::Far, Point3::new(0.0, 0.0, -150.0)),
        (FrustumSide::Left, Point3::new(-40.0, 0.0, -10.0)),
        (FrustumSide::Right, Point3::new(40.0, 0.0, -10.0)),
        (FrustumSide::Top, Point3::new(0.0, 40.0, -10.0)),
        (FrustumSide::Bottom, Point3::new(0.0, -40.0, -10.0)),
    ];
    for (side, point) in cases {
        assert!(!f.plane(side).inside(&point), "{side:?} should reject {point:?}");
        for other in FrustumSide::ALL.iter().filter(|s| **s != side) {
            assert!(f.plane(*other).inside(&point), "{other:?} should accept {point:?}");
        }
        assert!(!f.inside(&point));
    }
}

#[test]
fn all_normals_point_inward() {
    let f = camera();
    let centre = Point3::new(0.0, 0.0, -50.5);
    for plane in f.planes() {
        assert!(plane.distance(&centre) > 0.0, "{plane:?}");
        assert!((plane.normal().magnitude() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn corners_follow_field_of_view() {
    let f = camera();
    let half_h = deg_to_rad(22.5).tan();
    let half_w = half_h * 4.0 / 3.0;
    let near = f.near_clip();
    assert_eq!(near[0], Point3::new(-half_w, half_h, -1.0));
    assert_eq!(near[1], Point3::new(half_w, half_h, -1.0));
    assert_eq!(near[2], Point3::new(half_w, -half_h, -1.0));
    assert_eq!(near[3], Point3::new(-half_w, -half_h, -1.0));
    let far = f.far_clip();
    assert!(far[0].approx_eq(
        &Point3::new(-half_w * 100.0, half_h * 100.0, -100.0),
        vista_math::Tolerance::new(1e-4, 1e-5)
    ));
    // Corners lie on their bounding planes.
    for corner in near.iter().chain(far.iter()) {
        for plane in f.planes() {
            assert!(plane.distance(corner) > -1e-3, "{corner:?} outside {plane:?}");
        }
    }
}

#[test]
fn sphere_inside_requires_full_containment() {
    let f = camera();
    let centre = Point3::new(0.0, 0.0, -10.0);
    assert!(f.inside_radius(&centre, 1.0));
    assert!(f.inside_sphere(&BoundingSphere::new(centre, 1.0)));
    // Straddles the near plane.
    let straddling = BoundingSphere::new(Point3::new(0.0, 0.0, -1.5), 1.0);
    assert!(!f.inside_sphere(&straddling));
    assert!(f.intersects_sphere(&straddling));
    // Entirely behind the camera.
    let behind = BoundingSphere::new(Point3::new(0.0, 0.0, 5.0), 1.0);
    assert!(!f.intersects_sphere(&behind));
}

#[test]
fn cube_tests_use_extreme_corners() {
    let f = camera();
    let inside = BoundingCube::new(Point3::new(-1.0, -1.0, -20.0), Point3::new(1.0, 1.0, -10.0));
    assert!(f.inside_cube(&inside));
    assert!(f.intersects_cube(&inside));

    let straddling = BoundingCube::new(Point3::new(-1.0, -1.0, -120.0), Point3::new(1.0, 1.0, -90.0));
    assert!(!f.inside_cube(&straddling));
    assert!(f.intersects_cube(&straddling));

    let outside = BoundingCube::new(Point3::new(50.0, -1.0, -20.0), Point3::new(60.0, 1.0, -10.0));
    assert!(!f.inside_cube(&outside));
    assert!(!f.intersects_cube(&outside));
}

#[test]
fn setters_rebuild_state() {
    let mut f = camera();
    let probe = Point3::new(0.0, 0.0, -150.0);
    assert!(!f.inside(&probe));
    f.set_far(200.0);
    assert!(f.inside(&probe));
    assert_eq!(f.far(), 200.0);
    assert_eq!(f.far_clip()[0].z(), -200.0);

    let wide = Point3::new(9.0, 0.0, -10.0);
    assert!(!f.inside(&wide));
    f.set_fov(90.0).set_aspect(2.0);
    assert!(f.inside(&wide));
    assert_eq!((f.fov(), f.aspect()), (90.0, 2.0));

    f.set_near(20.0);
    assert!(!f.inside(&wide));
    assert_eq!(f, Frustum::new(90.0, 2.0, 20.0, 200.0));
}

#[test]
fn init_is_idempotent() {
    let mut f = camera();
    let before = f;
    f.init(45.0, 4.0 / 3.0, 1.0, 100.0);
    assert_eq!(f, before);
    assert_eq!(f.plane(FrustumSide::Near).normal(), Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(f.plane(FrustumSide::Far).normal(), Vector3::UNIT_Z);
}

#[test]
fn checked_constructor_rejects_bad_parameters() {
    assert!(Frustum::try_new(45.0, 4.0 / 3.0, 1.0, 100.0).is_ok());
    for (fov, aspect, near, far) in [
        (0.0, 1.0, 1.0, 10.0),
        (180.0, 1.0, 1.0, 10.0),
        (60.0, 0.0, 1.0, 10.0),
        (60.0, 1.0, 0.0, 10.0),
        (60.0, 1.0, 10.0, 10.0),
        (60.0, 1.0, 1.0, f32::NAN),
    ] {
        assert!(
            matches!(Frustum::try_new(fov, aspect, near, far), Err(GeomError::InvalidFrustum { .. })),
            "({fov}, {aspect}, {near}, {far})"
        );
    }
}
