// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use proptest::prelude::*;
use vista_geom::{BoundingCube, BoundingSphere, Plane, RayCast, Triangle};
use vista_math::{Matrix4, Point3, Tolerance, Vector3};

const TOL: Tolerance = Tolerance::new(1e-5, 1e-5);

fn unit_sphere() -> BoundingSphere {
    BoundingSphere::new(Point3::ORIGIN, 1.0)
}

#[test]
fn point_at_follows_parametric_form() {
    let ray = RayCast::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 2.0, 0.0));
    assert_eq!(ray.point_at(0.0), Point3::new(1.0, 2.0, 3.0));
    assert_eq!(ray.point_at(1.5), Point3::new(1.0, 5.0, 3.0));
}

#[test]
fn ray_through_sphere_centre_has_two_ascending_roots() {
    let ray = RayCast::new(Point3::new(-5.0, 0.0, 0.0), Vector3::UNIT_X);
    let roots = ray.sphere_intersections(&unit_sphere());
    assert_eq!(roots.len(), 2);
    assert_eq!(roots.as_slice(), &[4.0, 6.0]);
    assert!(ray.intersects_sphere(&unit_sphere()));
    assert_eq!(ray.sphere_intersection_point(&unit_sphere()), Some(Point3::new(-1.0, 0.0, 0.0)));
}

#[test]
fn ray_missing_sphere_has_no_roots() {
    let ray = RayCast::new(Point3::new(-5.0, 2.0, 0.0), Vector3::UNIT_X);
    let roots = ray.sphere_intersections(&unit_sphere());
    assert!(roots.is_empty());
    assert!(!ray.intersects_sphere(&unit_sphere()));
    assert_eq!(ray.sphere_intersection_point(&unit_sphere()), None);
}

#[test]
fn tangent_ray_has_one_root_and_counts_as_hit() {
    let ray = RayCast::new(Point3::new(-5.0, 0.0, 1.0), Vector3::UNIT_X);
    let roots = ray.sphere_intersections(&unit_sphere());
    assert_eq!(roots.len(), 1);
    assert_eq!(roots.nearest(), Some(5.0));
    assert!(ray.intersects_sphere(&unit_sphere()));
}

#[test]
fn origin_inside_sphere_reports_only_exit() {
    let ray = RayCast::new(Point3::ORIGIN, Vector3::UNIT_Y);
    let roots = ray.sphere_intersections(&BoundingSphere::new(Point3::ORIGIN, 2.0));
    assert_eq!(roots.as_slice(), &[2.0]);
}

#[test]
fn sphere_behind_origin_is_missed() {
    let ray = RayCast::new(Point3::new(5.0, 0.0, 0.0), Vector3::UNIT_X);
    assert!(!ray.intersects_sphere(&unit_sphere()));
}

#[test]
fn unnormalised_direction_scales_parameter() {
    let ray = RayCast::new(Point3::new(-5.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0));
    let roots = ray.sphere_intersections(&unit_sphere());
    assert_eq!(roots.as_slice(), &[2.0, 3.0]);
    let hit = ray.sphere_intersection_point(&unit_sphere()).unwrap();
    assert_eq!(hit, Point3::new(-1.0, 0.0, 0.0));
}

#[test]
fn plane_hits_ahead_and_misses_behind_or_parallel() {
    let ground = Plane::new(Vector3::UNIT_Y, Point3::ORIGIN);
    let down = RayCast::new(Point3::new(1.0, 4.0, 2.0), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(down.plane_intersection(&ground), Some(4.0));
    assert!(down.intersects_plane(&ground));
    assert_eq!(down.plane_intersection_point(&ground), Some(Point3::new(1.0, 0.0, 2.0)));

    let up = RayCast::new(Point3::new(1.0, 4.0, 2.0), Vector3::UNIT_Y);
    assert_eq!(up.plane_intersection(&ground), None);
    assert!(!up.intersects_plane(&ground));

    let parallel = RayCast::new(Point3::new(0.0, 1.0, 0.0), Vector3::UNIT_X);
    assert_eq!(parallel.plane_intersection(&ground), None);

    // Approaching from the back side still hits a plane.
    let below = RayCast::new(Point3::new(0.0, -3.0, 0.0), Vector3::UNIT_Y);
    assert_eq!(below.plane_intersection(&ground), Some(3.0));
}

#[test]
fn short_direction_still_intersects() {
    let ray = RayCast::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -0.0005));
    let roots = ray.sphere_intersections(&unit_sphere());
    assert_eq!(roots.len(), 2, "{roots:?}");
    assert!((roots.as_slice()[0] - 8000.0).abs() < 1e-1);
    assert!((roots.as_slice()[1] - 12000.0).abs() < 1e-1);
    let hit = ray.sphere_intersection_point(&unit_sphere()).unwrap();
    assert!(hit.approx_eq(&Point3::new(0.0, 0.0, 1.0), Tolerance::absolute(1e-4)), "{hit:?}");
}

#[test]
fn tiny_sphere_through_centre_has_two_roots() {
    let r = 0.0009;
    let ray = RayCast::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
    let roots = ray.sphere_intersections(&BoundingSphere::new(Point3::ORIGIN, r));
    assert_eq!(roots.len(), 2, "{roots:?}");
    assert!((roots.as_slice()[0] - (5.0 - r)).abs() < 1e-5);
    assert!((roots.as_slice()[1] - (5.0 + r)).abs() < 1e-5);
}

#[test]
fn zero_direction_misses_everything() {
    let ray = RayCast::new(Point3::new(0.0, 0.0, 5.0), Vector3::ZERO);
    assert!(!ray.intersects_sphere(&unit_sphere()));
    let [a, b, c] = floor_triangle();
    assert_eq!(ray.triangle_intersection(&a, &b, &c), None);
}

fn floor_triangle() -> [Point3; 3] {
    // Counter-clockwise seen from +Y.
    [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, -2.0),
        Point3::new(-2.0, 0.0, 0.0),
    ]
}

#[test]
fn triangle_front_face_hit() {
    let [a, b, c] = floor_triangle();
    let n = (b - a).cross(&(c - a));
    assert!(n.y() > 0.0, "fixture winding must face +Y");

    let ray = RayCast::new(Point3::new(-0.5, 3.0, -0.5), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(ray.triangle_intersection(&a, &b, &c), Some(3.0));
    assert!(ray.intersects_triangle(&a, &b, &c));
    assert_eq!(
        ray.triangle_intersection_point(&a, &b, &c),
        Some(Point3::new(-0.5, 0.0, -0.5))
    );
}

#[test]
fn triangle_miss_outside_edges() {
    let [a, b, c] = floor_triangle();
    // Inside the bounding square but beyond the hypotenuse.
    let ray = RayCast::new(Point3::new(-1.5, 3.0, -1.5), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(ray.triangle_intersection(&a, &b, &c), None);
    let beside = RayCast::new(Point3::new(0.5, 3.0, -0.5), Vector3::new(0.0, -1.0, 0.0));
    assert!(!beside.intersects_triangle(&a, &b, &c));
}

#[test]
fn triangle_edges_are_inclusive() {
    let [a, b, c] = floor_triangle();
    let ray = RayCast::new(Point3::new(0.0, 1.0, -1.0), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(ray.triangle_intersection(&a, &b, &c), Some(1.0));
}

#[test]
fn triangle_back_face_and_reversed_winding_are_ignored() {
    let [a, b, c] = floor_triangle();
    let from_below = RayCast::new(Point3::new(-0.5, -3.0, -0.5), Vector3::UNIT_Y);
    assert_eq!(from_below.triangle_intersection(&a, &b, &c), None);
    // Flipping the winding flips the usable side.
    assert_eq!(from_below.triangle_intersection(&a, &c, &b), Some(3.0));
}

#[test]
fn triangle_behind_origin_is_missed() {
    let [a, b, c] = floor_triangle();
    let ray = RayCast::new(Point3::new(-0.5, -3.0, -0.5), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(ray.triangle_intersection(&a, &b, &c), None);
}

#[test]
fn triangle_value_forwards_to_points() {
    let [a, b, c] = floor_triangle();
    let tri = Triangle::from_points(a, b, c);
    let ray = RayCast::new(Point3::new(-0.5, 2.0, -0.5), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(ray.triangle_intersection_for(&tri), Some(2.0));
}

#[test]
fn degenerate_triangle_never_hits() {
    let a = Point3::ORIGIN;
    let ray = RayCast::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(ray.triangle_intersection(&a, &a, &Point3::new(1.0, 0.0, 0.0)), None);
}

#[test]
fn small_triangle_is_hit_from_the_front() {
    let a = Point3::ORIGIN;
    let b = Point3::new(5e-4, 0.0, 0.0);
    let c = Point3::new(0.0, 5e-4, 0.0);
    let ray = RayCast::new(Point3::new(1e-4, 1e-4, 1.0), Vector3::new(0.0, 0.0, -1.0));
    let t = ray.triangle_intersection(&a, &b, &c).unwrap();
    assert!((t - 1.0).abs() < 1e-6);
    // Same triangle from behind.
    let back = RayCast::new(Point3::new(1e-4, 1e-4, -1.0), Vector3::UNIT_Z);
    assert_eq!(back.triangle_intersection(&a, &b, &c), None);
}

#[test]
fn short_direction_hits_large_triangle() {
    let [a, b, c] = floor_triangle();
    let ray = RayCast::new(Point3::new(-0.5, 3.0, -0.5), Vector3::new(0.0, -1e-3, 0.0));
    let t = ray.triangle_intersection(&a, &b, &c).unwrap();
    assert!((t - 3000.0).abs() < 1e-2, "{t}");
}

#[test]
fn grazing_ray_is_rejected() {
    let [a, b, c] = floor_triangle();
    let ray = RayCast::new(Point3::new(-0.4, 1e-8, -0.5), Vector3::new(-1.0, -1e-7, 0.0));
    assert_eq!(ray.triangle_intersection(&a, &b, &c), None);
}

fn unit_cube() -> BoundingCube {
    BoundingCube::new(Point3::new(-0.5, -0.5, -0.5), Point3::new(0.5, 0.5, 0.5))
}

#[test]
fn slab_method_reports_entry_and_exit() {
    let ray = RayCast::new(Point3::new(-3.0, 0.0, 0.0), Vector3::UNIT_X);
    assert_eq!(ray.cube_intersection(&unit_cube()), Some((2.5, 3.5)));
    assert!(ray.intersects_cube(&unit_cube()));
    assert_eq!(ray.cube_intersection_point(&unit_cube()), Some(Point3::new(-0.5, 0.0, 0.0)));
}

#[test]
fn slab_method_handles_diagonals_and_misses() {
    let diagonal = RayCast::new(Point3::new(-2.0, -2.0, -2.0), Vector3::new(1.0, 1.0, 1.0));
    let (enter, exit) = diagonal.cube_intersection(&unit_cube()).unwrap();
    assert!((enter - 1.5).abs() < 1e-6 && (exit - 2.5).abs() < 1e-6);

    let skew = RayCast::new(Point3::new(-3.0, 2.0, 0.0), Vector3::UNIT_X);
    assert_eq!(skew.cube_intersection(&unit_cube()), None);

    // Empty interval: enters the x slab after leaving the y slab.
    let glancing = RayCast::new(Point3::new(-2.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0));
    assert!(!glancing.intersects_cube(&unit_cube()));

    let away = RayCast::new(Point3::new(-3.0, 0.0, 0.0), -Vector3::UNIT_X);
    assert!(!away.intersects_cube(&unit_cube()));
}

#[test]
fn slab_method_clips_to_origin_inside() {
    let ray = RayCast::new(Point3::ORIGIN, Vector3::UNIT_Z);
    assert_eq!(ray.cube_intersection(&unit_cube()), Some((0.0, 0.5)));
    assert_eq!(ray.cube_intersection_point(&unit_cube()), Some(Point3::ORIGIN));
}

#[test]
fn slab_method_rejects_empty_cube() {
    let ray = RayCast::new(Point3::ORIGIN, Vector3::UNIT_Z);
    assert_eq!(ray.cube_intersection(&BoundingCube::empty()), None);
}

#[test]
fn centre_pixel_picks_straight_ahead() {
    let projection = Matrix4::perspective(60.0, 800.0 / 600.0, 0.1, 100.0);
    let ray = RayCast::from_viewport(400.0, 300.0, 800.0, 600.0, &projection);
    assert_eq!(ray.origin(), Point3::ORIGIN);
    assert!(ray.direction().approx_eq(&Vector3::new(0.0, 0.0, -1.0), TOL));
}

#[test]
fn corner_pixels_pick_frustum_edges() {
    let projection = Matrix4::perspective(90.0, 1.0, 0.1, 100.0);
    // Top-left pixel: x = -1, y = +1 in NDC; at fov 90 that is (-1, 1, -1).
    let ray = RayCast::from_viewport(0.0, 0.0, 100.0, 100.0, &projection);
    let expected = Vector3::new(-1.0, 1.0, -1.0).normalized();
    assert!(ray.direction().approx_eq(&expected, TOL), "{:?}", ray.direction());

    let bottom_right = RayCast::from_viewport(100.0, 100.0, 100.0, 100.0, &projection);
    let expected = Vector3::new(1.0, -1.0, -1.0).normalized();
    assert!(bottom_right.direction().approx_eq(&expected, TOL));
}

#[test]
fn picked_point_reprojects_to_same_pixel() {
    let projection = Matrix4::perspective(50.0, 1.6, 0.5, 200.0);
    let ray = RayCast::from_viewport(600.0, 150.0, 1280.0, 800.0, &projection);
    let ndc = projection.transform_point(&ray.point_at(10.0));
    let px = (ndc.x() + 1.0) * 0.5 * 1280.0;
    let py = (1.0 - ndc.y()) * 0.5 * 800.0;
    assert!((px - 600.0).abs() < 1e-2, "{px}");
    assert!((py - 150.0).abs() < 1e-2, "{py}");
}

#[test]
fn transformed_ray_moves_to_world_space() {
    let projection = Matrix4::perspective(60.0, 1.0, 0.1, 100.0);
    let view = Matrix4::look_at(Point3::new(0.0, 0.0, 10.0), Point3::ORIGIN, Vector3::UNIT_Y);
    let pick = RayCast::from_viewport(50.0, 50.0, 100.0, 100.0, &projection);
    let world = pick.transformed(&view.inversed().unwrap());
    assert!(world.origin().approx_eq(&Point3::new(0.0, 0.0, 10.0), TOL));
    assert!(world.intersects_sphere(&unit_sphere()));
    let hit = world.sphere_intersection_point(&unit_sphere()).unwrap();
    assert!(hit.approx_eq(&Point3::new(0.0, 0.0, 1.0), Tolerance::absolute(1e-4)), "{hit:?}");
}

proptest! {
    #[test]
    fn boolean_and_point_queries_agree(
        ox in -5.0f32..5.0, oy in -5.0f32..5.0, oz in -5.0f32..5.0,
        dx in -1.0f32..1.0, dy in -1.0f32..1.0, dz in -1.0f32..1.0,
    ) {
        let ray = RayCast::new(Point3::new(ox, oy, oz), Vector3::new(dx, dy, dz));
        let sphere = BoundingSphere::new(Point3::new(0.5, -0.5, 0.0), 1.5);
        prop_assert_eq!(ray.intersects_sphere(&sphere), ray.sphere_intersection_point(&sphere).is_some());
        prop_assert_eq!(ray.intersects_cube(&unit_cube()), ray.cube_intersection_point(&unit_cube()).is_some());
        let roots = ray.sphere_intersections(&sphere);
        if roots.len() == 2 {
            prop_assert!(roots.as_slice()[0] <= roots.as_slice()[1]);
        }
        prop_assert!(roots.as_slice().iter().all(|t| *t >= 0.0));
        if let Some((enter, exit)) = ray.cube_intersection(&unit_cube()) {
            prop_assert!(0.0 <= enter && enter <= exit);
        }
    }

    #[test]
    fn sphere_roots_scale_inversely_with_direction_length(
        ox in -5.0f32..5.0, oy in -5.0f32..5.0, oz in -5.0f32..5.0,
        dx in -1.0f32..1.0, dy in -1.0f32..1.0, dz in -1.0f32..1.0,
        exponent in -4.0f32..4.0,
    ) {
        let direction = Vector3::new(dx, dy, dz);
        prop_assume!(direction.magnitude() > 0.1);
        let sphere = BoundingSphere::new(Point3::new(0.5, -0.5, 0.0), 1.5);
        let r_sqr = sphere.radius() * sphere.radius();
        let oc = Point3::new(ox, oy, oz) - sphere.centre();
        let unit = direction.normalized();
        let perpendicular = oc - unit * oc.dot(&unit);
        // Keep clear of tangency and of origins sitting on the surface.
        prop_assume!((r_sqr - perpendicular.magnitude_sqr()).abs() > 1e-2 * r_sqr);
        prop_assume!((oc.magnitude_sqr() - r_sqr).abs() > 1e-2);

        let k = 10.0f32.powf(exponent);
        let base = RayCast::new(Point3::new(ox, oy, oz), direction);
        let scaled = RayCast::new(Point3::new(ox, oy, oz), direction * k);
        let base_roots = base.sphere_intersections(&sphere);
        let scaled_roots = scaled.sphere_intersections(&sphere);
        prop_assert_eq!(base_roots.len(), scaled_roots.len());
        prop_assert_eq!(base.intersects_sphere(&sphere), scaled.intersects_sphere(&sphere));
        for (t, u) in base_roots.as_slice().iter().zip(scaled_roots.as_slice()) {
            prop_assert!((u * k - t).abs() <= 1e-3 * t.abs().max(1.0), "{} vs {}", u * k, t);
        }
    }
}
