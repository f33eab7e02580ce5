// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: picking rays against spheres, boxes, and triangles.
//!
//! Rays are built with `RayCast::from_viewport` over random pixels and moved
//! into world space, the same path an editor pick takes.
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vista_geom::{BoundingCube, BoundingSphere, RayCast};
use vista_math::{Matrix4, Point3, Vector3};

const SEED: u64 = 0x5649_5354_412d_7279;
const RAYS: usize = 512;

fn picking_rays() -> Vec<RayCast> {
    let projection = Matrix4::perspective(60.0, 16.0 / 9.0, 0.1, 500.0);
    let view = Matrix4::look_at(Point3::new(0.0, 5.0, 20.0), Point3::ORIGIN, Vector3::UNIT_Y);
    let to_world = view.inversed().unwrap_or(Matrix4::IDENTITY);
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..RAYS)
        .map(|_| {
            let x = rng.gen_range(0.0..1920.0);
            let y = rng.gen_range(0.0..1080.0);
            RayCast::from_viewport(x, y, 1920.0, 1080.0, &projection).transformed(&to_world)
        })
        .collect()
}

fn bench_ray_cast(c: &mut Criterion) {
    let rays = picking_rays();
    let sphere = BoundingSphere::new(Point3::ORIGIN, 4.0);
    let cube = BoundingCube::new(Point3::new(-4.0, -4.0, -4.0), Point3::new(4.0, 4.0, 4.0));
    let tri = [
        Point3::new(-6.0, -3.0, 0.0),
        Point3::new(6.0, -3.0, 0.0),
        Point3::new(0.0, 6.0, 0.0),
    ];

    let mut group = c.benchmark_group("ray_cast");
    group.bench_function("sphere", |b| {
        b.iter(|| rays.iter().filter(|r| r.intersects_sphere(&sphere)).count());
    });
    group.bench_function("cube_slab", |b| {
        b.iter(|| rays.iter().filter(|r| r.intersects_cube(&cube)).count());
    });
    group.bench_function("triangle", |b| {
        b.iter(|| {
            rays.iter()
                .filter(|r| r.intersects_triangle(&tri[0], &tri[1], &tri[2]))
                .count()
        });
    });
    group.bench_function("from_viewport", |b| {
        let projection = Matrix4::perspective(60.0, 16.0 / 9.0, 0.1, 500.0);
        b.iter_batched(
            || (960.0_f32, 540.0_f32),
            |(x, y)| RayCast::from_viewport(x, y, 1920.0, 1080.0, &projection),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_ray_cast);
criterion_main!(benches);
