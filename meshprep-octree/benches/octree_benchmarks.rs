//! Benchmarks for octree construction and queries.
//!
//! Run with: cargo bench -p meshprep-octree
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p meshprep-octree -- --save-baseline main
//! 2. After changes: cargo bench -p meshprep-octree -- --baseline main

#![allow(missing_docs, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use meshprep_geometry::{Aabb, Point3, Ray, Triangle, Vector3};
use meshprep_octree::Octree;

/// Generate a grid of small triangles in the z = 0.5 plane of the unit
/// cube, facing -z.
fn triangle_grid(per_axis: usize) -> Vec<Triangle> {
    let step = 1.0 / per_axis as f64;
    let mut triangles = Vec::with_capacity(per_axis * per_axis);

    for i in 0..per_axis {
        for j in 0..per_axis {
            let x = i as f64 * step;
            let y = j as f64 * step;
            triangles.push(Triangle::new(
                Point3::new(x, y, 0.5),
                Point3::new(x + step * 0.5, y + step, 0.5),
                Point3::new(x + step, y, 0.5),
            ));
        }
    }

    triangles
}

fn unit_domain() -> Aabb {
    Aabb::new(Point3::new(0.5, 0.5, 0.5), Vector3::new(0.5, 0.5, 0.5)).buffered(0.01)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_insert");

    for per_axis in [8, 16, 32] {
        let triangles = triangle_grid(per_axis);
        group.throughput(Throughput::Elements(triangles.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(triangles.len()),
            &triangles,
            |b, triangles| {
                b.iter(|| {
                    let mut octree = Octree::new(unit_domain());
                    for &triangle in triangles {
                        octree.insert(black_box(triangle)).unwrap();
                    }
                    black_box(octree.node_count())
                });
            },
        );
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_query");

    let triangles = triangle_grid(32);
    let mut octree = Octree::new(unit_domain());
    for &triangle in &triangles {
        octree.insert(triangle).unwrap();
    }

    let ray = Ray::new(Point3::new(0.3, 0.3, 0.0), Vector3::new(0.0, 0.0, 1.0));
    group.bench_function("ray", |b| {
        b.iter(|| black_box(octree.query(black_box(&ray))));
    });

    let probe = Aabb::new(Point3::new(0.5, 0.5, 0.5), Vector3::new(0.1, 0.1, 0.1));
    group.bench_function("aabb", |b| {
        b.iter(|| black_box(octree.query(black_box(&probe))));
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_query);
criterion_main!(benches);
