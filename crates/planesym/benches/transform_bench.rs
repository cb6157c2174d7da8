//! Criterion benchmarks for shape transforms and invariance checks.
//! Focus sizes: vertex counts in {8, 64, 512, 4096}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use planesym::{reflect, rotate, Line2, Shape, Transform2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_polyline(n: usize, seed: u64) -> Shape {
    let mut rng = StdRng::seed_from_u64(seed);
    let pts = (0..n)
        .map(|_| Vector2::new(rng.gen_range(-20.0..20.0), rng.gen_range(-14.0..14.0)))
        .collect();
    Shape::polyline(pts)
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let line = Line2::from_angle_deg(37.0);
    for &n in &[8usize, 64, 512, 4096] {
        group.bench_with_input(BenchmarkId::new("reflect_shape", n), &n, |b, &n| {
            let r = reflect(line);
            b.iter_batched(
                || random_polyline(n, 43),
                |s| {
                    let _out = r.transform_shape(&s);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("rotate_shape", n), &n, |b, &n| {
            let r = rotate(1.1);
            b.iter_batched(
                || random_polyline(n, 44),
                |s| {
                    let _out = r.transform_shape(&s);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_invariance(c: &mut Criterion) {
    let mut group = c.benchmark_group("invariance");
    for &n in &[8usize, 64, 256] {
        group.bench_with_input(BenchmarkId::new("regular_ngon", n), &n, |b, &n| {
            let poly = Shape::regular_ngon(n, 10.0).expect("valid polygon");
            let r = rotate(std::f64::consts::TAU / n as f64);
            b.iter(|| poly.is_invariant_under(&r, 1e-9))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transforms, bench_invariance);
criterion_main!(benches);
