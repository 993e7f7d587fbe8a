//! Fast-path vs. blended-path cost, and the scalar baseline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lanemask::reference::solve_scalar;
use lanemask::{solve, F32x4, SimdFloat};

fn bench_uniform_two_roots(c: &mut Criterion) {
    let a = F32x4::from_slice(&[1.0, 2.0, 0.5, 1.5]);
    let b = F32x4::from_slice(&[0.0, 1.0, -2.0, 3.0]);
    let cc = F32x4::from_slice(&[-4.0, -6.0, -3.0, -1.0]);

    c.bench_function("solve_uniform_two_roots", |bench| {
        bench.iter(|| black_box(solve(black_box(a), black_box(b), black_box(cc))))
    });
}

fn bench_uniform_no_roots(c: &mut Criterion) {
    let a = F32x4::splat(1.0);
    let b = F32x4::splat(0.0);
    let cc = F32x4::splat(4.0);

    c.bench_function("solve_uniform_no_roots", |bench| {
        bench.iter(|| black_box(solve(black_box(a), black_box(b), black_box(cc))))
    });
}

fn bench_mixed_batch(c: &mut Criterion) {
    let a = F32x4::from_slice(&[1.0, 0.0, -2.0, 0.0]);
    let b = F32x4::from_slice(&[0.0, 3.0, 1.0, 0.0]);
    let cc = F32x4::from_slice(&[-4.0, -9.0, 1.0, 7.0]);

    c.bench_function("solve_mixed_batch", |bench| {
        bench.iter(|| black_box(solve(black_box(a), black_box(b), black_box(cc))))
    });
}

fn bench_scalar_reference(c: &mut Criterion) {
    let a = [1.0f32, 0.0, -2.0, 0.0];
    let b = [0.0f32, 3.0, 1.0, 0.0];
    let cc = [-4.0f32, -9.0, 1.0, 7.0];

    c.bench_function("solve_scalar_four_lanes", |bench| {
        bench.iter(|| {
            for lane in 0..4 {
                black_box(solve_scalar(
                    black_box(a[lane]),
                    black_box(b[lane]),
                    black_box(cc[lane]),
                ));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_uniform_two_roots,
    bench_uniform_no_roots,
    bench_mixed_batch,
    bench_scalar_reference
);
criterion_main!(benches);
