//! Criterion benchmarks for minimum rectangular decomposition.
//! Focus sizes: comb teeth count in {2, 8, 32}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rectkit::api::{decompose_region, Path, Point};

/// A comb with `teeth` rectangular teeth hanging off a horizontal spine, each
/// tooth/gap pair contributing a pair of reflex vertices at its base.
fn comb_path(teeth: usize) -> Path {
    let tooth_width = 1.0;
    let gap_width = 1.0;
    let spine_height = 1.0;
    let tooth_height = 2.0;

    let lo = |i: usize| gap_width * (i as f64 + 1.0) + tooth_width * i as f64;
    let hi = |i: usize| lo(i) + tooth_width;
    let x_max = hi(teeth - 1) + gap_width;

    let mut path = vec![Point::new(0.0, 0.0), Point::new(x_max, 0.0), Point::new(x_max, spine_height)];
    for i in (0..teeth).rev() {
        path.push(Point::new(hi(i), spine_height));
        path.push(Point::new(hi(i), spine_height + tooth_height));
        path.push(Point::new(lo(i), spine_height + tooth_height));
        path.push(Point::new(lo(i), spine_height));
    }
    path.push(Point::new(0.0, spine_height));
    path
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose_region");
    for &teeth in &[2usize, 8, 32] {
        group.bench_with_input(BenchmarkId::new("comb", teeth), &teeth, |b, &teeth| {
            b.iter_batched(
                || vec![comb_path(teeth)],
                |paths| decompose_region(&paths, false).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decompose);
criterion_main!(benches);
