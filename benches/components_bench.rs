use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dgtopo::prelude::*;

type Set2 = BTreeDigitalSet<z2i::Domain>;

/// Random subset of a `side x side` square, each point kept with probability `density`.
fn random_set(side: i64, density: f64, seed: u64) -> Set2 {
    let mut rng = StdRng::seed_from_u64(seed);
    let domain = z2i::Domain::cube(side);
    let pts: Vec<_> = domain.points().filter(|_| rng.r#gen::<f64>() < density).collect();
    Set2::from_points(domain, pts)
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");

    for &side in &[32i64, 64, 128] {
        let set = random_set(side, 0.55, 42);

        group.bench_with_input(BenchmarkId::new("count_4_8", side), &side, |b, _| {
            b.iter(|| {
                let o = DigitalObject::new(z2i::dt4_8(), set.clone());
                black_box(o.count_components());
            });
        });

        group.bench_with_input(BenchmarkId::new("write_8_4", side), &side, |b, _| {
            b.iter(|| {
                let o = DigitalObject::new(z2i::dt8_4(), set.clone());
                let mut sizes = 0usize;
                o.write_components(|comp| sizes += comp.size());
                black_box(sizes);
            });
        });

        group.bench_with_input(BenchmarkId::new("border_4_8", side), &side, |b, _| {
            let o = DigitalObject::new(z2i::dt4_8(), set.clone());
            b.iter(|| black_box(o.border().size()));
        });
    }

    group.finish();
}

fn bench_simple_points(c: &mut Criterion) {
    let set = random_set(64, 0.6, 7);
    let o = DigitalObject::new(z2i::dt8_4(), set);
    let candidates: Vec<_> = o.point_set().iter().collect();

    c.bench_function("is_simple_8_4", |b| {
        b.iter(|| black_box(candidates.iter().filter(|&&v| o.is_simple(v)).count()));
    });
    c.bench_function("is_simple_geodesic_8_4", |b| {
        b.iter(|| {
            black_box(
                candidates
                    .iter()
                    .filter(|&&v| o.is_simple_geodesic(v))
                    .count(),
            )
        });
    });
}

criterion_group!(benches, bench_components, bench_simple_points);
criterion_main!(benches);
