use criterion::{black_box, criterion_group, criterion_main, Criterion};
use share_recovery::consistency::find_outliers;
use share_recovery::interpolate::constant_term;
use share_recovery::params::DEFAULT_TOLERANCE;
use share_recovery::{Point, PointStore};

// Fixed polynomial so runs are comparable across machines.
fn store(k: usize, n: usize) -> PointStore {
    let points = (1..=n as u64).map(|x| {
        let y = (0..k as u32).fold(0i64, |acc, i| acc * x as i64 + 3 + i as i64);
        Point::new(x, y)
    });
    PointStore::from_points(n, k, points).expect("distinct abscissae")
}

fn bench_constant_term(c: &mut Criterion) {
    let store = store(6, 10);
    c.bench_function("constant_term k=6", |b| {
        b.iter(|| constant_term(black_box(&store)).expect("enough points"));
    });
}

fn bench_find_outliers(c: &mut Criterion) {
    let store = store(6, 10);
    c.bench_function("find_outliers k=6 n=10", |b| {
        b.iter(|| {
            find_outliers(black_box(&store), DEFAULT_TOLERANCE)
                .expect("enough points")
        });
    });
}

criterion_group!(benches, bench_constant_term, bench_find_outliers);
criterion_main!(benches);
