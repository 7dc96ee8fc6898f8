use criterion::{Criterion, black_box, criterion_group, criterion_main};
use xuankong_compass::{Mountain, Sector, jian_neighbor, normalize_angle, period_from_year};

fn ring_bench(c: &mut Criterion) {
    let bearing = 184.7;

    let mut group = c.benchmark_group("ring");
    group.bench_function("normalize_angle", |b| {
        b.iter(|| normalize_angle(black_box(-1234.5)))
    });
    group.bench_function("mountain_from_angle", |b| {
        b.iter(|| Mountain::from_angle(black_box(bearing)))
    });
    group.bench_function("sector_from_angle", |b| {
        b.iter(|| Sector::from_angle(black_box(bearing)))
    });
    group.bench_function("jian_neighbor", |b| {
        b.iter(|| jian_neighbor(black_box(bearing), Mountain::Wu, 4.5))
    });
    group.finish();
}

fn calendar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar");
    group.bench_function("period_from_year", |b| {
        b.iter(|| period_from_year(black_box(2024)))
    });
    group.finish();
}

criterion_group!(benches, ring_bench, calendar_bench);
criterion_main!(benches);
