use casechart_core::{build_series, CaseRecord, ChartState, ValueField};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_records(n: usize) -> Vec<CaseRecord> {
    (0..n)
        .map(|i| CaseRecord::new(format!("{}/{}", i / 31 % 12 + 1, i % 31 + 1), (i % 500) as u64, (i % 520) as u64))
        .collect()
}

fn bench_build_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_series");
    for &n in &[1_000usize, 100_000usize] {
        let records = gen_records(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, r| {
            b.iter(|| black_box(build_series(r, ValueField::Reported, "reported count")));
        });
    }
    group.finish();
}

fn bench_active_series_grouped(c: &mut Criterion) {
    let records = gen_records(100_000);
    let mut state = ChartState::new();
    state.toggle();
    c.bench_function("active_series_grouped_100k", |b| {
        b.iter(|| black_box(state.active_series(&records)));
    });
}

criterion_group!(benches, bench_build_series, bench_active_series_grouped);
criterion_main!(benches);
