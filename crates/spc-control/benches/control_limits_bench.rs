use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spc_control::{
    ControlLimitCalculator, IndividualControlLimitCalculator, LimitCalculator,
    OutOfControlDetector,
};
use spc_core::{individuals_from_values, subgroups_from_rows};

fn rows(count: usize) -> Vec<Vec<f64>> {
    (0..count)
        .map(|i| {
            (0..5)
                .map(|j| 10.0 + ((i * 7 + j * 3) % 11) as f64 * 0.01)
                .collect()
        })
        .collect()
}

fn bench_xbar_r(c: &mut Criterion) {
    let mut group = c.benchmark_group("xbar_r");
    for count in [25, 100, 500] {
        let subgroups = subgroups_from_rows(rows(count));
        group.bench_with_input(BenchmarkId::new("build_and_scan", count), &subgroups, |b, s| {
            let calc = ControlLimitCalculator::new();
            let detector = OutOfControlDetector::new();
            b.iter(|| {
                let chart = calc.build_chart(black_box(s)).unwrap();
                detector.detect_xbar_r(&chart)
            })
        });
    }
    group.finish();
}

fn bench_individual(c: &mut Criterion) {
    let values: Vec<f64> = (0..500).map(|i| 5.0 + ((i * 13) % 17) as f64 * 0.02).collect();
    let samples = individuals_from_values(&values);
    c.bench_function("imr_build_500", |b| {
        let calc = IndividualControlLimitCalculator::new();
        b.iter(|| calc.build_chart(black_box(&samples)).unwrap())
    });
}

criterion_group!(benches, bench_xbar_r, bench_individual);
criterion_main!(benches);
