use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sv_core::{Constants, ScaleEvaluator, ScaleModel, Sweep, SweepRecord};

fn bench_sweep(c: &mut Criterion) {
    let evaluator = ScaleEvaluator::new(Constants::default(), ScaleModel::WideBinary).unwrap();
    let sweep = Sweep::new(1000.0, 20000.0, 10_000).unwrap();

    c.bench_function("wide_binary_sweep_10k", |b| {
        b.iter(|| {
            let ok = evaluator
                .sweep(black_box(&sweep))
                .filter(|s| s.result.is_ok())
                .count();
            black_box(ok)
        })
    });

    c.bench_function("capture_record_10k", |b| {
        b.iter(|| black_box(SweepRecord::capture(&evaluator, black_box(&sweep))))
    });
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
