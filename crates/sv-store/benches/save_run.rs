use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sv_core::{Constants, ScaleEvaluator, ScaleModel, Sweep, SweepRecord};
use sv_store::Store;

fn bench_save_run(c: &mut Criterion) {
    let evaluator = ScaleEvaluator::new(Constants::default(), ScaleModel::WideBinary).unwrap();
    let sweep = Sweep::new(1000.0, 20000.0, 1000).unwrap();
    let record = SweepRecord::capture(&evaluator, &sweep);

    c.bench_function("save_run_1k_samples", |b| {
        let store = Store::open_in_memory().unwrap();
        b.iter(|| black_box(store.save_run(black_box(&record)).unwrap()))
    });

    c.bench_function("load_run_1k_samples", |b| {
        let store = Store::open_in_memory().unwrap();
        let id = store.save_run(&record).unwrap();
        b.iter(|| black_box(store.load_run(black_box(id)).unwrap()))
    });
}

criterion_group!(benches, bench_save_run);
criterion_main!(benches);
