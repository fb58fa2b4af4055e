use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use triax_spectrum::spectrum::compute_spectrum;
use triax_spectrum::{Axis, Dataset, DatasetConfig, FftEngine};

fn bench_compute_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_spectrum");
    for n in [1000usize, 4096, 5000] {
        let signal: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &signal, |b, signal| {
            b.iter(|| compute_spectrum(black_box(signal), 0.001))
        });
    }
    group.finish();
}

fn bench_dataset_selection(c: &mut Criterion) {
    let dataset = Dataset::new(DatasetConfig {
        seed: Some(0),
        ..DatasetConfig::default()
    })
    .expect("valid config");
    let mut engine = FftEngine::new();

    c.bench_function("dataset_spectrum_reused_plan", |b| {
        b.iter(|| dataset.spectrum_with(&mut engine, Axis::X, black_box(1000..3000)))
    });
    c.bench_function("dataset_spectrum_fresh_plan", |b| {
        b.iter(|| dataset.spectrum(Axis::X, black_box(1000..3000)))
    });
}

criterion_group!(benches, bench_compute_spectrum, bench_dataset_selection);
criterion_main!(benches);
