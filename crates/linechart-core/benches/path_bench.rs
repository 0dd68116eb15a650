use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linechart_core::{Frame, Interpolation, PathBuilder, ScaleStep, SeriesModel};

fn gen_values(n: usize) -> Vec<f64> {
    // simple waveform with drift
    (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_paths");
    let frame = Frame::new(1024.0, 640.0);
    for &n in &[1_000usize, 50_000usize] {
        let model = SeriesModel::from_values(gen_values(n));
        let step = ScaleStep::compute(frame, &model);
        for mode in [Interpolation::Linear, Interpolation::Smoothed] {
            group.bench_with_input(BenchmarkId::new(format!("{mode:?}"), n), &mode, |b, &m| {
                b.iter(|| {
                    let builder = PathBuilder::new(&model, step).interpolation(m);
                    black_box((builder.build_open(), builder.build_closed()));
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
