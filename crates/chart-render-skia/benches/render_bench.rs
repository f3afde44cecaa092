use chart_core::{ChartAssembler, ContinuousSeries, LinearRegressionSeries, Plottable, SmaSeries, Style};
use chart_render_skia::SkiaRenderer;
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn gen_base(n: usize) -> ContinuousSeries {
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        x.push(i as f64);
        y.push((i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001));
    }
    ContinuousSeries::new("base", Style::default(), x, y)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let renderer = SkiaRenderer::new().with_labels(false);
    for &n in &[1_000usize, 10_000usize] {
        let base = gen_base(n);
        group.bench_function(format!("timings_{n}"), |b| {
            b.iter(|| {
                let trend = LinearRegressionSeries::new("trend", Style::default(), &base);
                let sma = SmaSeries::new("sma", Style::default(), &base);
                let overlays: Vec<Box<dyn Plottable + '_>> = vec![Box::new(trend), Box::new(sma)];
                let spec = ChartAssembler::new(800, 500).assemble(&base, overlays);
                black_box(renderer.render_png_bytes(&spec))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
