use chart_core::{ContinuousSeries, LinearRegressionSeries, Plottable, SmaSeries, Style};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_xy(n: usize) -> ContinuousSeries {
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        x.push(i as f64 * 3_600_000.0);
        // latency-like waveform with drift
        y.push(100.0 + (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001));
    }
    ContinuousSeries::new("bench", Style::default(), x, y)
}

fn bench_overlays(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlays");
    for &n in &[10_000usize, 100_000usize] {
        let base = gen_xy(n);
        for &period in &[16usize, 256usize] {
            group.bench_with_input(BenchmarkId::new("sma", format!("n{n}_p{period}")), &period, |b, &p| {
                b.iter(|| {
                    let sma = SmaSeries::new("sma", Style::default(), &base).with_period(p);
                    black_box(sma.last_value())
                });
            });
        }
        group.bench_with_input(BenchmarkId::new("linreg", format!("n{n}")), &n, |b, _| {
            b.iter(|| {
                let lr = LinearRegressionSeries::new("lr", Style::default(), &base);
                black_box(lr.slope_intercept())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_overlays);
criterion_main!(benches);
