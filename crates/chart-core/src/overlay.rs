// File: crates/chart-core/src/overlay.rs
// Summary: Derived overlay series (least-squares trend, simple moving average) and
//          last-value label annotations.
// Notes:
// - Overlays borrow their inner series and never copy or mutate it. Each keeps a small
//   lazily computed cache (fit coefficients, averaged values).
// - Short input policy: a trend needs 2+ points with distinct x, otherwise it is empty.
//   The SMA averages over the samples available at the start (partial window).

use std::cell::OnceCell;

use crate::format::ValueFormatter;
use crate::series::{AnnotationSeries, Plottable, ValueAnnotation};
use crate::style::Style;

/// Moving average window used when none (or zero) is configured.
pub const DEFAULT_SMA_PERIOD: usize = 16;

/// Ordinary least-squares line through the inner series' points, sharing its x domain.
pub struct LinearRegressionSeries<'a> {
    pub name: String,
    pub style: Style,
    inner: &'a dyn Plottable,
    /// Max number of inner points to fit; `None` means all.
    limit: Option<usize>,
    /// Index of the first inner point to fit.
    offset: usize,
    fit: OnceCell<Option<(f64, f64)>>,
}

impl<'a> LinearRegressionSeries<'a> {
    pub fn new(name: impl Into<String>, style: Style, inner: &'a dyn Plottable) -> Self {
        Self { name: name.into(), style, inner, limit: None, offset: 0, fit: OnceCell::new() }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self.fit = OnceCell::new();
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self.fit = OnceCell::new();
        self
    }

    pub fn inner(&self) -> &'a dyn Plottable {
        self.inner
    }

    /// Number of inner points inside the `offset`/`limit` window.
    fn window_len(&self) -> usize {
        let available = self.inner.len().saturating_sub(self.offset);
        match self.limit {
            Some(limit) => available.min(limit),
            None => available,
        }
    }

    /// `(slope, intercept)` of `y = slope * x + intercept`, or `None` when undefined.
    pub fn slope_intercept(&self) -> Option<(f64, f64)> {
        *self.fit.get_or_init(|| {
            let n = self.window_len();
            if n < 2 {
                return None;
            }
            let points = (self.offset..self.offset + n).map(|i| self.inner.value_at(i));
            least_squares(points)
        })
    }
}

/// Fit over centered sums so large x values (epoch millis) keep their precision.
fn least_squares(points: impl Iterator<Item = (f64, f64)> + Clone) -> Option<(f64, f64)> {
    let mut n = 0.0f64;
    let mut sum_x = 0.0f64;
    let mut sum_y = 0.0f64;
    for (x, y) in points.clone() {
        n += 1.0;
        sum_x += x;
        sum_y += y;
    }
    if n < 2.0 {
        return None;
    }
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;
    let mut sxx = 0.0f64;
    let mut sxy = 0.0f64;
    for (x, y) in points {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }
    if sxx == 0.0 || !sxx.is_finite() {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

impl Plottable for LinearRegressionSeries<'_> {
    fn name(&self) -> &str { &self.name }
    fn style(&self) -> &Style { &self.style }

    fn len(&self) -> usize {
        if self.slope_intercept().is_some() { self.window_len() } else { 0 }
    }

    fn value_at(&self, index: usize) -> (f64, f64) {
        let (x, _) = self.inner.value_at(self.offset + index);
        let (m, b) = self.slope_intercept().unwrap_or((0.0, 0.0));
        (x, m * x + b)
    }
}

/// Trailing-window mean of the inner series' values; same length and x domain.
pub struct SmaSeries<'a> {
    pub name: String,
    pub style: Style,
    inner: &'a dyn Plottable,
    period: usize,
    averages: OnceCell<Vec<f64>>,
}

impl<'a> SmaSeries<'a> {
    pub fn new(name: impl Into<String>, style: Style, inner: &'a dyn Plottable) -> Self {
        Self { name: name.into(), style, inner, period: DEFAULT_SMA_PERIOD, averages: OnceCell::new() }
    }

    /// Window size; zero selects [`DEFAULT_SMA_PERIOD`].
    pub fn with_period(mut self, period: usize) -> Self {
        self.period = if period == 0 { DEFAULT_SMA_PERIOD } else { period };
        self.averages = OnceCell::new();
        self
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn inner(&self) -> &'a dyn Plottable {
        self.inner
    }

    pub fn average_at(&self, index: usize) -> Option<f64> {
        self.averages().get(index).copied()
    }

    fn averages(&self) -> &[f64] {
        self.averages.get_or_init(|| {
            let values: Vec<f64> = (0..self.inner.len()).map(|i| self.inner.value_at(i).1).collect();
            // A value only influences the windows that contain it.
            (0..values.len())
                .map(|i| {
                    let start = (i + 1).saturating_sub(self.period);
                    let window = &values[start..=i];
                    window.iter().sum::<f64>() / window.len() as f64
                })
                .collect()
        })
    }
}

impl Plottable for SmaSeries<'_> {
    fn name(&self) -> &str { &self.name }
    fn style(&self) -> &Style { &self.style }
    fn len(&self) -> usize { self.averages().len() }

    fn value_at(&self, index: usize) -> (f64, f64) {
        let (x, _) = self.inner.value_at(index);
        (x, self.averages()[index])
    }
}

/// Label showing `series`' final value at its last x position, in the series' color.
/// An empty series yields an annotation series with no labels.
pub fn last_value_annotation(series: &dyn Plottable, formatter: &ValueFormatter) -> AnnotationSeries {
    let style = Style::stroke(series.style().stroke_color);
    let annotations = series
        .last_value()
        .map(|(x, y)| vec![ValueAnnotation { x, y, label: formatter(y) }])
        .unwrap_or_default();
    AnnotationSeries {
        name: format!("{} - Last Value", series.name()),
        style,
        annotations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::float_formatter;
    use crate::series::ContinuousSeries;
    use crate::style::Color;

    fn xy(values: &[f64]) -> ContinuousSeries {
        let x = (0..values.len()).map(|i| i as f64).collect();
        ContinuousSeries::new("base", Style::default(), x, values.to_vec())
    }

    #[test]
    fn sma_period_zero_uses_default() {
        let base = xy(&[1.0]);
        let sma = SmaSeries::new("sma", Style::default(), &base).with_period(0);
        assert_eq!(sma.period(), DEFAULT_SMA_PERIOD);
    }

    #[test]
    fn sma_window_of_one_is_identity() {
        let base = xy(&[3.0, 1.0, 4.0]);
        let sma = SmaSeries::new("sma", Style::default(), &base).with_period(1);
        assert_eq!(sma.points(), base.points());
    }

    #[test]
    fn regression_window_respects_offset_and_limit() {
        // first two points are noise; the window [2, 5) lies on y = 2x + 1
        let base = ContinuousSeries::from_points(
            "base",
            Style::default(),
            &[(0.0, 100.0), (1.0, -50.0), (2.0, 5.0), (3.0, 7.0), (4.0, 9.0), (5.0, 0.0)],
        );
        let lr = LinearRegressionSeries::new("lr", Style::default(), &base).with_offset(2).with_limit(3);
        assert_eq!(lr.len(), 3);
        let (m, b) = lr.slope_intercept().unwrap();
        assert!((m - 2.0).abs() < 1e-9 && (b - 1.0).abs() < 1e-9);
        assert_eq!(lr.value_at(0).0, 2.0);
    }

    #[test]
    fn regression_on_vertical_points_is_empty() {
        let base = ContinuousSeries::from_points("base", Style::default(), &[(1.0, 0.0), (1.0, 5.0)]);
        let lr = LinearRegressionSeries::new("lr", Style::default(), &base);
        assert_eq!(lr.slope_intercept(), None);
        assert_eq!(lr.len(), 0);
    }

    #[test]
    fn last_value_label_uses_series_color_and_name() {
        let base = xy(&[1.0, 2.0, 3.0]);
        let sma = SmaSeries::new("SMA", Style::stroke(Color::RED), &base).with_period(2);
        let ann = last_value_annotation(&sma, &float_formatter());
        assert_eq!(ann.name, "SMA - Last Value");
        assert_eq!(ann.style.stroke_color, Color::RED);
        assert_eq!(ann.annotations, vec![ValueAnnotation { x: 2.0, y: 2.5, label: "2.50".into() }]);
    }
}
