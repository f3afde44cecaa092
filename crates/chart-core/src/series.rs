// File: crates/chart-core/src/series.rs
// Summary: Plottable series model: time-indexed base data, plain XY data, and label annotations.
// Notes:
// - `Plottable` is the one capability the renderer needs (name, style, indexed x/y).
//   Base series and derived overlays implement it alike.
// - Time values map onto the x domain through `types::time_to_f64`.

use chrono::{DateTime, Utc};

use crate::style::Style;
use crate::types::{time_to_f64, Sample};

/// A named, styled sequence of (x, y) points addressed by index.
pub trait Plottable {
    fn name(&self) -> &str;
    fn style(&self) -> &Style;
    fn len(&self) -> usize;
    /// Point at `index`. Callers keep `index < len()`.
    fn value_at(&self, index: usize) -> (f64, f64);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn last_value(&self) -> Option<(f64, f64)> {
        self.len().checked_sub(1).map(|i| self.value_at(i))
    }

    fn points(&self) -> Vec<(f64, f64)> {
        (0..self.len()).map(|i| self.value_at(i)).collect()
    }

    /// False when the underlying storage breaks the equal-length x/y invariant.
    fn is_consistent(&self) -> bool {
        true
    }
}

impl<T: Plottable + ?Sized> Plottable for &T {
    fn name(&self) -> &str { (**self).name() }
    fn style(&self) -> &Style { (**self).style() }
    fn len(&self) -> usize { (**self).len() }
    fn value_at(&self, index: usize) -> (f64, f64) { (**self).value_at(index) }
    fn is_consistent(&self) -> bool { (**self).is_consistent() }
}

impl<T: Plottable + ?Sized> Plottable for Box<T> {
    fn name(&self) -> &str { (**self).name() }
    fn style(&self) -> &Style { (**self).style() }
    fn len(&self) -> usize { (**self).len() }
    fn value_at(&self, index: usize) -> (f64, f64) { (**self).value_at(index) }
    fn is_consistent(&self) -> bool { (**self).is_consistent() }
}

/// Base series: timestamps on x, measurements on y, in ingestion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    pub name: String,
    pub style: Style,
    pub x_values: Vec<DateTime<Utc>>,
    pub y_values: Vec<f64>,
}

impl TimeSeries {
    pub fn new(name: impl Into<String>, style: Style) -> Self {
        Self { name: name.into(), style, x_values: Vec::new(), y_values: Vec::new() }
    }

    pub fn with_samples(mut self, samples: impl IntoIterator<Item = Sample>) -> Self {
        self.extend(samples);
        self
    }

    pub fn push(&mut self, sample: Sample) {
        self.x_values.push(sample.timestamp);
        self.y_values.push(sample.value);
    }
}

impl Extend<Sample> for TimeSeries {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        for s in iter {
            self.push(s);
        }
    }
}

impl Plottable for TimeSeries {
    fn name(&self) -> &str { &self.name }
    fn style(&self) -> &Style { &self.style }
    fn len(&self) -> usize { self.x_values.len() }
    fn value_at(&self, index: usize) -> (f64, f64) {
        (time_to_f64(self.x_values[index]), self.y_values[index])
    }
    fn is_consistent(&self) -> bool {
        self.x_values.len() == self.y_values.len()
    }
}

/// Series over a plain numeric x domain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContinuousSeries {
    pub name: String,
    pub style: Style,
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
}

impl ContinuousSeries {
    pub fn new(name: impl Into<String>, style: Style, x_values: Vec<f64>, y_values: Vec<f64>) -> Self {
        Self { name: name.into(), style, x_values, y_values }
    }

    /// Build from (x, y) pairs.
    pub fn from_points(name: impl Into<String>, style: Style, points: &[(f64, f64)]) -> Self {
        let (x_values, y_values) = points.iter().copied().unzip();
        Self::new(name, style, x_values, y_values)
    }
}

impl Plottable for ContinuousSeries {
    fn name(&self) -> &str { &self.name }
    fn style(&self) -> &Style { &self.style }
    fn len(&self) -> usize { self.x_values.len() }
    fn value_at(&self, index: usize) -> (f64, f64) {
        (self.x_values[index], self.y_values[index])
    }
    fn is_consistent(&self) -> bool {
        self.x_values.len() == self.y_values.len()
    }
}

/// A text label pinned to a data-space point.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAnnotation {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Labels drawn on top of the plot; not a line and not a legend entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotationSeries {
    pub name: String,
    pub style: Style,
    pub annotations: Vec<ValueAnnotation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_series_maps_time_to_millis() {
        let t = Utc.with_ymd_and_hms(1970, 1, 1, 1, 0, 0).unwrap();
        let s = TimeSeries::new("s", Style::default()).with_samples([Sample::new(t, 4.0)]);
        assert_eq!(s.value_at(0), (3_600_000.0, 4.0));
        assert_eq!(s.last_value(), Some((3_600_000.0, 4.0)));
        assert!(s.is_consistent());
    }

    #[test]
    fn mismatched_storage_is_flagged() {
        let s = ContinuousSeries::new("bad", Style::default(), vec![0.0, 1.0], vec![0.0]);
        assert!(!s.is_consistent());
    }

    #[test]
    fn empty_series_has_no_last_value() {
        let s = TimeSeries::new("empty", Style::default());
        assert!(s.is_empty());
        assert_eq!(s.last_value(), None);
        assert!(s.points().is_empty());
    }
}
