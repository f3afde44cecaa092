// File: crates/chart-core/src/view.rs
// Visible data ranges derived from a chart specification.

use crate::chart::ChartSpec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Unit ranges used when there is nothing to plot.
    pub const BLANK: ViewState = ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };

    /// Bounds of every line series point, with a 2% vertical margin.
    pub fn from_spec(spec: &ChartSpec<'_>) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in spec.lines() {
            for i in 0..s.len() {
                let (x, y) = s.value_at(i);
                if !x.is_finite() || !y.is_finite() { continue; }
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self::BLANK;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * 0.02;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }

    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.x_min && x <= self.x_max
    }
}
