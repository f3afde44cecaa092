// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas size, insets, samples, time mapping).

use chrono::{DateTime, TimeZone, Utc};

/// Default canvas width in pixels.
pub const WIDTH: i32 = 1280;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 720;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Only a top margin, everything else zero.
    pub const fn top(top: u32) -> Self {
        Self::new(0, 0, top, 0)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Gutter reserved around the plot for tick labels and the legend row.
    fn default() -> Self {
        Self::new(88, 96, 24, 72)
    }
}

/// One measurement: an hour-resolution UTC timestamp and its value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub const fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Map a timestamp onto the numeric x domain (Unix milliseconds).
#[inline]
pub fn time_to_f64(t: DateTime<Utc>) -> f64 {
    t.timestamp_millis() as f64
}

/// Inverse of [`time_to_f64`]; out-of-range values clamp to the Unix epoch.
pub fn f64_to_time(v: f64) -> DateTime<Utc> {
    if !v.is_finite() {
        return DateTime::<Utc>::default();
    }
    Utc.timestamp_millis_opt(v.round() as i64)
        .single()
        .unwrap_or(DateTime::<Utc>::default())
}
