// File: crates/chart-core/src/format.rs
// Summary: Value formatters turning axis/label values into display strings.

use std::sync::Arc;

use crate::types::f64_to_time;

/// Converts a plotted value into its label text.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Wrap a plain function or closure as a [`ValueFormatter`].
pub fn formatter<F>(f: F) -> ValueFormatter
where
    F: Fn(f64) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Two decimal places, e.g. `"12.35"`.
pub fn float_value(v: f64) -> String {
    format!("{:.2}", v)
}

/// Whole milliseconds with unit, truncating toward zero: `123.9` -> `"123 ms"`.
pub fn millis_value(v: f64) -> String {
    format!("{} ms", v as i64)
}

/// Date and 12-hour clock hour of a time-domain value, e.g. `"2016-08-01 9AM"`.
pub fn time_hour_value(v: f64) -> String {
    f64_to_time(v).format("%Y-%m-%d %-I%p").to_string()
}

pub fn float_formatter() -> ValueFormatter { formatter(float_value) }
pub fn millis_formatter() -> ValueFormatter { formatter(millis_value) }
pub fn time_hour_formatter() -> ValueFormatter { formatter(time_hour_value) }
