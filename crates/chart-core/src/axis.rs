// File: crates/chart-core/src/axis.rs
// Summary: Axis configuration: names, value formatters, tick styling and fixed gridlines.

use chrono::{DateTime, Utc};

use crate::format::{self, ValueFormatter};
use crate::style::Style;
use crate::types::time_to_f64;

/// A vertical marker at a literal x position, independent of plotted data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub value: f64,
}

impl GridLine {
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn at_time(t: DateTime<Utc>) -> Self {
        Self::new(time_to_f64(t))
    }
}

#[derive(Clone)]
pub struct XAxis {
    pub name: Option<String>,
    pub formatter: ValueFormatter,
    /// Stroke used for `grid_lines`.
    pub grid_major_style: Style,
    pub grid_lines: Vec<GridLine>,
}

impl XAxis {
    pub fn new(formatter: ValueFormatter) -> Self {
        Self { name: None, formatter, grid_major_style: Style::default(), grid_lines: Vec::new() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_grid_lines(mut self, style: Style, lines: Vec<GridLine>) -> Self {
        self.grid_major_style = style;
        self.grid_lines = lines;
        self
    }

    pub fn format(&self, v: f64) -> String {
        (self.formatter)(v)
    }
}

impl Default for XAxis {
    fn default() -> Self {
        Self::new(format::float_formatter())
    }
}

#[derive(Clone)]
pub struct YAxis {
    pub name: Option<String>,
    pub formatter: ValueFormatter,
    /// Tick label styling; `text_rotation_degrees` rotates the labels.
    pub tick_style: Style,
}

impl YAxis {
    pub fn new(formatter: ValueFormatter) -> Self {
        Self { name: None, formatter, tick_style: Style::default() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tick_style(mut self, style: Style) -> Self {
        self.tick_style = style;
        self
    }

    pub fn format(&self, v: f64) -> String {
        (self.formatter)(v)
    }
}

impl Default for YAxis {
    fn default() -> Self {
        Self::new(format::float_formatter())
    }
}

impl std::fmt::Debug for XAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XAxis")
            .field("name", &self.name)
            .field("grid_major_style", &self.grid_major_style)
            .field("grid_lines", &self.grid_lines)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for YAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YAxis")
            .field("name", &self.name)
            .field("tick_style", &self.tick_style)
            .finish_non_exhaustive()
    }
}
