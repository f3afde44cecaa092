// File: crates/chart-core/src/assemble.rs
// Summary: Chart assembler combining a base series, its overlays, axes, gridlines and legend.
//
// Draw order is stable: the base series first, then each overlay immediately followed by
// its last-value label. Two overlays therefore produce five series entries.

use crate::axis::{GridLine, XAxis, YAxis};
use crate::chart::{ChartSpec, Legend};
use crate::format::{self, ValueFormatter};
use crate::overlay::last_value_annotation;
use crate::series::Plottable;
use crate::style::Style;
use crate::types::{HEIGHT, WIDTH};

pub struct ChartAssembler {
    pub title: Option<String>,
    pub width: i32,
    pub height: i32,
    pub background: Style,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub legend: Option<Legend>,
    /// Formats the value shown in each overlay's last-value label.
    pub label_formatter: ValueFormatter,
}

impl ChartAssembler {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            title: None,
            width,
            height,
            background: Style::default(),
            x_axis: XAxis::default(),
            y_axis: YAxis::default(),
            legend: Some(Legend::thin()),
            label_formatter: format::float_formatter(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn background(mut self, background: Style) -> Self {
        self.background = background;
        self
    }

    pub fn x_axis(mut self, axis: XAxis) -> Self {
        self.x_axis = axis;
        self
    }

    pub fn y_axis(mut self, axis: YAxis) -> Self {
        self.y_axis = axis;
        self
    }

    /// Replace the x axis' fixed annotation gridlines.
    pub fn grid_lines(mut self, style: Style, lines: Vec<GridLine>) -> Self {
        self.x_axis.grid_major_style = style;
        self.x_axis.grid_lines = lines;
        self
    }

    pub fn legend(mut self, legend: Option<Legend>) -> Self {
        self.legend = legend;
        self
    }

    pub fn label_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.label_formatter = formatter;
        self
    }

    /// Build the chart specification.
    ///
    /// # Panics
    /// If the base series' x and y storage lengths differ.
    pub fn assemble<'a, B, O>(self, base: B, overlays: Vec<O>) -> ChartSpec<'a>
    where
        B: Plottable + 'a,
        O: Plottable + 'a,
    {
        assert!(
            base.is_consistent(),
            "series '{}' has mismatched x/y lengths",
            base.name()
        );

        let mut spec = ChartSpec::new(self.width, self.height)
            .with_background(self.background)
            .with_x_axis(self.x_axis)
            .with_y_axis(self.y_axis);
        spec.title = self.title;
        spec.legend = self.legend;

        spec.add_line(base);
        for overlay in overlays {
            let label = last_value_annotation(&overlay, &self.label_formatter);
            spec.add_line(overlay);
            spec.add_annotations(label);
        }
        spec
    }
}

impl Default for ChartAssembler {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
