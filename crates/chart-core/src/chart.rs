// File: crates/chart-core/src/chart.rs
// Summary: Chart specification: canvas, axes, plotted series and legend, consumed once by a renderer.

use std::io::Write;

use crate::axis::{XAxis, YAxis};
use crate::error::RenderError;
use crate::render::Renderer;
use crate::series::{AnnotationSeries, Plottable};
use crate::style::Style;
use crate::types::{HEIGHT, WIDTH};

/// One entry in the chart's draw order.
pub enum ChartSeries<'a> {
    Line(Box<dyn Plottable + 'a>),
    Annotations(AnnotationSeries),
}

impl ChartSeries<'_> {
    pub fn name(&self) -> &str {
        match self {
            ChartSeries::Line(s) => s.name(),
            ChartSeries::Annotations(a) => &a.name,
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            ChartSeries::Line(s) => s.style(),
            ChartSeries::Annotations(a) => &a.style,
        }
    }

    pub fn as_line(&self) -> Option<&dyn Plottable> {
        match self {
            ChartSeries::Line(s) => Some(s.as_ref()),
            ChartSeries::Annotations(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendPosition {
    /// Single row below the plot.
    #[default]
    Bottom,
    /// Single row above the plot.
    Top,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Legend {
    pub position: LegendPosition,
    /// Thin swatches and small text.
    pub compact: bool,
}

impl Legend {
    pub const fn thin() -> Self {
        Self { position: LegendPosition::Bottom, compact: true }
    }
}

/// A legend row: series name plus the stroke it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub style: Style,
}

pub struct ChartSpec<'a> {
    pub title: Option<String>,
    pub width: i32,
    pub height: i32,
    /// Canvas styling; `padding` reserves margin around the whole chart.
    pub background: Style,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub series: Vec<ChartSeries<'a>>,
    pub legend: Option<Legend>,
}

impl<'a> ChartSpec<'a> {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            title: None,
            width,
            height,
            background: Style::default(),
            x_axis: XAxis::default(),
            y_axis: YAxis::default(),
            series: Vec::new(),
            legend: None,
        }
    }

    pub fn with_background(mut self, background: Style) -> Self {
        self.background = background;
        self
    }

    pub fn with_x_axis(mut self, axis: XAxis) -> Self {
        self.x_axis = axis;
        self
    }

    pub fn with_y_axis(mut self, axis: YAxis) -> Self {
        self.y_axis = axis;
        self
    }

    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    pub fn add_line(&mut self, series: impl Plottable + 'a) {
        self.series.push(ChartSeries::Line(Box::new(series)));
    }

    pub fn add_annotations(&mut self, annotations: AnnotationSeries) {
        self.series.push(ChartSeries::Annotations(annotations));
    }

    pub fn lines(&self) -> impl Iterator<Item = &dyn Plottable> + '_ {
        self.series.iter().filter_map(ChartSeries::as_line)
    }

    /// Legend rows for the plotted lines; annotation labels are not listed.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.lines()
            .map(|s| LegendEntry { name: s.name().to_string(), style: s.style().clone() })
            .collect()
    }

    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(ChartSeries::name).collect()
    }

    /// Hand the specification to `renderer`, writing the encoded image into `sink`.
    pub fn render(&self, renderer: &dyn Renderer, sink: &mut dyn Write) -> Result<(), RenderError> {
        renderer.render(self, sink)
    }
}

impl Default for ChartSpec<'_> {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
