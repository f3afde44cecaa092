// File: crates/request-timings/src/timings.rs
// Summary: The request-timings chart: base latency series, trend and SMA overlays,
// release gridlines, and the render step behind every GET /.

use std::path::PathBuf;

use chart_core::format::{millis_formatter, time_hour_formatter};
use chart_core::{
    load_time_series, ChartAssembler, ChartSpec, Color, GridLine, Insets, LinearRegressionSeries,
    Plottable, RenderError, Renderer, SmaSeries, Style, TimeSeries, XAxis, YAxis,
    DEFAULT_SMA_PERIOD,
};
use chrono::{TimeZone, Utc};

pub const CANVAS_WIDTH: i32 = 1280;
pub const CANVAS_HEIGHT: i32 = 720;
pub const TOP_PADDING: u32 = 50;
pub const TICK_ROTATION_DEGREES: f32 = 45.0;

pub const BASE_SERIES_NAME: &str = "Prod Request Timings";
pub const TREND_SERIES_NAME: &str = "Linear Regression";
pub const SMA_SERIES_NAME: &str = "SMA";
pub const Y_AXIS_NAME: &str = "Elapsed Millis";

/// Deploy times marked on the x axis, UTC.
const RELEASES: [(i32, u32, u32, u32, u32); 6] = [
    (2016, 8, 1, 9, 30),
    (2016, 8, 2, 9, 30),
    (2016, 8, 2, 15, 30),
    (2016, 8, 4, 9, 30),
    (2016, 8, 5, 9, 30),
    (2016, 8, 6, 9, 30),
];

pub fn release_grid_lines() -> Vec<GridLine> {
    RELEASES
        .iter()
        .filter_map(|&(y, mo, d, h, mi)| Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single())
        .map(GridLine::at_time)
        .collect()
}

pub fn base_style() -> Style {
    Style::stroke(Color::BLUE).with_fill(Color::BLUE.with_alpha(100))
}

pub fn trend_style() -> Style {
    Style::stroke(Color::ALTERNATE_BLUE).with_dash([5.0, 5.0])
}

pub fn sma_style() -> Style {
    Style::stroke(Color::RED).with_dash([5.0, 5.0])
}

/// Everything a request needs to rebuild the chart from scratch.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub data_path: PathBuf,
    pub sma_period: usize,
    pub releases: Vec<GridLine>,
}

impl ChartConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            sma_period: DEFAULT_SMA_PERIOD,
            releases: release_grid_lines(),
        }
    }

    pub fn with_sma_period(mut self, period: usize) -> Self {
        self.sma_period = period;
        self
    }

    /// Read the measurement log; unreadable sources come back empty.
    pub fn load_base(&self) -> TimeSeries {
        load_time_series(&self.data_path, BASE_SERIES_NAME, base_style())
    }

    /// Assemble the full chart over `base`.
    pub fn build_chart<'a>(&self, base: &'a TimeSeries) -> ChartSpec<'a> {
        let trend = LinearRegressionSeries::new(TREND_SERIES_NAME, trend_style(), base);
        let sma = SmaSeries::new(SMA_SERIES_NAME, sma_style(), base).with_period(self.sma_period);
        let overlays: Vec<Box<dyn Plottable + 'a>> = vec![Box::new(trend), Box::new(sma)];

        ChartAssembler::new(CANVAS_WIDTH, CANVAS_HEIGHT)
            .background(Style::default().with_padding(Insets::top(TOP_PADDING)))
            .x_axis(XAxis::new(time_hour_formatter()))
            .y_axis(
                YAxis::new(millis_formatter())
                    .with_name(Y_AXIS_NAME)
                    .with_tick_style(Style::default().with_text_rotation(TICK_ROTATION_DEGREES)),
            )
            .grid_lines(
                Style::stroke(Color::ALTERNATE_GRAY).with_stroke_width(1.0),
                self.releases.clone(),
            )
            .assemble(base, overlays)
    }

    /// Load, assemble and encode one image.
    pub fn render(&self, renderer: &dyn Renderer) -> Result<Vec<u8>, RenderError> {
        let base = self.load_base();
        let spec = self.build_chart(&base);
        renderer.render_to_vec(&spec)
    }
}
