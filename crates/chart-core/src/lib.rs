// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; measurement ingestion, analytic overlays and chart assembly.

pub mod assemble;
pub mod axis;
pub mod chart;
pub mod error;
pub mod format;
pub mod grid;
pub mod overlay;
pub mod record;
pub mod render;
pub mod scale;
pub mod series;
pub mod source;
pub mod style;
pub mod theme;
pub mod types;
pub mod view;

pub use assemble::ChartAssembler;
pub use axis::{GridLine, XAxis, YAxis};
pub use chart::{ChartSeries, ChartSpec, Legend, LegendEntry, LegendPosition};
pub use error::{ChartError, RenderError};
pub use format::ValueFormatter;
pub use overlay::{last_value_annotation, LinearRegressionSeries, SmaSeries, DEFAULT_SMA_PERIOD};
pub use record::{parse_record, parse_sample, RawRecord};
pub use render::{Renderer, CONTENT_TYPE_PNG};
pub use series::{AnnotationSeries, ContinuousSeries, Plottable, TimeSeries, ValueAnnotation};
pub use source::{load_time_series, read_samples, SeriesBuilder};
pub use style::{Color, Style};
pub use theme::Theme;
pub use types::{Insets, Sample};
pub use view::ViewState;
