// File: crates/chart-core/tests/assemble.rs
// Purpose: End-to-end assembly from a CSV fixture to a five-entry chart specification.

use chart_core::format::{millis_formatter, time_hour_formatter};
use chart_core::{
    load_time_series, ChartAssembler, ChartSeries, Color, ContinuousSeries, GridLine, Insets,
    LinearRegressionSeries, Plottable, SmaSeries, Style, XAxis, YAxis,
};
use chrono::{TimeZone, Utc};
use std::io::Write;

fn releases() -> Vec<GridLine> {
    vec![
        GridLine::at_time(Utc.with_ymd_and_hms(2016, 8, 1, 9, 30, 0).unwrap()),
        GridLine::at_time(Utc.with_ymd_and_hms(2016, 8, 2, 15, 30, 0).unwrap()),
    ]
}

#[test]
fn three_line_fixture_assembles_five_series() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "2016,8,1,9,100\n2016,8,1,10,200\n2016,8,1,11,150\n").unwrap();

    let base = load_time_series(file.path(), "Prod Request Timings", Style::stroke(Color::BLUE));
    let trend = LinearRegressionSeries::new("Linear Regression", Style::stroke(Color::ALTERNATE_BLUE).with_dash([5.0, 5.0]), &base);
    let sma = SmaSeries::new("SMA", Style::stroke(Color::RED).with_dash([5.0, 5.0]), &base).with_period(2);

    let overlays: Vec<Box<dyn Plottable + '_>> = vec![Box::new(trend), Box::new(sma)];
    let spec = ChartAssembler::new(1280, 720)
        .background(Style::default().with_padding(Insets::top(50)))
        .x_axis(XAxis::new(time_hour_formatter()))
        .y_axis(YAxis::new(millis_formatter()).with_name("Elapsed Millis").with_tick_style(Style::default().with_text_rotation(45.0)))
        .grid_lines(Style::stroke(Color::ALTERNATE_GRAY).with_stroke_width(1.0), releases())
        .assemble(&base, overlays);

    assert_eq!(
        spec.series_names(),
        vec![
            "Prod Request Timings",
            "Linear Regression",
            "Linear Regression - Last Value",
            "SMA",
            "SMA - Last Value",
        ]
    );
    assert_eq!(spec.x_axis.grid_lines, releases());
    assert_eq!((spec.width, spec.height), (1280, 720));
    assert_eq!(spec.background.padding.top, 50);
    assert_eq!(spec.y_axis.format(123.7), "123 ms");
    assert_eq!(spec.x_axis.format(spec.x_axis.grid_lines[0].value), "2016-08-01 9AM");

    // legend lists lines only, in draw order, with their styles
    let legend = spec.legend_entries();
    let names: Vec<_> = legend.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Prod Request Timings", "Linear Regression", "SMA"]);
    assert_eq!(legend[2].style.dash_array, vec![5.0, 5.0]);

    // last-value labels sit at each overlay's final point
    match &spec.series[4] {
        ChartSeries::Annotations(a) => {
            assert_eq!(a.annotations.len(), 1);
            assert_eq!(a.annotations[0].y, 175.0);
            assert_eq!(a.annotations[0].label, "175.00");
        }
        ChartSeries::Line(_) => panic!("expected SMA label"),
    }
    match &spec.series[2] {
        ChartSeries::Annotations(a) => assert!((a.annotations[0].y - 175.0).abs() < 1e-6),
        ChartSeries::Line(_) => panic!("expected trend label"),
    }
}

#[test]
fn empty_source_still_assembles() {
    let base = load_time_series("/nonexistent/requests.csv", "base", Style::default());
    let trend = LinearRegressionSeries::new("trend", Style::default(), &base);
    let sma = SmaSeries::new("sma", Style::default(), &base);
    let overlays: Vec<Box<dyn Plottable + '_>> = vec![Box::new(trend), Box::new(sma)];
    let spec = ChartAssembler::default().assemble(&base, overlays);
    assert_eq!(spec.series.len(), 5);
    for entry in &spec.series {
        match entry {
            ChartSeries::Line(s) => assert!(s.is_empty()),
            ChartSeries::Annotations(a) => assert!(a.annotations.is_empty()),
        }
    }
}

#[test]
#[should_panic(expected = "mismatched x/y lengths")]
fn mismatched_base_is_a_precondition_violation() {
    let base = ContinuousSeries::new("bad", Style::default(), vec![0.0, 1.0], vec![1.0]);
    let _ = ChartAssembler::default().assemble(&base, Vec::<Box<dyn Plottable>>::new());
}
