// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate view extents over base and overlay series.

use chart_core::{ChartSpec, ContinuousSeries, SmaSeries, Style, ViewState};

#[test]
fn autoscale_base_and_overlay() {
    let base = ContinuousSeries::from_points("base", Style::default(), &[(0.0, 1.0), (5.0, 3.0), (2.0, 6.0)]);
    let sma = SmaSeries::new("sma", Style::default(), &base).with_period(2);

    let mut spec = ChartSpec::default();
    spec.add_line(&base);
    spec.add_line(sma);

    let view = ViewState::from_spec(&spec);

    // X spans 0..5 regardless of input order
    assert!(view.x_min <= 0.0 + 1e-9);
    assert!(view.x_max >= 5.0 - 1e-9);

    // Y covers base min 1.0 and max 6.0 with margin
    assert!(view.y_min <= 1.0);
    assert!(view.y_max >= 6.0);
}

#[test]
fn empty_chart_gets_blank_view() {
    let base = ContinuousSeries::default();
    let mut spec = ChartSpec::default();
    spec.add_line(&base);
    assert_eq!(ViewState::from_spec(&spec), ViewState::BLANK);
}

#[test]
fn single_point_gets_unit_span() {
    let base = ContinuousSeries::from_points("one", Style::default(), &[(3.0, 7.0)]);
    let mut spec = ChartSpec::default();
    spec.add_line(&base);
    let view = ViewState::from_spec(&spec);
    assert_eq!(view.x_min, 3.0);
    assert_eq!(view.x_max, 4.0);
    assert!(view.y_span() > 0.0);
}
