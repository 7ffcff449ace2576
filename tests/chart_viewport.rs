use scenario_chart_wasm::config::VariantConfig;
use scenario_chart_wasm::domain::chart::{Chart, ChartKind, PlottedSeries, Viewport};
use scenario_chart_wasm::domain::projection::{PeriodIndex, ProjectionPoint, ProjectionSeries, ProjectionValue};

fn plotted(values: &[f64]) -> PlottedSeries {
    let points = values
        .iter()
        .enumerate()
        .map(|(i, value)| ProjectionPoint::new(PeriodIndex::from(i as u32 + 1), ProjectionValue::from(*value)))
        .collect();
    PlottedSeries::new(
        "Projection".to_string(),
        VariantConfig::boardroom().theme.line,
        ProjectionSeries::from_points(points),
    )
}

#[test]
fn viewport_floors_at_zero_with_headroom() {
    let mut chart = Chart::new("chart".to_string(), ChartKind::Line);
    chart.set_series(vec![plotted(&[100.0, 200.0, 300.0, 400.0])]);

    assert!((chart.viewport.min_value - 0.0).abs() < 1e-12);
    assert!((chart.viewport.max_value - 420.0).abs() < 1e-9);
    assert!((chart.viewport.start_period - 1.0).abs() < 1e-12);
    assert!((chart.viewport.end_period - 4.0).abs() < 1e-12);
}

#[test]
fn viewport_spans_the_union_of_series() {
    let mut chart = Chart::new("chart".to_string(), ChartKind::Line);
    chart.set_series(vec![plotted(&[100.0, 200.0]), plotted(&[50.0, 60.0, 70.0, 80.0, 90.0])]);

    assert!((chart.viewport.end_period - 5.0).abs() < 1e-12);
    assert!((chart.viewport.max_value - 210.0).abs() < 1e-9);
    assert_eq!(chart.point_count(), 5);
    assert_eq!(chart.series_count(), 2);
}

#[test]
fn empty_series_keep_the_previous_viewport() {
    let mut chart = Chart::new("chart".to_string(), ChartKind::Line);
    chart.set_series(vec![plotted(&[100.0, 200.0])]);
    let fitted = chart.viewport.clone();

    chart.set_series(Vec::new());
    assert!(!chart.has_data());
    assert_eq!(chart.viewport, fitted);
}

#[test]
fn value_mapping_round_trips() {
    let viewport = Viewport {
        start_period: 1.0,
        end_period: 4.0,
        min_value: 0.0,
        max_value: 420.0,
        width: 800,
        height: 500,
    };

    // extremes
    assert!((viewport.value_to_y(0.0) - 500.0).abs() < 1e-9);
    assert!((viewport.value_to_y(420.0) - 0.0).abs() < 1e-9);
    assert!((viewport.period_to_x(1.0) - 0.0).abs() < 1e-9);
    assert!((viewport.period_to_x(4.0) - 800.0).abs() < 1e-9);

    // round trips
    for value in [0.0, 105.0, 210.0, 420.0] {
        let y = viewport.value_to_y(value);
        assert!((viewport.y_to_value(y) - value).abs() < 1e-9);
    }
    for period in [1.0, 2.0, 3.0, 4.0] {
        let x = viewport.period_to_x(period);
        assert!((viewport.x_to_period(x) - period).abs() < 1e-9);
    }
}

#[test]
fn degenerate_spans_map_to_the_center() {
    let viewport = Viewport { start_period: 1.0, end_period: 1.0, ..Viewport::default() };
    assert!((viewport.period_to_x(1.0) - 400.0).abs() < 1e-9);

    let flat = Viewport { min_value: 50.0, max_value: 50.0, ..Viewport::default() };
    assert!((flat.value_to_y(50.0) - 250.0).abs() < 1e-9);
}
