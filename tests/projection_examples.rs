use scenario_chart_wasm::config::VariantConfig;
use scenario_chart_wasm::domain::projection::{
    ActiveSelection, AdjustmentId, GrowthModel, ProjectionCalculator, SeriesParameters,
};

fn calculator() -> ProjectionCalculator {
    ProjectionCalculator::new(GrowthModel::new(80.0, 5.0))
}

fn assert_values(series: &scenario_chart_wasm::domain::projection::ProjectionSeries, expected: &[f64]) {
    assert_eq!(series.count(), expected.len());
    for (point, expected_value) in series.points().iter().zip(expected) {
        assert!(
            (point.value.value() - expected_value).abs() < 1e-9,
            "period {}: got {}, expected {}",
            point.period.value(),
            point.value.value(),
            expected_value
        );
    }
}

#[test]
fn four_periods_unadjusted() {
    // step = 80 + 4 * 5 = 100
    let params = SeriesParameters::from_raw(4, 100.0).unwrap();
    let series = calculator().compute(&params, &ActiveSelection::new(), &VariantConfig::boardroom().catalog());
    assert_values(&series, &[100.0, 200.0, 300.0, 400.0]);
}

#[test]
fn four_periods_with_two_adjustments() {
    // fix-1 (+5%) and fix-3 (+10%) multiply every value by 1.15
    let params = SeriesParameters::from_raw(4, 100.0).unwrap();
    let mut selection = ActiveSelection::new();
    selection.toggle(AdjustmentId::from("fix-1"));
    selection.toggle(AdjustmentId::from("fix-3"));

    let series = calculator().compute(&params, &selection, &VariantConfig::boardroom().catalog());
    assert_values(&series, &[115.0, 230.0, 345.0, 460.0]);
}

#[test]
fn downsizing_alone_shrinks_the_series() {
    let params = SeriesParameters::from_raw(4, 100.0).unwrap();
    let mut selection = ActiveSelection::new();
    selection.toggle(AdjustmentId::from("fix-2"));

    let series = calculator().compute(&params, &selection, &VariantConfig::boardroom().catalog());
    assert_values(&series, &[97.0, 194.0, 291.0, 388.0]);
}

#[test]
fn single_period_series_is_just_the_base() {
    let params = SeriesParameters::from_raw(1, 100.0).unwrap();
    let series = calculator().compute(&params, &ActiveSelection::new(), &VariantConfig::boardroom().catalog());
    assert_values(&series, &[100.0]);
}

#[test]
fn ten_periods_use_the_larger_step() {
    // step = 80 + 10 * 5 = 130
    let params = SeriesParameters::from_raw(10, 100.0).unwrap();
    let series = calculator().compute(&params, &ActiveSelection::new(), &VariantConfig::boardroom().catalog());
    let last = series.last().unwrap();
    assert!((last.value.value() - (100.0 + 9.0 * 130.0)).abs() < 1e-9);
}
