use scenario_chart_wasm::config::VariantConfig;
use scenario_chart_wasm::domain::projection::{
    ActiveSelection, GrowthModel, PeriodCount, ProjectionCalculator, SeriesParameters,
};

/// The growth step depends on the *current* period count, so zooming
/// reshapes existing points rather than only extending the domain.
#[test]
fn changing_period_count_changes_interior_points() {
    let catalog = VariantConfig::boardroom().catalog();
    let calculator = ProjectionCalculator::new(GrowthModel::new(80.0, 5.0));

    let four = calculator.compute(
        &SeriesParameters::from_raw(4, 100.0).unwrap(),
        &ActiveSelection::new(),
        &catalog,
    );
    let five = calculator.compute(
        &SeriesParameters::from_raw(5, 100.0).unwrap(),
        &ActiveSelection::new(),
        &catalog,
    );

    // period 2: 100 + 1*(80+4*5) = 200 vs 100 + 1*(80+5*5) = 205
    let second_of_four = four.points()[1].value.value();
    let second_of_five = five.points()[1].value.value();
    assert!((second_of_four - 200.0).abs() < 1e-9);
    assert!((second_of_five - 205.0).abs() < 1e-9);
}

#[test]
fn step_formula_matches_growth_model() {
    let growth = GrowthModel::new(80.0, 5.0);
    assert!((growth.step_for(PeriodCount::new(4).unwrap()) - 100.0).abs() < 1e-12);
    assert!((growth.step_for(PeriodCount::new(10).unwrap()) - 130.0).abs() < 1e-12);
    assert!((growth.step_for(PeriodCount::new(1).unwrap()) - 85.0).abs() < 1e-12);
}

#[test]
fn first_point_is_immune_to_the_coupling() {
    let catalog = VariantConfig::boardroom().catalog();
    let calculator = ProjectionCalculator::new(GrowthModel::new(80.0, 5.0));

    for period_count in 1..=10 {
        let series = calculator.compute(
            &SeriesParameters::from_raw(period_count, 100.0).unwrap(),
            &ActiveSelection::new(),
            &catalog,
        );
        assert!((series.first().unwrap().value.value() - 100.0).abs() < 1e-9);
    }
}
