use scenario_chart_wasm::application::{SimulationCommand, SimulationService};
use scenario_chart_wasm::config::VariantConfig;
use scenario_chart_wasm::domain::projection::{
    ActiveSelection, AdjustmentId, GrowthModel, ProjectionCalculator, SeriesParameters,
};

#[test]
fn unknown_id_contributes_zero_effect() {
    let catalog = VariantConfig::boardroom().catalog();
    let mut selection = ActiveSelection::new();
    selection.toggle(AdjustmentId::from("fix-99"));
    selection.toggle(AdjustmentId::from("fix-1"));

    // Only fix-1 counts
    assert!((catalog.total_effect(&selection) - 0.05).abs() < 1e-12);
}

#[test]
fn unknown_id_does_not_disturb_the_series() {
    let catalog = VariantConfig::boardroom().catalog();
    let params = SeriesParameters::from_raw(4, 100.0).unwrap();
    let calculator = ProjectionCalculator::new(GrowthModel::new(80.0, 5.0));

    let mut unknown_only = ActiveSelection::new();
    unknown_only.toggle(AdjustmentId::from("not-in-catalog"));

    let with_unknown = calculator.compute(&params, &unknown_only, &catalog);
    let without = calculator.compute(&params, &ActiveSelection::new(), &catalog);
    assert_eq!(with_unknown, without);
}

#[test]
fn service_keeps_unknown_toggles_as_inert_members() {
    // Observed behavior: the original page stores the unknown id and its
    // effect lookup falls back to zero.
    let service = SimulationService::new(VariantConfig::boardroom());
    let state = service.initial_state();

    let next = service.apply(&state, SimulationCommand::ToggleAdjustment(AdjustmentId::from("fix-99")));
    assert!(next.selection.contains(&AdjustmentId::from("fix-99")));
    assert!((service.total_adjustment(&next) - 0.0).abs() < 1e-12);

    // And it toggles back off like any other member
    let cleared =
        service.apply(&next, SimulationCommand::ToggleAdjustment(AdjustmentId::from("fix-99")));
    assert!(cleared.selection.is_empty());
}
