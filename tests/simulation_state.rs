use scenario_chart_wasm::config::VariantConfig;
use scenario_chart_wasm::domain::projection::AdjustmentId;

#[test]
fn updates_are_functional_not_in_place() {
    let state = VariantConfig::boardroom().initial_state();
    let original = state.clone();

    let toggled = state.with_toggled(AdjustmentId::from("fix-1"));
    assert!(toggled.selection.contains(&AdjustmentId::from("fix-1")));
    assert_eq!(state, original, "the prior snapshot must be untouched");

    let zoomed = state.with_zoom_in();
    assert_eq!(zoomed.view.period_count().get(), 5);
    assert_eq!(state.view.period_count().get(), 4);
}

#[test]
fn selection_reset_only_clears_the_selection() {
    let state = VariantConfig::boardroom()
        .initial_state()
        .with_toggled(AdjustmentId::from("fix-1"))
        .with_zoom_in();

    let reset = state.with_selection_reset();
    assert!(reset.selection.is_empty());
    assert_eq!(reset.view.period_count().get(), 5, "zoom survives a selection reset");
}

#[test]
fn dataset_switch_adopts_the_dataset_scale() {
    let variant = VariantConfig::lab();
    let state = variant.initial_state();
    assert_eq!(state.dataset.as_deref(), Some("revenue"));

    let switched = state.with_dataset("cash".to_string(), 500.0);
    assert_eq!(switched.dataset.as_deref(), Some("cash"));
    assert!((switched.view.base_scale().value() - 500.0).abs() < 1e-12);
    assert_eq!(state.dataset.as_deref(), Some("revenue"));
}

#[test]
fn category_exclusion_round_trips() {
    let state = VariantConfig::sampler().initial_state();
    assert!(state.is_category_included("payroll"));

    let without = state.with_category_included("payroll".to_string(), false);
    assert!(!without.is_category_included("payroll"));
    assert!(without.is_category_included("marketing"));

    let back = without.with_category_included("payroll".to_string(), true);
    assert!(back.is_category_included("payroll"));
}

#[test]
fn params_reflect_the_view() {
    let state = VariantConfig::boardroom().initial_state().with_zoom_in().with_zoom_in();
    let params = state.params();
    assert_eq!(params.period_count().get(), 6);
    assert!((params.base_scale().value() - 100.0).abs() < 1e-12);
}
