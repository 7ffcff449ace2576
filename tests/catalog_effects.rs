use scenario_chart_wasm::config::VariantConfig;
use scenario_chart_wasm::domain::projection::{ActiveSelection, AdjustmentId};

#[test]
fn empty_selection_has_zero_total() {
    let catalog = VariantConfig::boardroom().catalog();
    assert!((catalog.total_effect(&ActiveSelection::new()) - 0.0).abs() < 1e-12);
}

#[test]
fn totals_add_up() {
    let catalog = VariantConfig::boardroom().catalog();

    let mut selection = ActiveSelection::new();
    selection.toggle(AdjustmentId::from("fix-1"));
    assert!((catalog.total_effect(&selection) - 0.05).abs() < 1e-12);

    selection.toggle(AdjustmentId::from("fix-2"));
    assert!((catalog.total_effect(&selection) - 0.02).abs() < 1e-12);

    selection.toggle(AdjustmentId::from("fix-3"));
    assert!((catalog.total_effect(&selection) - 0.12).abs() < 1e-12);
}

#[test]
fn catalog_is_queryable_by_id() {
    let catalog = VariantConfig::boardroom().catalog();
    let training = catalog.get(&AdjustmentId::from("fix-3")).unwrap();
    assert_eq!(training.label, "Training");
    assert!(training.effect.is_positive());

    let downsizing = catalog.get(&AdjustmentId::from("fix-2")).unwrap();
    assert!(!downsizing.effect.is_positive());

    assert!(catalog.get(&AdjustmentId::from("fix-4")).is_none());
    assert!(!catalog.contains(&AdjustmentId::from("fix-4")));
}

#[test]
fn catalog_preserves_declaration_order() {
    let catalog = VariantConfig::boardroom().catalog();
    let labels: Vec<&str> = catalog.iter().map(|adjustment| adjustment.label.as_str()).collect();
    assert_eq!(labels, vec!["Fire CEO", "Downsizing", "Training"]);
}
