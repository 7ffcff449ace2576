use scenario_chart_wasm::config::{DescriptionStyle, VariantConfig};
use scenario_chart_wasm::domain::projection::AdjustmentId;

#[test]
fn the_table_has_five_distinct_variants() {
    let variants = VariantConfig::all();
    assert_eq!(variants.len(), 5);

    let mut names: Vec<&str> = variants.iter().map(|variant| variant.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 5);
}

#[test]
fn lookup_by_name() {
    assert_eq!(VariantConfig::by_name("lab").unwrap().name, "lab");
    assert!(VariantConfig::by_name("does-not-exist").is_err());
}

#[test]
fn every_variant_carries_the_observed_catalog() {
    for variant in VariantConfig::all() {
        let catalog = variant.catalog();
        assert_eq!(catalog.len(), 3, "variant {}", variant.name);

        let effect = |id: &str| catalog.effect_of(&AdjustmentId::from(id)).unwrap().value();
        assert!((effect("fix-1") - 0.05).abs() < 1e-12);
        assert!((effect("fix-2") + 0.03).abs() < 1e-12);
        assert!((effect("fix-3") - 0.10).abs() < 1e-12);
    }
}

#[test]
fn defaults_sit_inside_the_bounds() {
    for variant in VariantConfig::all() {
        let (min, max) = variant.period_bounds;
        assert!(min >= 1, "variant {}", variant.name);
        assert!(min <= variant.default_period_count && variant.default_period_count <= max);

        if let Some((scale_min, scale_max)) = variant.scale_bounds {
            assert!(scale_min <= variant.base_scale && variant.base_scale <= scale_max);
        }
    }
}

#[test]
fn only_the_lab_variant_is_scale_adjustable() {
    for variant in VariantConfig::all() {
        assert_eq!(variant.scale_adjustable(), variant.name == "lab", "variant {}", variant.name);
    }
}

#[test]
fn dataset_and_category_tables() {
    let lab = VariantConfig::lab();
    assert_eq!(lab.datasets.len(), 3);
    assert!(lab.dataset("revenue").is_some());
    assert!(lab.dataset("nope").is_none());

    let sampler = VariantConfig::sampler();
    assert_eq!(sampler.categories.len(), 3);
    assert!(sampler.category("payroll").is_some());
    assert!(sampler.category("nope").is_none());

    // nobody else configures them
    for name in ["boardroom", "horizon", "quarterly"] {
        let variant = VariantConfig::by_name(name).unwrap();
        assert!(variant.datasets.is_empty());
        assert!(variant.categories.is_empty());
    }
}

#[test]
fn description_styles_follow_the_table() {
    assert_eq!(VariantConfig::boardroom().description_style, DescriptionStyle::HighlightedPercent);
    assert_eq!(VariantConfig::horizon().description_style, DescriptionStyle::Plain);
    assert_eq!(VariantConfig::lab().description_style, DescriptionStyle::HighlightedPercent);
}

#[test]
fn boardroom_keeps_the_observed_palette() {
    let css = VariantConfig::boardroom().theme.css_variables();
    assert!(css.contains("--page-bg: #eff2eb"));
    assert!(css.contains("--chart-bg: #052608"));
    assert!(css.contains("--line: #bdf26d"));
    assert!(css.contains("--dot: #76a646"));
    assert!(css.contains("--accent: #0554f2"));
}

#[test]
fn initial_state_preselects_the_first_dataset() {
    assert_eq!(VariantConfig::lab().initial_state().dataset.as_deref(), Some("revenue"));
    assert_eq!(VariantConfig::boardroom().initial_state().dataset, None);
}
