use wasm_bindgen::prelude::*;

use crate::app::{App, install_ui_logger};
use crate::config::{VariantConfig, init_variant};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::projection::{ActiveSelection, AdjustmentId, ProjectionCalculator, SeriesParameters};

/// Mount the projection app for a named variant.
///
/// Unknown names are rejected with a readable error instead of silently
/// falling back, so a typo in the embedding page is caught immediately.
#[wasm_bindgen]
pub fn mount_projection_app(variant: &str) -> Result<(), JsValue> {
    let config = VariantConfig::by_name(variant).map_err(to_js)?;
    init_variant(config);
    install_ui_logger();

    get_logger().info(
        LogComponent::Presentation("WasmApi"),
        &format!("mounting projection app, variant '{}'", variant),
    );

    leptos::mount_to_body(App);
    Ok(())
}

/// Headless projection endpoint for JS callers.
///
/// `active_ids` is a JSON array of adjustment ids; the result is the JSON
/// array of `{period, value}` points. Raw inputs are validated here, at the
/// boundary - the calculator itself never sees invalid parameters.
#[wasm_bindgen]
pub fn projection_series_json(
    variant: &str,
    period_count: u32,
    base_scale: f64,
    active_ids: &str,
) -> Result<String, JsValue> {
    let config = VariantConfig::by_name(variant).map_err(to_js)?;
    let params = SeriesParameters::from_raw(period_count, base_scale).map_err(to_js)?;

    let ids: Vec<String> =
        serde_json::from_str(active_ids).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let mut selection = ActiveSelection::new();
    for id in ids {
        selection.toggle(AdjustmentId::from(id));
    }

    let calculator = ProjectionCalculator::new(config.growth);
    let series = calculator.compute(&params, &selection, &config.catalog());
    serde_json::to_string(series.points()).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
