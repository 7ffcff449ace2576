#![cfg(target_arch = "wasm32")]

use scenario_chart_wasm::presentation::wasm_api::projection_series_json;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn projection_endpoint_round_trips_json() {
    let json = projection_series_json("boardroom", 4, 100.0, "[]").unwrap();
    let points: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(points.len(), 4);
}

#[wasm_bindgen_test]
fn projection_endpoint_rejects_bad_input() {
    assert!(projection_series_json("boardroom", 0, 100.0, "[]").is_err());
    assert!(projection_series_json("no-such-variant", 4, 100.0, "[]").is_err());
    assert!(projection_series_json("boardroom", 4, 100.0, "not json").is_err());
}
