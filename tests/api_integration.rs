//! Integration tests for the REST API over a full scenario run.

#![cfg(feature = "api")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use solar_payback::api::{AppState, router};
use solar_payback::catalog::resolve_offering;
use solar_payback::config::ScenarioConfig;
use solar_payback::engine::projection::compute_projection;
use solar_payback::fuel::resolve_fuel_price;

fn state_for_preset(name: &str) -> Arc<AppState> {
    let cfg = ScenarioConfig::from_preset(name).expect("preset should load");
    assert!(cfg.validate().is_empty());

    let payment = cfg.payment_type().expect("validated payment plan");
    let (offering, active_price) =
        resolve_offering(&cfg.product.id, payment).expect("validated product id");
    let (price, _) = resolve_fuel_price(
        cfg.costs.price_per_litre,
        cfg.costs.prices_csv.as_deref(),
        &cfg.costs.state,
    );
    let result = compute_projection(
        &offering,
        payment,
        &cfg.cost_assumptions(price),
        &cfg.appliance_load(),
        &cfg.environment(),
    )
    .expect("validated inputs");

    Arc::new(AppState {
        offering,
        payment,
        active_price,
        result,
    })
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn state_exposes_the_resolved_offering() {
    let app = router(state_for_preset("baseline"));
    let (status, json) = get_json(app, "/state").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["offering"]["id"], "imax10_1x200");
    assert_eq!(json["payment"], "paygo");
    assert_eq!(json["active_price"], 1_247_000.0);
    // Baseline has no appliances configured: runtime is unbounded.
    assert!(json["metrics"]["runtime_without_panels_h"].is_null());
}

#[tokio::test]
async fn cash_preset_reports_the_cash_price() {
    let app = router(state_for_preset("cash_outright"));
    let (status, json) = get_json(app, "/state").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["payment"], "cash");
    assert_eq!(json["active_price"], 826_000.0);
}

#[tokio::test]
async fn projection_returns_the_full_series_and_ranges() {
    let app = router(state_for_preset("heavy_load"));
    let (status, json) = get_json(app.clone(), "/projection").await;
    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().expect("projection should be an array");
    assert_eq!(rows.len(), 36);
    assert_eq!(rows[0]["month"], 1);
    assert_eq!(rows[35]["month"], 36);

    let (status, json) = get_json(app, "/projection?from=30&to=36").await;
    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().expect("projection should be an array");
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["month"], 30);
}

#[tokio::test]
async fn inverted_range_is_rejected() {
    let app = router(state_for_preset("baseline"));
    let (status, json) = get_json(app, "/projection?from=20&to=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}
