//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, MetricsRecord, MonthRecord, ProjectionQuery, StateResponse};

/// Returns the offering, payment plan, active price, and metrics.
///
/// `GET /state` → 200 + `StateResponse` JSON
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    let final_month_savings = state
        .result
        .monthly_points
        .last()
        .map_or(0.0, |p| p.savings);

    Json(StateResponse {
        offering: (&state.offering).into(),
        payment: state.payment.as_str().to_string(),
        active_price: state.active_price,
        metrics: MetricsRecord::from(&state.result.metrics),
        final_month_savings,
    })
}

/// Returns monthly records, optionally filtered by month range.
///
/// `GET /projection` → 200 + `Vec<MonthRecord>` JSON
/// `GET /projection?from=N&to=M` → filtered range (inclusive, 1-indexed)
/// `GET /projection?from=10&to=5` → 400 + `ErrorResponse`
pub async fn get_projection(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectionQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(1);
    let to = query.to.unwrap_or(u32::MAX);

    if from > to {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("`from` ({from}) must be <= `to` ({to})"),
            }),
        ));
    }

    let records: Vec<MonthRecord> = state
        .result
        .monthly_points
        .iter()
        .filter(|p| p.month >= from && p.month <= to)
        .map(MonthRecord::from)
        .collect();

    Ok(Json(records))
}
