//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use super::AppState;
use super::error::ApiError;
use crate::error::PlanError;
use crate::io::payload::{PowerPlantDispatch, ProductionPlanRequest, response_body};
use crate::plan::{PlanResult, PlanSummary};

/// Computes a production plan.
///
/// `POST /productionplan` → 200 + `[{name, p}, ...]` JSON
/// malformed body → 400, unsatisfiable load or unknown plant type → 422
pub async fn production_plan(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProductionPlanRequest>, JsonRejection>,
) -> Result<Json<Vec<PowerPlantDispatch>>, ApiError> {
    let Json(body) = payload.map_err(|rejection| PlanError::InvalidRequest(rejection.body_text()))?;
    let request = body.into_plan_request();
    tracing::info!(
        load = %request.requested_load,
        plants = request.units.len(),
        "production plan requested"
    );

    let planner = state.planner;
    let units = tokio::task::spawn_blocking(move || planner.dispatch(&request))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    let summary = PlanSummary::from_units(&units);
    tracing::info!(
        total_load = %summary.total_load,
        total_cost = %summary.total_cost.round_dp(2),
        running = summary.units_running,
        "production plan computed"
    );

    Ok(Json(response_body(&PlanResult::from_units(&units))))
}
