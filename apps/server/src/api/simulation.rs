use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{InvestmentRequest, SimulationRequest, SweepRequest},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use creptime_core::{
    scenario::{Scenario, ScenarioReport},
    FinancialResult, InvestmentResult, SweepRow,
};

#[utoipa::path(get, path = "/api/v1/scenario/default", responses((status = 200, description = "Bundled default scenario")))]
pub async fn get_default_scenario(State(state): State<Arc<AppState>>) -> Json<Scenario> {
    Json(state.scenario_service.default_scenario())
}

#[utoipa::path(post, path = "/api/v1/scenario/evaluate", responses((status = 200, description = "Full report for a scenario"), (status = 400, description = "Invalid input")))]
pub async fn evaluate_scenario(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Scenario>, JsonRejection>,
) -> ApiResult<Json<ScenarioReport>> {
    let Json(scenario) = payload?;
    let report = state.scenario_service.evaluate(&scenario)?;
    Ok(Json(report))
}

#[utoipa::path(post, path = "/api/v1/simulation", responses((status = 200, description = "Monthly indicators"), (status = 400, description = "Invalid input")))]
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> ApiResult<Json<FinancialResult>> {
    let Json(req) = payload?;
    let result = state
        .scenario_service
        .simulate(&req.products, &req.charges, &req.params)?;
    Ok(Json(result))
}

#[utoipa::path(post, path = "/api/v1/investment", responses((status = 200, description = "Return on investment and payback"), (status = 400, description = "Invalid input")))]
pub async fn compute_investment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InvestmentRequest>, JsonRejection>,
) -> ApiResult<Json<InvestmentResult>> {
    let Json(req) = payload?;
    let result = state
        .scenario_service
        .compute_investment(&req.investment_charges, req.net_profit)?;
    Ok(Json(result))
}

#[utoipa::path(post, path = "/api/v1/sweep", responses((status = 200, description = "One row per total of daily units"), (status = 400, description = "Invalid input")))]
pub async fn sweep(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SweepRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<SweepRow>>> {
    let Json(req) = payload?;
    let rows = state.scenario_service.sweep(
        &req.mix,
        &req.products,
        req.range,
        &req.charges,
        &req.params,
    )?;
    Ok(Json(rows))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/scenario/default", get(get_default_scenario))
        .route("/scenario/evaluate", post(evaluate_scenario))
        .route("/simulation", post(simulate))
        .route("/investment", post(compute_investment))
        .route("/sweep", post(sweep))
}
