//! JSON endpoints.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use biosphere_config::SystemConfig;
use biosphere_ingestion::collect_readings;
use biosphere_score::{score_live, simulate, ScoreReport, SimulationOverrides};

use crate::error::ApiError;
use crate::state::SharedState;

/// GET /api/score: Live run; 503 with the unavailable indicators if any are missing.
pub async fn api_score(State(state): State<SharedState>) -> Result<Json<ScoreReport>, ApiError> {
    let systems = &state.config.systems;
    let readings = collect_readings(&state.sources, systems).await;
    Ok(Json(score_live(systems, &readings)?))
}

/// GET /api/simulate: Same query parameters as the simulation page.
pub async fn api_simulate(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, f64>>,
) -> Result<Json<ScoreReport>, ApiError> {
    let report = simulate(&state.config.systems, &SimulationOverrides(params))?;
    Ok(Json(report))
}

/// GET /api/config: The active system set.
pub async fn api_config(State(state): State<SharedState>) -> Json<Vec<SystemConfig>> {
    Json(state.config.systems.clone())
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
