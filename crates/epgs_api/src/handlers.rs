//! crates/epgs_api/src/handlers.rs
//! `POST /run` and `GET /verify` (spec §6 "HTTP surface"). Both handlers
//! are thin: deserialize, call into `epgs_pipeline` on a blocking thread
//! (spec §5: the core pipeline is synchronous and must never interleave
//! with other ledger writes), serialize. No business logic lives here.

use std::path::PathBuf;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub scenario_path: String,
    pub output_root: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    #[serde(flatten)]
    pub result: epgs_pipeline::orchestrator::RunResult,
}

#[tracing::instrument(skip(state))]
pub async fn run(State(state): State<AppState>, Json(req): Json<RunRequest>) -> Result<Json<RunResponse>, ApiError> {
    let scenario_path = PathBuf::from(req.scenario_path);
    let output_root = req.output_root.map(PathBuf::from).unwrap_or_else(|| state.config.default_output_root.clone());

    let result = tokio::task::spawn_blocking(move || epgs_pipeline::orchestrator::run_scenario(&scenario_path, &output_root))
        .await??;

    Ok(Json(RunResponse { result }))
}

#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    pub ledger_dir: String,
}

#[tracing::instrument(skip(_state))]
pub async fn verify(
    State(_state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Result<Json<epgs_pipeline::verifier::VerifyOutcome>, ApiError> {
    let ledger_dir = PathBuf::from(params.ledger_dir);
    let outcome = tokio::task::spawn_blocking(move || epgs_pipeline::verifier::verify_chain(&ledger_dir)).await?;
    Ok(Json(outcome))
}
