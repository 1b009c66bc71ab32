//! crates/epgs_api/src/error.rs
//! HTTP error mapping. The adapter never leaks internal error detail
//! structure beyond a message string — `epgs_pipeline::PipelineError`
//! already carries the structured detail, and tracing logs it on the way
//! out (see the handlers).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("scenario run failed: {0}")]
    Pipeline(#[from] epgs_pipeline::errors::PipelineError),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request failed");
        let status = match &self {
            ApiError::Pipeline(epgs_pipeline::errors::PipelineError::Io(epgs_io::IoError::Validation(_))) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Pipeline(epgs_pipeline::errors::PipelineError::Io(epgs_io::IoError::ImmutabilityViolation(_))) => {
                StatusCode::CONFLICT
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
