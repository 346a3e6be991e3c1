use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Failures of the external-model analysis pipeline.
///
/// The upstream message is preserved for diagnostics but the variants never
/// carry stack traces or provider internals. None of these are retried at
/// this layer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// The model call itself failed: network error, timeout, or a non-2xx
    /// response from the provider.
    #[error("Upstream model call failed: {0}")]
    Upstream(String),
    /// The model reply was not valid JSON after stripping code fences.
    #[error("Failed to parse model response as JSON: {0}")]
    Parse(String),
    /// The model reply parsed as JSON but does not match the advice shape.
    #[error("Model response does not match the advice shape: {0}")]
    Shape(String),
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let code = match self {
            Self::Upstream(_) => "ANALYSIS_UPSTREAM_ERROR",
            Self::Parse(_) => "ANALYSIS_PARSE_ERROR",
            Self::Shape(_) => "ANALYSIS_SHAPE_ERROR",
        };

        error_response(StatusCode::BAD_GATEWAY, code, self.to_string())
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Upstream("model call timed out".to_string())
        } else {
            Self::Upstream(err.without_url().to_string())
        }
    }
}
