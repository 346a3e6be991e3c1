use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Validation failures from the schema validator and partial-update builder.
///
/// All variants map to `BAD_REQUEST`; on a field failure the offending field
/// is named in the message so the caller can correct it.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Invalid format for field \"{field}\": {reason}")]
    InvalidField { field: String, reason: String },
    #[error("Missing or empty field: {0}")]
    MissingField(&'static str),
    #[error("Missing required fields: timestamp or phase")]
    MissingAnalysisKey,
    #[error("No valid fields provided to update")]
    NoValidFields,
}

impl SchemaError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl IntoResponse for SchemaError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, "BAD_REQUEST", self.to_string())
    }
}
