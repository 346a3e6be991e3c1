use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Record store adapter failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The addressed record does not exist. Services translate this into
    /// their domain's not-found error before it reaches a response.
    #[error("Record not found")]
    NotFound,
    /// The backing store rejected or failed the operation.
    #[error("Storage backend failure: {0}")]
    Backend(String),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "STORAGE_ERROR",
            "Storage backend failure",
        )
    }
}
