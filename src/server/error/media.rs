use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

/// Signed media URL failures.
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Filename must include an extension")]
    MissingExtension,
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("Failed to sign media URL: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingExtension | Self::UnsupportedFileType(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, "BAD_REQUEST", self.to_string())
            }
            Self::Signing(_) => InternalServerError(self).into_response(),
        }
    }
}
