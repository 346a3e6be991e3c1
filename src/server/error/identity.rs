use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Identity provider adapter failures.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity provider request failed: {0}")]
    Upstream(String),
    #[error("Identity provider returned an unexpected payload: {0}")]
    Decode(String),
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

impl From<reqwest::Error> for IdentityError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.without_url().to_string())
        } else {
            Self::Upstream(err.without_url().to_string())
        }
    }
}
