use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatchError {
    #[error("Match not found")]
    NotFound,
}

impl IntoResponse for MatchError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound => error_response(StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
        }
    }
}
