use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Unauthorized: caller identity missing from request")]
    MissingIdentity,
    #[error("Unauthorized: identity {0:?} is unknown to the identity provider")]
    UnknownIdentity(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingIdentity => error_response(
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Unauthorized: missing user identity",
            ),
            Self::UnknownIdentity(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Unauthorized: unknown user identity",
            ),
        }
    }
}
