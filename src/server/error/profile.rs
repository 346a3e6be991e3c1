use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProfileError {
    #[error("A profile already exists for this identity")]
    AlreadyExists,
    #[error("Username is already taken")]
    UsernameTaken,
    #[error("Email is not registered with the identity provider")]
    EmailNotRegistered,
    #[error("Profile not found")]
    NotFound,
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AlreadyExists | Self::UsernameTaken | Self::EmailNotRegistered => {
                error_response(StatusCode::CONFLICT, "CONFLICT", self.to_string())
            }
            Self::NotFound => error_response(StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
        }
    }
}
