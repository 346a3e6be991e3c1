//! Error types for the Courtside server application.
//!
//! Each domain (validation, profiles, matches, analysis, storage, identity,
//! media, configuration) has its own `thiserror` enum implementing
//! `IntoResponse`, aggregated here into a single [`Error`] type. Every
//! failure is shaped through [`error_response`], which produces the
//! machine-readable code plus human-readable message body required by the
//! API contract.

pub mod analysis;
pub mod auth;
pub mod config;
pub mod identity;
pub mod match_record;
pub mod media;
pub mod profile;
pub mod schema;
pub mod store;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        analysis::AnalysisError, auth::AuthError, config::ConfigError, identity::IdentityError,
        match_record::MatchError, media::MediaError, profile::ProfileError, schema::SchemaError,
        store::StoreError,
    },
};

/// Main error type for the Courtside server application.
///
/// Aggregates all domain-specific error types into one unified error so
/// handlers and services can rely on `?` with `#[from]` conversions. The
/// `IntoResponse` implementation delegates to each domain's own HTTP
/// mapping.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Missing or unknown caller identity.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Field validation or partial-update construction failure.
    #[error(transparent)]
    SchemaError(#[from] SchemaError),
    /// Profile lifecycle error (conflicts, missing profile).
    #[error(transparent)]
    ProfileError(#[from] ProfileError),
    /// Match lifecycle error (missing match, missing key).
    #[error(transparent)]
    MatchError(#[from] MatchError),
    /// Analysis pipeline error (upstream model, parsing, shape).
    #[error(transparent)]
    AnalysisError(#[from] AnalysisError),
    /// Record store failure.
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// Identity provider adapter failure.
    #[error(transparent)]
    IdentityError(#[from] IdentityError),
    /// Signed media URL failure.
    #[error(transparent)]
    MediaError(#[from] MediaError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::SchemaError(err) => err.into_response(),
            Self::ProfileError(err) => err.into_response(),
            Self::MatchError(err) => err.into_response(),
            Self::AnalysisError(err) => err.into_response(),
            Self::StoreError(err) => err.into_response(),
            Self::IdentityError(err) => err.into_response(),
            Self::MediaError(err) => err.into_response(),
        }
    }
}

/// Builds the structured error body shared by every failure path.
///
/// All error responses flow through here so the `{ code, message }` shape
/// cannot drift between handlers.
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            code: code.to_string(),
            message: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error message for diagnostics but returns a generic message
/// to the client so internal details are never exposed.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Internal server error",
        )
    }
}
