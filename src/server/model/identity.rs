use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::auth::AuthError;

/// Header installed by the fronting authorizer carrying the stable caller
/// identity. Requests reaching this service are already authenticated; a
/// missing header means the request bypassed the authorizer.
pub static IDENTITY_HEADER: &str = "x-identity-id";

/// The authenticated caller, extracted from the authorizer-installed header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Stable identity used as the ownership key for all records
    pub id: String,
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(IDENTITY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingIdentity)?;

        Ok(Caller { id: id.to_string() })
    }
}
