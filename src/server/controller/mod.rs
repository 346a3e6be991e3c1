//! HTTP controller endpoints for the Courtside web API.
//!
//! Axum handlers for profile, match, and analysis routes. Controllers pull
//! the authenticated caller from the authorizer-installed header, hand the
//! raw body to the service layer, and shape responses. Each endpoint is
//! documented with utoipa for the OpenAPI specification.

pub mod analysis;
pub mod match_record;
pub mod profile;
