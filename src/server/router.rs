//! HTTP routing and OpenAPI documentation configuration.
//!
//! Defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa, with Swagger UI served at `/api/docs`. The permissive CORS
//! layer (origin: any, headers: any) is applied here, once, so every route
//! and every error body carries the same cross-origin headers.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints, Swagger UI
/// documentation, and the shared CORS layer.
///
/// # Registered Endpoints
/// - `POST/PUT/GET/DELETE /api/profile` - Profile lifecycle
/// - `POST/GET/PUT/DELETE /api/match` - Match lifecycle
/// - `POST/GET /api/match/analysis` - Match analysis pipeline
///
/// # Returns
/// An Axum `Router<AppState>` ready to be served once state is attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Courtside", description = "Courtside API"), tags(
        (name = controller::profile::PROFILE_TAG, description = "Player profile API routes"),
        (name = controller::match_record::MATCH_TAG, description = "Match tracking API routes"),
        (name = controller::analysis::ANALYSIS_TAG, description = "Match analysis API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::profile::create_profile))
        .routes(routes!(controller::profile::update_profile))
        .routes(routes!(controller::profile::get_profile))
        .routes(routes!(controller::profile::delete_profile))
        .routes(routes!(controller::match_record::create_match))
        .routes(routes!(controller::match_record::list_matches))
        .routes(routes!(controller::match_record::update_match))
        .routes(routes!(controller::match_record::delete_match))
        .routes(routes!(controller::analysis::analyze_match))
        .routes(routes!(controller::analysis::get_analysis))
        .split_for_parts();

    let cors = CorsLayer::new().allow_origin(Any).allow_headers(Any);

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors)
}
