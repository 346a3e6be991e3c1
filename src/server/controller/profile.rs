use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Map, Value};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        profile::{ProfileDto, ProfileWriteDto},
    },
    server::{
        error::Error,
        model::{app::AppState, identity::Caller, json::Json},
        service::profile::ProfileService,
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Create the caller's profile
#[utoipa::path(
    post,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Profile created, upload URL issued", body = ProfileWriteDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or unknown caller identity", body = ErrorDto),
        (status = 409, description = "Profile, username, or email conflict", body = ErrorDto)
    ),
)]
pub async fn create_profile(
    State(state): State<AppState>,
    caller: Caller,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, Error> {
    let service = ProfileService::new(&state);

    let response = service.create(&caller, &payload).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Partially update the caller's profile
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Profile updated", body = ProfileWriteDto),
        (status = 400, description = "Invalid update data", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    caller: Caller,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, Error> {
    let service = ProfileService::new(&state);

    let response = service.update(&caller, &payload).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Get the caller's profile with a signed photo URL
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Profile retrieved", body = ProfileDto),
        (status = 404, description = "Profile not found", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, Error> {
    let service = ProfileService::new(&state);

    let profile = service.get(&caller).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Delete the caller's profile and identity-provider account
#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Profile deleted", body = MessageDto),
        (status = 500, description = "Storage or identity provider failure", body = ErrorDto)
    ),
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, Error> {
    let service = ProfileService::new(&state);

    let response = service.delete(&caller).await?;

    Ok((StatusCode::OK, Json(response)))
}
