use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Map, Value};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        match_record::{CreatedMatchDto, MatchListDto, UpdatedMatchDto},
    },
    server::{
        error::Error,
        model::{app::AppState, identity::Caller, json::Json},
        service::match_record::MatchService,
    },
};

pub static MATCH_TAG: &str = "match";

/// Create a match with only a title; id and timestamp are server-assigned
#[utoipa::path(
    post,
    path = "/api/match",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Match created", body = CreatedMatchDto),
        (status = 400, description = "Missing or empty title", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    caller: Caller,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, Error> {
    let service = MatchService::new(&state);

    let record = service.create(&caller, &payload).await?;

    Ok((
        StatusCode::OK,
        Json(CreatedMatchDto {
            message: "Match created successfully".to_string(),
            match_record: record,
        }),
    ))
}

/// List the caller's matches
#[utoipa::path(
    get,
    path = "/api/match",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Matches retrieved", body = MatchListDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto)
    ),
)]
pub async fn list_matches(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, Error> {
    let service = MatchService::new(&state);

    let matches = service.list(&caller).await?;

    Ok((
        StatusCode::OK,
        Json(MatchListDto {
            message: "Match list retrieved successfully".to_string(),
            matches,
        }),
    ))
}

/// Partially update one of the caller's matches
#[utoipa::path(
    put,
    path = "/api/match",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Match updated, changed fields echoed", body = UpdatedMatchDto),
        (status = 400, description = "Invalid or missing update fields", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    caller: Caller,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, Error> {
    let service = MatchService::new(&state);

    let updated = service.update(&caller, &payload).await?;

    Ok((
        StatusCode::OK,
        Json(UpdatedMatchDto {
            message: "Match updated successfully".to_string(),
            updated_fields: Value::Object(updated),
        }),
    ))
}

/// Delete one of the caller's matches by its start timestamp
#[utoipa::path(
    delete,
    path = "/api/match",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Match deleted", body = MessageDto),
        (status = 404, description = "Match not found", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    caller: Caller,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, Error> {
    let service = MatchService::new(&state);

    service.delete(&caller, &payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Match deleted successfully".to_string(),
        }),
    ))
}
