use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    model::{
        analysis::{AnalysisListDto, AnalyzeMatchDto, AnalyzedMatchDto},
        api::ErrorDto,
    },
    server::{
        error::Error,
        model::{app::AppState, identity::Caller, json::Json},
        service::analysis::AnalysisService,
    },
};

pub static ANALYSIS_TAG: &str = "analysis";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct AnalysisQuery {
    /// Start timestamp of the match, epoch milliseconds
    pub timestamp: Option<String>,
}

/// Run the analysis pipeline over submitted match statistics
#[utoipa::path(
    post,
    path = "/api/match/analysis",
    tag = ANALYSIS_TAG,
    request_body = AnalyzeMatchDto,
    responses(
        (status = 200, description = "Analysis stored and returned", body = AnalyzedMatchDto),
        (status = 400, description = "Missing timestamp or phase", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 502, description = "Model call, parse, or shape failure", body = ErrorDto)
    ),
)]
pub async fn analyze_match(
    State(state): State<AppState>,
    caller: Caller,
    Json(request): Json<AnalyzeMatchDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AnalysisService::new(&state);

    let record = service.analyze(&caller, request).await?;

    Ok((
        StatusCode::OK,
        Json(AnalyzedMatchDto {
            code: "SUCCESS".to_string(),
            advice: record,
        }),
    ))
}

/// Get all stored analyses for one of the caller's matches
#[utoipa::path(
    get,
    path = "/api/match/analysis",
    tag = ANALYSIS_TAG,
    params(AnalysisQuery),
    responses(
        (status = 200, description = "Analyses retrieved", body = AnalysisListDto),
        (status = 400, description = "Missing or invalid timestamp", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto)
    ),
)]
pub async fn get_analysis(
    State(state): State<AppState>,
    caller: Caller,
    Query(query): Query<AnalysisQuery>,
) -> Result<impl IntoResponse, Error> {
    let service = AnalysisService::new(&state);

    let items = service.list(&caller, query.timestamp.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(AnalysisListDto {
            message: "Analysis retrieved successfully".to_string(),
            items,
        }),
    ))
}
