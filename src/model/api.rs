use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// Machine-readable error kind, e.g. `BAD_REQUEST` or `ANALYSIS_PARSE_ERROR`
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Generic success response carrying only a confirmation message
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// The confirmation message
    pub message: String,
}
