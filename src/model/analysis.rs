use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single piece of coaching advice produced by the model
///
/// `title` and `text` must be non-empty after parsing; `comment` and the tag
/// list are taken verbatim from the model output.
#[derive(Serialize, Deserialize, utoipa::ToSchema, Clone, Debug, PartialEq)]
pub struct AdviceItem {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub comment: String,
    /// Category tags, e.g. `offense`, `defense`, `positioning`
    pub tag: Vec<String>,
}

/// The structured coaching report parsed from the model response
#[derive(Serialize, Deserialize, utoipa::ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub main_advice: AdviceItem,
    /// Always present after parsing; empty when the model gave no
    /// secondary advice
    #[serde(default)]
    pub secondary_advices: Vec<AdviceItem>,
}

/// A stored analysis, keyed by (`{owner}#{timestamp}`, phase)
///
/// The submitted stat fields are copied verbatim into the stored item, so
/// they are carried as raw JSON rather than typed structures.
#[derive(Serialize, Deserialize, utoipa::ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    /// Caller-supplied label partitioning analyses of the same match
    pub phase: String,
    /// Start time of the analyzed match, epoch milliseconds
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub shots: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub turnovers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub assists: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub rebounds: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub points: Option<Value>,
    pub result: Advice,
}

/// Request body for `POST /api/match/analysis`
///
/// `timestamp` and `phase` are required; the stat fields are optional and
/// passed through to the model uninterpreted.
#[derive(Serialize, Deserialize, utoipa::ToSchema, Clone, Debug, Default)]
pub struct AnalyzeMatchDto {
    pub timestamp: Option<i64>,
    pub phase: Option<String>,
    #[schema(value_type = Object)]
    pub shots: Option<Value>,
    #[schema(value_type = Object)]
    pub turnovers: Option<Value>,
    #[schema(value_type = Object)]
    pub assists: Option<Value>,
    #[schema(value_type = Object)]
    pub rebounds: Option<Value>,
    #[schema(value_type = Object)]
    pub points: Option<Value>,
}

/// Response for a completed analysis, echoing the stored item
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AnalyzedMatchDto {
    pub code: String,
    pub advice: AnalysisRecord,
}

/// Response for `GET /api/match/analysis`
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AnalysisListDto {
    pub message: String,
    pub items: Vec<AnalysisRecord>,
}
