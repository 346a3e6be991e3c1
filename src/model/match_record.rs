use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome tag of a single shot event
#[derive(Serialize, Deserialize, utoipa::ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShotOutcome {
    Success,
    Failed,
}

/// A single shot event with court coordinates
#[derive(Serialize, Deserialize, utoipa::ToSchema, Clone, Debug, PartialEq)]
pub struct Shot {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub outcome: ShotOutcome,
}

/// A per-quarter stat map; serialization order is fixed q1 through q4
#[derive(Serialize, Deserialize, utoipa::ToSchema, Clone, Copy, Debug, Default, PartialEq)]
pub struct QuarterStats {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
}

/// A match as persisted in the record store, keyed by (owner, timestamp)
#[derive(Serialize, Deserialize, utoipa::ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Server-assigned record id
    pub id: String,
    /// Owning caller identity
    pub user_id: String,
    /// Start time in epoch milliseconds, unique per owner
    pub timestamp: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots: Option<Vec<Shot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnovers: Option<QuarterStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<QuarterStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebounds: Option<QuarterStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<QuarterStats>,
}

/// Response for match creation, echoing the created record
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedMatchDto {
    pub message: String,
    #[serde(rename = "match")]
    pub match_record: MatchRecord,
}

/// Response for match listing
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MatchListDto {
    pub message: String,
    pub matches: Vec<MatchRecord>,
}

/// Response for a partial match update, echoing only the fields that changed
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedMatchDto {
    pub message: String,
    /// The applied (field, value) pairs; untouched fields are not echoed
    #[schema(value_type = Object)]
    pub updated_fields: Value,
}
