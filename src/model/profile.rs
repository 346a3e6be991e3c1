use serde::{Deserialize, Serialize};

/// The five playing positions a profile may declare
#[derive(Serialize, Deserialize, utoipa::ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    #[serde(rename = "Point Guard")]
    PointGuard,
    #[serde(rename = "Shooting Guard")]
    ShootingGuard,
    #[serde(rename = "Small Forward")]
    SmallForward,
    #[serde(rename = "Power Forward")]
    PowerForward,
    #[serde(rename = "Center")]
    Center,
}

impl Position {
    /// Wire names of all valid positions, used by validation error messages
    pub const NAMES: [&'static str; 5] = [
        "Point Guard",
        "Shooting Guard",
        "Small Forward",
        "Power Forward",
        "Center",
    ];

    /// Returns the position matching the provided wire name, if any
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Point Guard" => Some(Self::PointGuard),
            "Shooting Guard" => Some(Self::ShootingGuard),
            "Small Forward" => Some(Self::SmallForward),
            "Power Forward" => Some(Self::PowerForward),
            "Center" => Some(Self::Center),
            _ => None,
        }
    }
}

/// A player profile as persisted in the record store, keyed by identity id
#[derive(Serialize, Deserialize, utoipa::ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Stable caller identity, the primary key
    pub id: String,
    /// Email resolved from the identity provider at creation time
    pub email: String,
    /// Display name, 3-24 characters, unique across profiles
    pub username: String,
    pub position: Position,
    /// Height in centimeters, 90-300
    pub height: f64,
    /// Weight in kilograms, 25-300
    pub weight: f64,
    /// Object-store path of the profile photo, `profile-photos/{id}.{ext}`
    pub image_path: String,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
}

/// Profile as returned by `GET /api/profile`, with a signed download URL
/// attached for the stored profile photo
#[derive(Serialize, Deserialize, utoipa::ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    #[serde(flatten)]
    pub record: ProfileRecord,
    /// Time-limited signed URL for downloading the profile photo
    pub image_url: String,
}

/// Response for profile creation and update, carrying an upload URL when a
/// new profile photo was requested via `filename`
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileWriteDto {
    pub message: String,
    /// Time-limited signed URL for uploading the profile photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,
}
