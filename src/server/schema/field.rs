use std::{collections::HashMap, sync::LazyLock};

use serde_json::Value;

use crate::{model::profile::Position, server::error::schema::SchemaError};

/// Extensions accepted for profile photo uploads
pub static SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

static QUARTERS: &[&str] = &["q1", "q2", "q3", "q4"];

/// A typed validation rule for a single updatable field.
///
/// Rules are independent of each other; there is no cross-field validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Non-empty string after trimming
    Title,
    /// Integer epoch milliseconds
    Timestamp,
    /// Array of `{x, y, type}` shot events; empty array is valid
    Shots,
    /// Object with numeric `q1`-`q4`; extra keys ignored, missing keys fail
    QuarterStats,
    /// String of 2-60 characters
    Email,
    /// String of 3-24 characters
    Username,
    /// One of the five fixed position names
    Position,
    /// Number in [90, 300]
    Height,
    /// Number in [25, 300]
    Weight,
    /// String carrying a supported image extension
    Filename,
}

/// Registry mapping field names to their validation rule, resolved once.
///
/// Shared by the partial-update builder and the create paths so the same
/// rule always governs a given field name.
static FIELD_RULES: LazyLock<HashMap<&'static str, FieldRule>> = LazyLock::new(|| {
    HashMap::from([
        ("title", FieldRule::Title),
        ("date", FieldRule::Timestamp),
        ("timestamp", FieldRule::Timestamp),
        ("shots", FieldRule::Shots),
        ("turnovers", FieldRule::QuarterStats),
        ("assists", FieldRule::QuarterStats),
        ("rebounds", FieldRule::QuarterStats),
        ("points", FieldRule::QuarterStats),
        ("email", FieldRule::Email),
        ("username", FieldRule::Username),
        ("position", FieldRule::Position),
        ("height", FieldRule::Height),
        ("weight", FieldRule::Weight),
        ("filename", FieldRule::Filename),
    ])
});

/// Returns the rule registered for a field name, if any
pub fn rule_for(field: &str) -> Option<FieldRule> {
    FIELD_RULES.get(field).copied()
}

/// Validates a raw value against the rule registered for `field`.
///
/// Unknown field names fail; callers filter through an allow-list first, so
/// an unknown name reaching this point is a payload the API never accepts.
pub fn validate_field(field: &str, value: &Value) -> Result<(), SchemaError> {
    let rule = rule_for(field)
        .ok_or_else(|| SchemaError::invalid(field, "unknown field"))?;

    rule.check(value)
        .map_err(|reason| SchemaError::invalid(field, reason))
}

impl FieldRule {
    /// Checks a raw value against this rule, returning a human-readable
    /// reason on failure.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match self {
            Self::Title => {
                let title = value
                    .as_str()
                    .ok_or_else(|| "expected a string".to_string())?;
                if title.trim().is_empty() {
                    return Err("must not be empty".to_string());
                }
                Ok(())
            }
            Self::Timestamp => {
                if value.as_i64().is_none() {
                    return Err("expected an integer timestamp".to_string());
                }
                Ok(())
            }
            Self::Shots => {
                let shots = value
                    .as_array()
                    .ok_or_else(|| "expected an array of shots".to_string())?;
                for (index, shot) in shots.iter().enumerate() {
                    check_shot(shot).map_err(|reason| format!("shot {index}: {reason}"))?;
                }
                Ok(())
            }
            Self::QuarterStats => {
                let stats = value
                    .as_object()
                    .ok_or_else(|| "expected an object keyed by quarter".to_string())?;
                for quarter in QUARTERS {
                    let entry = stats
                        .get(*quarter)
                        .ok_or_else(|| format!("missing quarter {quarter}"))?;
                    if !entry.is_number() {
                        return Err(format!("quarter {quarter} must be a number"));
                    }
                }
                Ok(())
            }
            Self::Email => check_string_length(value, 2, 60),
            Self::Username => check_string_length(value, 3, 24),
            Self::Position => {
                let name = value
                    .as_str()
                    .ok_or_else(|| "expected a string".to_string())?;
                if Position::from_name(name).is_none() {
                    return Err(format!(
                        "must be one of: {}",
                        Position::NAMES.join(", ")
                    ));
                }
                Ok(())
            }
            Self::Height => check_number_range(value, 90.0, 300.0),
            Self::Weight => check_number_range(value, 25.0, 300.0),
            Self::Filename => {
                let filename = value
                    .as_str()
                    .ok_or_else(|| "expected a string".to_string())?;
                let extension = image_extension(filename)?;
                if !SUPPORTED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
                    return Err(format!("unsupported file type: {extension}"));
                }
                Ok(())
            }
        }
    }
}

/// Extracts the lowercased extension of a filename
pub fn image_extension(filename: &str) -> Result<String, String> {
    filename
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .filter(|extension| !extension.is_empty())
        .ok_or_else(|| "filename must include an extension".to_string())
}

fn check_shot(shot: &Value) -> Result<(), String> {
    let shot = shot
        .as_object()
        .ok_or_else(|| "expected an object".to_string())?;

    if !shot.get("x").is_some_and(Value::is_number) {
        return Err("x must be a number".to_string());
    }
    if !shot.get("y").is_some_and(Value::is_number) {
        return Err("y must be a number".to_string());
    }

    match shot.get("type").and_then(Value::as_str) {
        Some("success") | Some("failed") => Ok(()),
        _ => Err("type must be \"success\" or \"failed\"".to_string()),
    }
}

fn check_string_length(value: &Value, min: usize, max: usize) -> Result<(), String> {
    let text = value
        .as_str()
        .ok_or_else(|| "expected a string".to_string())?;
    let length = text.chars().count();
    if length < min || length > max {
        return Err(format!("length must be between {min} and {max} characters"));
    }
    Ok(())
}

fn check_number_range(value: &Value, min: f64, max: f64) -> Result<(), String> {
    let number = value
        .as_f64()
        .ok_or_else(|| "expected a number".to_string())?;
    if number < min || number > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
