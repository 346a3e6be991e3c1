use serde_json::{Map, Value};

use crate::server::{error::schema::SchemaError, schema::field::validate_field};

/// A minimal mutation descriptor: the ordered (field, value) pairs a partial
/// update applies. Only fields explicitly present in the payload appear
/// here; everything else stored stays untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePatch {
    pub fields: Vec<(String, Value)>,
}

/// Builds an all-or-nothing mutation descriptor from an untrusted payload.
///
/// For each allow-listed field present in the payload the value is checked
/// against its registered rule; the first failure aborts the whole request
/// naming the offending field, so no partial change is ever applied. A
/// payload containing none of the allow-listed fields is rejected outright.
/// Fields outside the allow-list are ignored.
pub fn build_patch(
    payload: &Map<String, Value>,
    allowed: &[&str],
) -> Result<UpdatePatch, SchemaError> {
    let mut fields = Vec::new();

    for field in allowed {
        if let Some(value) = payload.get(*field) {
            validate_field(field, value)?;
            fields.push((field.to_string(), value.clone()));
        }
    }

    if fields.is_empty() {
        return Err(SchemaError::NoValidFields);
    }

    Ok(UpdatePatch { fields })
}
