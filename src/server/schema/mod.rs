//! Field validation and the partial-update engine.
//!
//! [`field`] holds the static registry mapping each updatable field name to
//! a typed validation rule. [`update`] builds minimal all-or-nothing
//! mutation descriptors from untrusted payloads. Both share the per-entity
//! allow-lists below so the validator and the update builder cannot drift
//! apart.

pub mod field;
pub mod update;

/// Fields a match update may touch, in the order they are applied
pub static MATCH_FIELDS: &[&str] = &[
    "title",
    "date",
    "shots",
    "turnovers",
    "assists",
    "rebounds",
    "points",
];

/// Fields a profile update may touch, in the order they are applied
///
/// `filename` is allow-listed so it participates in all-or-nothing
/// validation; the profile service rewrites it into the derived `imagePath`
/// before the patch reaches the store.
pub static PROFILE_FIELDS: &[&str] = &[
    "email",
    "username",
    "position",
    "height",
    "weight",
    "filename",
];
