//! Service layer for business logic and orchestration.
//!
//! Services coordinate the schema engine, the record store, and the external
//! collaborators: profile lifecycle, match lifecycle, and the match analysis
//! pipeline.

pub mod analysis;
pub mod match_record;
pub mod profile;
