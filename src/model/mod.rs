//! Wire-level data models shared by HTTP handlers and services.
//!
//! This module contains the DTOs serialized to and from API clients: error
//! bodies, player profiles, match records, and the structured coaching advice
//! returned by the analysis pipeline.

pub mod analysis;
pub mod api;
pub mod match_record;
pub mod profile;
