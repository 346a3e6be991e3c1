//! Courtside: basketball match tracking and LLM-backed coaching analysis API.
//!
//! The crate is split into wire-level data models ([`model`]) and the server
//! application itself ([`server`]), which contains routing, validation,
//! storage adapters, and the match analysis pipeline.

pub mod model;
pub mod server;
