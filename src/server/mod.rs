//! Server application core modules.
//!
//! This module contains all server-side functionality for the Courtside
//! application: HTTP routing, request validation, the partial-update engine,
//! storage and identity adapters, and the LLM-backed match analysis pipeline.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod llm;
pub mod model;
pub mod router;
pub mod schema;
pub mod service;
pub mod startup;
pub mod util;
