//! Server application models and type definitions.
//!
//! Contains the shared application state handed to handlers and the caller
//! identity extractor populated by the fronting authorizer.

pub mod app;
pub mod identity;
pub mod json;
