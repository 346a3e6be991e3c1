//! External-model integration for match analysis.
//!
//! [`prompt`] renders raw match statistics into a deterministic prompt,
//! [`client`] performs the chat completion call, and [`parse`] turns the
//! untrusted model reply into a validated [`crate::model::analysis::Advice`].

pub mod client;
pub mod parse;
pub mod prompt;
