//! Shared fixtures for integration-style tests: a mockito server standing in
//! for the identity provider and the model provider, plus an in-memory
//! record store.

pub mod setup;
