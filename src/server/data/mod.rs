//! Adapters for external collaborators.
//!
//! Each collaborator is reached through a narrow trait so services stay
//! decoupled from the concrete backend: the key-value record store, the
//! identity provider's admin API, and the signed media URL issuer.

pub mod identity;
pub mod media;
pub mod memory;
pub mod store;
