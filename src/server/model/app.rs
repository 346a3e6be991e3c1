use std::sync::Arc;

use crate::server::{
    data::{identity::IdentityProvider, media::MediaStore, store::RecordStore},
    llm::client::AdvisorClient,
};

/// Shared application state handed to every handler.
///
/// All collaborators sit behind trait objects so tests can swap in the
/// in-memory store and mocked HTTP adapters.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub media: Arc<dyn MediaStore>,
    pub advisor: Arc<AdvisorClient>,
}
