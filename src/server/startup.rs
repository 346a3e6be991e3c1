use std::{sync::Arc, time::Duration};

use crate::server::{
    config::Config,
    data::{
        identity::{HttpIdentityProvider, IdentityProvider},
        media::{MediaStore, SignedMediaStore},
        memory::MemoryStore,
        store::RecordStore,
    },
    error::Error,
    llm::client::AdvisorClient,
};

/// Build the record store backing all persisted state
pub fn build_store() -> Arc<dyn RecordStore> {
    Arc::new(MemoryStore::new())
}

/// Build the identity provider adapter from the configured admin base URL
pub fn build_identity_provider(config: &Config) -> Arc<dyn IdentityProvider> {
    Arc::new(HttpIdentityProvider::new(&config.identity_api_url))
}

/// Build the signed media URL issuer
pub fn build_media_store(config: &Config) -> Arc<dyn MediaStore> {
    Arc::new(SignedMediaStore::new(
        &config.media_base_url,
        &config.media_signing_secret,
    ))
}

/// Build and configure the model client with the provided credentials
pub fn build_advisor_client(config: &Config) -> Result<AdvisorClient, Error> {
    let advisor = AdvisorClient::new(
        &config.advisor_api_url,
        &config.advisor_api_key,
        &config.advisor_model,
        Duration::from_secs(config.advisor_timeout_secs),
    )?;

    Ok(advisor)
}
