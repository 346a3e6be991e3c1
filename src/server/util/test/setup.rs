use std::{sync::Arc, time::Duration};

use mockito::{Mock, Server, ServerGuard};
use serde_json::json;

use crate::{
    model::{match_record::MatchRecord, profile::ProfileRecord},
    server::{
        data::{
            identity::HttpIdentityProvider,
            media::SignedMediaStore,
            memory::MemoryStore,
            store::{timestamp_sort_key, to_item, RecordKey, RecordStore, MATCH_TABLE, PROFILE_TABLE},
        },
        error::Error,
        llm::client::AdvisorClient,
        model::{app::AppState, identity::Caller},
    },
};

pub static TEST_MEDIA_BASE_URL: &str = "http://localhost:8080";
pub static TEST_MEDIA_SECRET: &str = "test_signing_secret";
static TEST_ADVISOR_API_KEY: &str = "test_api_key";
static TEST_ADVISOR_MODEL: &str = "gpt-4-1106-preview";

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: AppState,
}

/// Builds the [`AppState`] used across integration tests: the in-memory
/// store plus identity and model adapters pointed at a mockito server.
pub async fn test_setup() -> TestSetup {
    let mock_server = Server::new_async().await;
    let mock_server_url = mock_server.url();

    let advisor = AdvisorClient::new(
        &mock_server_url,
        TEST_ADVISOR_API_KEY,
        TEST_ADVISOR_MODEL,
        Duration::from_secs(5),
    )
    .expect("Failed to build advisor client");

    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        identity: Arc::new(HttpIdentityProvider::new(&mock_server_url)),
        media: Arc::new(SignedMediaStore::new(TEST_MEDIA_BASE_URL, TEST_MEDIA_SECRET)),
        advisor: Arc::new(advisor),
    };

    TestSetup {
        server: mock_server,
        state,
    }
}

/// A caller fixture with a fixed identity
pub fn test_caller() -> Caller {
    Caller {
        id: "user-1".to_string(),
    }
}

/// Inserts a stored profile for the given identity
pub async fn test_setup_create_profile(
    test: &TestSetup,
    identity: &str,
    username: &str,
) -> Result<ProfileRecord, Error> {
    let record = ProfileRecord {
        id: identity.to_string(),
        email: format!("{username}@example.com"),
        username: username.to_string(),
        position: crate::model::profile::Position::PointGuard,
        height: 185.0,
        weight: 82.0,
        image_path: format!("profile-photos/{identity}.png"),
        timestamp: 1700000000000,
    };

    test.state
        .store
        .put(
            PROFILE_TABLE,
            &RecordKey::partition(identity),
            to_item(&record)?,
        )
        .await?;

    Ok(record)
}

/// Inserts a stored match for the given identity
pub async fn test_setup_create_match(
    test: &TestSetup,
    identity: &str,
    timestamp: i64,
    title: &str,
) -> Result<MatchRecord, Error> {
    let record = MatchRecord {
        id: format!("match-{timestamp}"),
        user_id: identity.to_string(),
        timestamp,
        title: title.to_string(),
        date: None,
        shots: None,
        turnovers: None,
        assists: None,
        rebounds: None,
        points: None,
    };

    test.state
        .store
        .put(
            MATCH_TABLE,
            &RecordKey::composite(identity, timestamp_sort_key(timestamp)),
            to_item(&record)?,
        )
        .await?;

    Ok(record)
}

/// Mocks the identity provider's account resolution endpoint
pub async fn mock_account_endpoint(
    server: &mut ServerGuard,
    identity: &str,
    email: &str,
) -> Mock {
    server
        .mock("GET", format!("/accounts/{identity}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "id": identity, "email": email }).to_string())
        .create_async()
        .await
}

/// Mocks the identity provider's email lookup endpoint
pub async fn mock_email_lookup_endpoint(
    server: &mut ServerGuard,
    email: &str,
    registered: bool,
) -> Mock {
    let accounts = if registered {
        json!([{ "id": "account-1", "email": email }])
    } else {
        json!([])
    };

    server
        .mock("GET", "/accounts")
        .match_query(mockito::Matcher::UrlEncoded("email".into(), email.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "accounts": accounts }).to_string())
        .create_async()
        .await
}

/// Mocks the identity provider's account deletion endpoint
pub async fn mock_delete_account_endpoint(server: &mut ServerGuard, identity: &str) -> Mock {
    server
        .mock("DELETE", format!("/accounts/{identity}").as_str())
        .with_status(204)
        .create_async()
        .await
}

/// A well-formed advice object in the shape the model is instructed to emit
pub fn mock_advice_json() -> serde_json::Value {
    json!({
        "mainAdvice": {
            "title": "Attack the paint",
            "text": "Most missed shots came from beyond the arc.",
            "comment": "Q3 shows a sharp drop in points.",
            "tag": ["offense"]
        },
        "secondaryAdvices": [
            {
                "title": "Protect the ball",
                "text": "Turnovers doubled in Q4.",
                "comment": "Fatigue likely plays a role.",
                "tag": ["ball handling"]
            }
        ]
    })
}

/// Mocks the model provider's chat completion endpoint with a fixed reply
pub async fn mock_chat_endpoint(server: &mut ServerGuard, reply: &str) -> Mock {
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "choices": [{ "message": { "content": reply } }] }).to_string())
        .create_async()
        .await
}

/// Mocks a failing chat completion endpoint
pub async fn mock_chat_failure_endpoint(server: &mut ServerGuard, status: usize) -> Mock {
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(status)
        .create_async()
        .await
}
