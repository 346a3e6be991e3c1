use async_trait::async_trait;
use serde::Deserialize;

use crate::server::error::identity::IdentityError;

/// An account held by the identity provider
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub email: String,
}

#[derive(Deserialize)]
struct AccountListDto {
    accounts: Vec<Account>,
}

/// Narrow interface to the identity provider's admin API.
///
/// Resolves the caller's stable identity to an account, answers email
/// registration lookups, and removes accounts when a profile is deleted.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves an identity to its account, `None` when unknown
    async fn resolve(&self, identity: &str) -> Result<Option<Account>, IdentityError>;

    /// Whether any account is registered under the given email
    async fn email_registered(&self, email: &str) -> Result<bool, IdentityError>;

    /// Deletes the account behind an identity
    async fn delete_account(&self, identity: &str) -> Result<(), IdentityError>;
}

/// HTTP implementation of [`IdentityProvider`] against the configured admin
/// base URL.
pub struct HttpIdentityProvider {
    http: reqwest::Client,
    base_url: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn resolve(&self, identity: &str) -> Result<Option<Account>, IdentityError> {
        let response = self
            .http
            .get(format!("{}/accounts/{}", self.base_url, identity))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let account = response
            .error_for_status()?
            .json::<Account>()
            .await?;

        Ok(Some(account))
    }

    async fn email_registered(&self, email: &str) -> Result<bool, IdentityError> {
        let list = self
            .http
            .get(format!("{}/accounts", self.base_url))
            .query(&[("email", email)])
            .send()
            .await?
            .error_for_status()?
            .json::<AccountListDto>()
            .await?;

        Ok(!list.accounts.is_empty())
    }

    async fn delete_account(&self, identity: &str) -> Result<(), IdentityError> {
        self.http
            .delete(format!("{}/accounts/{}", self.base_url, identity))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod resolve_tests {
        use super::*;

        #[tokio::test]
        async fn test_resolve_known_identity() {
            let mut server = mockito::Server::new_async().await;
            let mock = server
                .mock("GET", "/accounts/user-1")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{ "id": "user-1", "email": "hoops@example.com" }"#)
                .create_async()
                .await;

            let provider = HttpIdentityProvider::new(&server.url());
            let account = provider.resolve("user-1").await.unwrap();

            assert_eq!(
                account,
                Some(Account {
                    id: "user-1".to_string(),
                    email: "hoops@example.com".to_string(),
                })
            );
            mock.assert_async().await;
        }

        #[tokio::test]
        async fn test_resolve_unknown_identity() {
            let mut server = mockito::Server::new_async().await;
            server
                .mock("GET", "/accounts/ghost")
                .with_status(404)
                .create_async()
                .await;

            let provider = HttpIdentityProvider::new(&server.url());
            let account = provider.resolve("ghost").await.unwrap();

            assert_eq!(account, None);
        }

        #[tokio::test]
        async fn test_resolve_upstream_error() {
            let mut server = mockito::Server::new_async().await;
            server
                .mock("GET", "/accounts/user-1")
                .with_status(500)
                .create_async()
                .await;

            let provider = HttpIdentityProvider::new(&server.url());
            let result = provider.resolve("user-1").await;

            assert!(result.is_err());
        }
    }

    mod email_registered_tests {
        use super::*;

        #[tokio::test]
        async fn test_email_found() {
            let mut server = mockito::Server::new_async().await;
            server
                .mock("GET", "/accounts")
                .match_query(mockito::Matcher::UrlEncoded(
                    "email".into(),
                    "hoops@example.com".into(),
                ))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{ "accounts": [{ "id": "user-1", "email": "hoops@example.com" }] }"#)
                .create_async()
                .await;

            let provider = HttpIdentityProvider::new(&server.url());

            assert!(provider.email_registered("hoops@example.com").await.unwrap());
        }

        #[tokio::test]
        async fn test_email_not_found() {
            let mut server = mockito::Server::new_async().await;
            server
                .mock("GET", "/accounts")
                .match_query(mockito::Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{ "accounts": [] }"#)
                .create_async()
                .await;

            let provider = HttpIdentityProvider::new(&server.url());

            assert!(!provider.email_registered("nobody@example.com").await.unwrap());
        }
    }

    mod delete_account_tests {
        use super::*;

        #[tokio::test]
        async fn test_delete_account() {
            let mut server = mockito::Server::new_async().await;
            let mock = server
                .mock("DELETE", "/accounts/user-1")
                .with_status(204)
                .create_async()
                .await;

            let provider = HttpIdentityProvider::new(&server.url());

            provider.delete_account("user-1").await.unwrap();
            mock.assert_async().await;
        }
    }
}
