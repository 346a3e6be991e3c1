use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    model::{
        api::MessageDto,
        profile::{Position, ProfileDto, ProfileRecord, ProfileWriteDto},
    },
    server::{
        data::{
            identity::IdentityProvider,
            media::MediaStore,
            store::{from_item, to_item, RecordKey, RecordStore, PROFILE_TABLE},
        },
        error::{
            auth::AuthError, profile::ProfileError, schema::SchemaError, store::StoreError, Error,
        },
        model::{app::AppState, identity::Caller},
        schema::{field::validate_field, update::build_patch, PROFILE_FIELDS},
    },
};

/// Fields a profile creation payload must carry; email comes from the
/// identity provider, not the payload
static REQUIRED_CREATE_FIELDS: &[&str] = &["username", "position", "height", "weight", "filename"];

#[derive(Deserialize)]
struct CreateProfileDto {
    username: String,
    position: Position,
    height: f64,
    weight: f64,
    filename: String,
}

pub struct ProfileService<'a> {
    store: &'a dyn RecordStore,
    identity: &'a dyn IdentityProvider,
    media: &'a dyn MediaStore,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(state: &'a AppState) -> Self {
        Self {
            store: state.store.as_ref(),
            identity: state.identity.as_ref(),
            media: state.media.as_ref(),
        }
    }

    /// Creates the caller's profile.
    ///
    /// The email is resolved from the identity provider rather than taken
    /// from the payload. Creation is rejected when the identity already has
    /// a profile, the username is taken (compared case-insensitively), or
    /// the email is unknown to the identity provider. On success a signed
    /// upload URL for the profile photo is returned.
    pub async fn create(
        &self,
        caller: &Caller,
        payload: &Map<String, Value>,
    ) -> Result<ProfileWriteDto, Error> {
        let account = self
            .identity
            .resolve(&caller.id)
            .await?
            .ok_or_else(|| AuthError::UnknownIdentity(caller.id.clone()))?;

        for &field in REQUIRED_CREATE_FIELDS {
            let value = payload
                .get(field)
                .ok_or(SchemaError::MissingField(field))?;
            validate_field(field, value)?;
        }
        validate_field("email", &Value::String(account.email.clone()))?;

        let body: CreateProfileDto = serde_json::from_value(Value::Object(payload.clone()))
            .map_err(|err| SchemaError::invalid("body", err.to_string()))?;

        if !self.identity.email_registered(&account.email).await? {
            return Err(ProfileError::EmailNotRegistered.into());
        }

        let profiles = self.store.scan(PROFILE_TABLE).await?;
        let username_taken = profiles.iter().any(|item| {
            item.get("username")
                .and_then(Value::as_str)
                .is_some_and(|existing| existing.eq_ignore_ascii_case(&body.username))
        });
        if username_taken {
            return Err(ProfileError::UsernameTaken.into());
        }

        let upload = self.media.upload_url(&caller.id, &body.filename)?;

        let record = ProfileRecord {
            id: caller.id.clone(),
            email: account.email,
            username: body.username,
            position: body.position,
            height: body.height,
            weight: body.weight,
            image_path: upload.path.clone(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        };

        let created = self
            .store
            .put_if_absent(
                PROFILE_TABLE,
                &RecordKey::partition(&caller.id),
                to_item(&record)?,
            )
            .await?;
        if !created {
            return Err(ProfileError::AlreadyExists.into());
        }

        Ok(ProfileWriteDto {
            message: "Profile created successfully".to_string(),
            upload_url: Some(upload.url),
        })
    }

    /// Applies a partial update to the caller's profile.
    ///
    /// All-or-nothing over the profile allow-list; a `filename` entry is
    /// rewritten into the derived `imagePath` and answered with a fresh
    /// upload URL.
    pub async fn update(
        &self,
        caller: &Caller,
        payload: &Map<String, Value>,
    ) -> Result<ProfileWriteDto, Error> {
        let patch = build_patch(payload, PROFILE_FIELDS)?;

        let mut upload_url = None;
        let mut fields = Vec::with_capacity(patch.fields.len());

        for (field, value) in patch.fields {
            if field == "filename" {
                let filename = value.as_str().unwrap_or_default();
                let upload = self.media.upload_url(&caller.id, filename)?;

                fields.push(("imagePath".to_string(), Value::String(upload.path.clone())));
                upload_url = Some(upload.url);
            } else {
                fields.push((field, value));
            }
        }

        self.store
            .update(PROFILE_TABLE, &RecordKey::partition(&caller.id), &fields)
            .await
            .map_err(|err| match err {
                StoreError::NotFound => Error::from(ProfileError::NotFound),
                other => other.into(),
            })?;

        Ok(ProfileWriteDto {
            message: "Profile updated successfully".to_string(),
            upload_url,
        })
    }

    /// Fetches the caller's profile with a signed download URL for the
    /// stored profile photo.
    pub async fn get(&self, caller: &Caller) -> Result<ProfileDto, Error> {
        let item = self
            .store
            .get(PROFILE_TABLE, &RecordKey::partition(&caller.id))
            .await?
            .ok_or(ProfileError::NotFound)?;

        let record: ProfileRecord = from_item(item)?;
        let download = self.media.download_url(&record.image_path)?;

        Ok(ProfileDto {
            record,
            image_url: download.url,
        })
    }

    /// Deletes the caller's profile together with the identity-provider
    /// account behind it.
    pub async fn delete(&self, caller: &Caller) -> Result<MessageDto, Error> {
        self.store
            .delete(PROFILE_TABLE, &RecordKey::partition(&caller.id))
            .await?;

        self.identity.delete_account(&caller.id).await?;

        Ok(MessageDto {
            message: "Profile successfully deleted".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use crate::server::{
        data::store::{RecordStore, PROFILE_TABLE},
        util::test::setup::{
            mock_account_endpoint, mock_delete_account_endpoint, mock_email_lookup_endpoint,
            test_caller, test_setup, test_setup_create_profile,
        },
    };

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    fn create_body() -> Map<String, Value> {
        payload(json!({
            "username": "baller42",
            "position": "Point Guard",
            "height": 185,
            "weight": 82,
            "filename": "me.png"
        }))
    }

    mod create_tests {
        use super::*;

        use crate::server::{
            error::{profile::ProfileError, Error},
            service::profile::ProfileService,
        };

        /// Expect success with an upload URL when all fields validate
        #[tokio::test]
        async fn test_create_profile_success() {
            let mut test = test_setup().await;
            mock_account_endpoint(&mut test.server, "user-1", "hoops@example.com").await;
            mock_email_lookup_endpoint(&mut test.server, "hoops@example.com", true).await;

            let service = ProfileService::new(&test.state);
            let result = service.create(&test_caller(), &create_body()).await.unwrap();

            assert!(result.upload_url.is_some());

            let stored = test.state.store.scan(PROFILE_TABLE).await.unwrap();
            assert_eq!(stored.len(), 1);
            assert_eq!(stored[0].get("username"), Some(&json!("baller42")));
            assert_eq!(stored[0].get("email"), Some(&json!("hoops@example.com")));
            assert_eq!(
                stored[0].get("imagePath"),
                Some(&json!("profile-photos/user-1.png"))
            );
        }

        /// An out-of-range height rejects the request with no store write
        /// and no upload URL
        #[tokio::test]
        async fn test_create_profile_invalid_height() {
            let mut test = test_setup().await;
            mock_account_endpoint(&mut test.server, "user-1", "hoops@example.com").await;

            let mut body = create_body();
            body.insert("height".to_string(), json!(400));

            let service = ProfileService::new(&test.state);
            let result = service.create(&test_caller(), &body).await;

            assert!(matches!(result, Err(Error::SchemaError(_))));

            let stored = test.state.store.scan(PROFILE_TABLE).await.unwrap();
            assert!(stored.is_empty());
        }

        #[tokio::test]
        async fn test_create_profile_missing_field() {
            let mut test = test_setup().await;
            mock_account_endpoint(&mut test.server, "user-1", "hoops@example.com").await;

            let mut body = create_body();
            body.remove("position");

            let service = ProfileService::new(&test.state);
            let result = service.create(&test_caller(), &body).await;

            assert!(matches!(result, Err(Error::SchemaError(_))));
        }

        /// Expect a conflict when the identity already has a profile
        #[tokio::test]
        async fn test_create_profile_already_exists() {
            let mut test = test_setup().await;
            mock_account_endpoint(&mut test.server, "user-1", "hoops@example.com").await;
            mock_email_lookup_endpoint(&mut test.server, "hoops@example.com", true).await;
            test_setup_create_profile(&test, "user-1", "existing")
                .await
                .unwrap();

            let service = ProfileService::new(&test.state);
            let result = service.create(&test_caller(), &create_body()).await;

            assert!(matches!(
                result,
                Err(Error::ProfileError(ProfileError::AlreadyExists))
            ));
        }

        /// Username uniqueness is compared case-insensitively
        #[tokio::test]
        async fn test_create_profile_username_taken() {
            let mut test = test_setup().await;
            mock_account_endpoint(&mut test.server, "user-1", "hoops@example.com").await;
            mock_email_lookup_endpoint(&mut test.server, "hoops@example.com", true).await;
            test_setup_create_profile(&test, "user-2", "BALLER42")
                .await
                .unwrap();

            let service = ProfileService::new(&test.state);
            let result = service.create(&test_caller(), &create_body()).await;

            assert!(matches!(
                result,
                Err(Error::ProfileError(ProfileError::UsernameTaken))
            ));
        }

        #[tokio::test]
        async fn test_create_profile_email_not_registered() {
            let mut test = test_setup().await;
            mock_account_endpoint(&mut test.server, "user-1", "hoops@example.com").await;
            mock_email_lookup_endpoint(&mut test.server, "hoops@example.com", false).await;

            let service = ProfileService::new(&test.state);
            let result = service.create(&test_caller(), &create_body()).await;

            assert!(matches!(
                result,
                Err(Error::ProfileError(ProfileError::EmailNotRegistered))
            ));
        }

        #[tokio::test]
        async fn test_create_profile_unknown_identity() {
            let mut test = test_setup().await;
            test.server
                .mock("GET", "/accounts/user-1")
                .with_status(404)
                .create_async()
                .await;

            let service = ProfileService::new(&test.state);
            let result = service.create(&test_caller(), &create_body()).await;

            assert!(matches!(result, Err(Error::AuthError(_))));
        }
    }

    mod update_tests {
        use super::*;

        use crate::server::{
            error::{profile::ProfileError, schema::SchemaError, Error},
            service::profile::ProfileService,
        };

        /// Only the submitted field changes; all others stay untouched
        #[tokio::test]
        async fn test_update_profile_partial() {
            let test = test_setup().await;
            let record = test_setup_create_profile(&test, "user-1", "baller42")
                .await
                .unwrap();

            let service = ProfileService::new(&test.state);
            let body = payload(json!({ "email": "new@example.com" }));
            let result = service.update(&test_caller(), &body).await.unwrap();

            assert!(result.upload_url.is_none());

            let stored = service.get(&test_caller()).await.unwrap().record;
            assert_eq!(stored.email, "new@example.com");
            assert_eq!(stored.username, record.username);
            assert_eq!(stored.height, record.height);
        }

        /// A filename entry rewrites the stored image path and answers with
        /// an upload URL
        #[tokio::test]
        async fn test_update_profile_filename() {
            let test = test_setup().await;
            test_setup_create_profile(&test, "user-1", "baller42")
                .await
                .unwrap();

            let service = ProfileService::new(&test.state);
            let body = payload(json!({ "filename": "fresh.jpg" }));
            let result = service.update(&test_caller(), &body).await.unwrap();

            assert!(result.upload_url.is_some());

            let stored = service.get(&test_caller()).await.unwrap().record;
            assert_eq!(stored.image_path, "profile-photos/user-1.jpg");
        }

        /// One invalid value rejects the whole update; nothing is applied
        #[tokio::test]
        async fn test_update_profile_all_or_nothing() {
            let test = test_setup().await;
            let record = test_setup_create_profile(&test, "user-1", "baller42")
                .await
                .unwrap();

            let service = ProfileService::new(&test.state);
            let body = payload(json!({ "email": "new@example.com", "weight": 5 }));
            let result = service.update(&test_caller(), &body).await;

            assert!(matches!(result, Err(Error::SchemaError(_))));

            let stored = service.get(&test_caller()).await.unwrap().record;
            assert_eq!(stored.email, record.email);
            assert_eq!(stored.weight, record.weight);
        }

        #[tokio::test]
        async fn test_update_profile_no_valid_fields() {
            let test = test_setup().await;
            test_setup_create_profile(&test, "user-1", "baller42")
                .await
                .unwrap();

            let service = ProfileService::new(&test.state);
            let body = payload(json!({ "favoriteTeam": "anyone" }));
            let result = service.update(&test_caller(), &body).await;

            assert!(matches!(
                result,
                Err(Error::SchemaError(SchemaError::NoValidFields))
            ));
        }

        #[tokio::test]
        async fn test_update_profile_not_found() {
            let test = test_setup().await;

            let service = ProfileService::new(&test.state);
            let body = payload(json!({ "email": "new@example.com" }));
            let result = service.update(&test_caller(), &body).await;

            assert!(matches!(
                result,
                Err(Error::ProfileError(ProfileError::NotFound))
            ));
        }
    }

    mod get_tests {
        use super::*;

        use crate::server::{
            error::{profile::ProfileError, Error},
            service::profile::ProfileService,
        };

        #[tokio::test]
        async fn test_get_profile_success() {
            let test = test_setup().await;
            let record = test_setup_create_profile(&test, "user-1", "baller42")
                .await
                .unwrap();

            let service = ProfileService::new(&test.state);
            let profile = service.get(&test_caller()).await.unwrap();

            assert_eq!(profile.record, record);
            assert!(profile.image_url.contains("profile-photos/user-1.png"));
        }

        /// Two reads of unchanged state return the identical record
        #[tokio::test]
        async fn test_get_profile_idempotent() {
            let test = test_setup().await;
            test_setup_create_profile(&test, "user-1", "baller42")
                .await
                .unwrap();

            let service = ProfileService::new(&test.state);
            let first = service.get(&test_caller()).await.unwrap();
            let second = service.get(&test_caller()).await.unwrap();

            assert_eq!(first.record, second.record);
        }

        #[tokio::test]
        async fn test_get_profile_not_found() {
            let test = test_setup().await;

            let service = ProfileService::new(&test.state);
            let result = service.get(&test_caller()).await;

            assert!(matches!(
                result,
                Err(Error::ProfileError(ProfileError::NotFound))
            ));
        }
    }

    mod delete_tests {
        use super::*;

        use crate::server::service::profile::ProfileService;

        /// Deletion removes the record and the identity-provider account
        #[tokio::test]
        async fn test_delete_profile() {
            let mut test = test_setup().await;
            let account_mock = mock_delete_account_endpoint(&mut test.server, "user-1").await;
            test_setup_create_profile(&test, "user-1", "baller42")
                .await
                .unwrap();

            let service = ProfileService::new(&test.state);
            service.delete(&test_caller()).await.unwrap();

            let stored = test.state.store.scan(PROFILE_TABLE).await.unwrap();
            assert!(stored.is_empty());
            account_mock.assert_async().await;
        }
    }
}
