use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::media::MediaError,
    schema::field::{image_extension, SUPPORTED_IMAGE_EXTENSIONS},
};

/// Seconds an upload URL stays valid
const UPLOAD_TTL_SECS: i64 = 60;
/// Seconds a download URL stays valid
const DOWNLOAD_TTL_SECS: i64 = 3600;

/// A time-limited URL together with the object path it addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    pub url: String,
    pub path: String,
}

/// Issues time-limited upload/download URLs for profile photos.
pub trait MediaStore: Send + Sync {
    /// URL for uploading the photo of `identity`; the object path is derived
    /// from the identity and the filename's extension
    fn upload_url(&self, identity: &str, filename: &str) -> Result<SignedUrl, MediaError>;

    /// URL for downloading the object at `path`
    fn download_url(&self, path: &str) -> Result<SignedUrl, MediaError>;
}

#[derive(Serialize, Deserialize)]
pub struct MediaClaims {
    /// Object path the token grants access to
    pub sub: String,
    /// HTTP method the token authorizes
    pub method: String,
    /// Content type pinned at signing time, empty for downloads
    pub content_type: String,
    /// Expiry, epoch seconds
    pub exp: i64,
}

/// Reference [`MediaStore`] minting signed URLs under a public base URL.
pub struct SignedMediaStore {
    base_url: String,
    key: EncodingKey,
}

impl SignedMediaStore {
    pub fn new(base_url: &str, secret: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    fn sign(&self, claims: &MediaClaims) -> Result<String, MediaError> {
        let token = encode(&Header::default(), claims, &self.key)?;

        Ok(format!("{}/media/{}?token={}", self.base_url, claims.sub, token))
    }
}

impl MediaStore for SignedMediaStore {
    fn upload_url(&self, identity: &str, filename: &str) -> Result<SignedUrl, MediaError> {
        let extension = image_extension(filename).map_err(|_| MediaError::MissingExtension)?;

        if !SUPPORTED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(MediaError::UnsupportedFileType(extension));
        }

        let content_type = match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            _ => "image/png",
        };

        let path = format!("profile-photos/{identity}.{extension}");
        let claims = MediaClaims {
            sub: path.clone(),
            method: "PUT".to_string(),
            content_type: content_type.to_string(),
            exp: Utc::now().timestamp() + UPLOAD_TTL_SECS,
        };

        Ok(SignedUrl {
            url: self.sign(&claims)?,
            path,
        })
    }

    fn download_url(&self, path: &str) -> Result<SignedUrl, MediaError> {
        let claims = MediaClaims {
            sub: path.to_string(),
            method: "GET".to_string(),
            content_type: String::new(),
            exp: Utc::now().timestamp() + DOWNLOAD_TTL_SECS,
        };

        Ok(SignedUrl {
            url: self.sign(&claims)?,
            path: path.to_string(),
        })
    }
}
