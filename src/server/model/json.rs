use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::schema::SchemaError;

/// JSON body extractor rejecting malformed bodies with the API's structured
/// error shape.
///
/// Axum's own `Json` rejection answers with a plain-text body; wrapping it
/// routes body-parse failures through the same `{ code, message }` path as
/// every other validation error.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = SchemaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| SchemaError::MalformedBody(rejection.body_text()))?;

        Ok(Self(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use serde_json::{Map, Value};

    fn json_request(body: &str) -> Request {
        Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    mod from_request_tests {
        use super::*;

        #[tokio::test]
        async fn test_valid_body_parses() {
            let request = json_request(r#"{ "title": "Season opener" }"#);

            let Json(body) = Json::<Map<String, Value>>::from_request(request, &())
                .await
                .unwrap();

            assert_eq!(body.get("title"), Some(&Value::String("Season opener".to_string())));
        }

        #[tokio::test]
        async fn test_malformed_body_is_schema_error() {
            let request = json_request("{ not json");

            let result = Json::<Map<String, Value>>::from_request(request, &()).await;

            assert!(matches!(result, Err(SchemaError::MalformedBody(_))));
        }

        /// The rejection carries the structured error body, not plain text
        #[tokio::test]
        async fn test_malformed_body_response_shape() {
            let request = json_request("{ not json");

            let rejection = Json::<Map<String, Value>>::from_request(request, &())
                .await
                .unwrap_err();
            let response = rejection.into_response();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();

            assert_eq!(body["code"], "BAD_REQUEST");
            assert!(body["message"]
                .as_str()
                .unwrap()
                .starts_with("Malformed request body"));
        }
    }
}
