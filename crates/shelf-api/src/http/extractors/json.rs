//! JSON body extractor that runs [`Validate`] before the handler.
//!
//! Unknown fields are ignored by serde; malformed JSON, wrong types and
//! failed validation all reject with 400.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use shelf_types::error::ValidationError;
use shelf_types::validation::Validate;

use crate::http::error::AppError;

/// A deserialized and validated request body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::new("body", rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use shelf_types::bookmark::CreateBookmarkRequest;

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/bookmarks")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let req = json_request(r#"{"title":"first bookmark","link":"https://example.com","extra":1}"#);
        let ValidatedJson(body) = ValidatedJson::<CreateBookmarkRequest>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(body.title, "first bookmark");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let req = json_request(r#"{"title":"first bookmark"}"#);
        let err = ValidatedJson::<CreateBookmarkRequest>::from_request(req, &())
            .await
            .unwrap_err();
        match err {
            AppError::Validation(e) => assert_eq!(e.field, "link"),
            other => panic!("unexpected rejection: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let req = json_request(r#"{"title": 42"#);
        let err = ValidatedJson::<CreateBookmarkRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
