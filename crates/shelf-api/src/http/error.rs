//! Application error type mapping to HTTP status codes and the error envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use shelf_types::error::{AuthError, BookmarkError, UserError, ValidationError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Signup, signin and token errors.
    Auth(AuthError),
    /// Current-user profile errors.
    User(UserError),
    /// Bookmark errors.
    Bookmark(BookmarkError),
    /// Request body failed to parse or validate.
    Validation(ValidationError),
    /// Missing or malformed credentials on the request.
    Unauthorized(String),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        AppError::User(e)
    }
}

impl From<BookmarkError> for AppError {
    fn from(e: BookmarkError) -> Self {
        AppError::Bookmark(e)
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Auth(AuthError::CredentialsTaken) => {
                (StatusCode::FORBIDDEN, "CREDENTIALS_TAKEN", "Credentials taken".to_string())
            }
            AppError::Auth(AuthError::InvalidCredentials) => {
                (StatusCode::FORBIDDEN, "INVALID_CREDENTIALS", "Invalid credentials".to_string())
            }
            AppError::Auth(AuthError::Unauthorized(_)) | AppError::Unauthorized(_) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Unauthorized".to_string())
            }
            AppError::User(UserError::NotFound) => {
                (StatusCode::NOT_FOUND, "USER_NOT_FOUND", "User not found".to_string())
            }
            AppError::User(UserError::EmailTaken(_)) => {
                (StatusCode::FORBIDDEN, "CREDENTIALS_TAKEN", "Credentials taken".to_string())
            }
            AppError::Bookmark(BookmarkError::NotFound) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", "Bookmark not found".to_string())
            }
            AppError::Bookmark(BookmarkError::Forbidden) => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", "Access to resource denied".to_string())
            }
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::Auth(_) | AppError::User(_) | AppError::Bookmark(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        match &self {
            AppError::Unauthorized(reason) => tracing::debug!(%reason, "request rejected"),
            AppError::Auth(AuthError::Unauthorized(reason)) => {
                tracing::debug!(%reason, "request rejected")
            }
            _ if status.is_server_error() => tracing::error!(error = ?self, "request failed"),
            _ => {}
        }

        let body = json!({
            "errors": [{
                "code": code,
                "message": message,
            }],
            "meta": {
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }
        });

        (status, Json(body)).into_response()
    }
}
