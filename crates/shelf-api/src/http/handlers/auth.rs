//! Signup and signin handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use shelf_types::auth::{AccessToken, AuthRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::ValidatedJson;
use crate::state::AppState;

/// POST /auth/signup - Create an account and return an access token.
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<AuthRequest>,
) -> Result<(StatusCode, Json<AccessToken>), AppError> {
    let token = state.auth_service.signup(&body).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

/// POST /auth/signin - Exchange credentials for an access token.
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<AuthRequest>,
) -> Result<Json<AccessToken>, AppError> {
    let token = state.auth_service.signin(&body).await?;
    Ok(Json(token))
}
