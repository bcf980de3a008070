//! Current-user profile handlers.

use axum::Json;
use axum::extract::State;

use shelf_types::user::{EditUserRequest, UserProfile};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::extractors::json::ValidatedJson;
use crate::state::AppState;

/// GET /users/me - Profile of the authenticated user.
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    let profile = state.user_service.me(&user.id).await?;
    Ok(Json(profile))
}

/// PATCH /users/me - Edit the authenticated user's profile.
pub async fn edit_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(body): ValidatedJson<EditUserRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = state.user_service.edit(&user.id, body).await?;
    Ok(Json(profile))
}
