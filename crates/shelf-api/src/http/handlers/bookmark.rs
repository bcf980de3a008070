//! Bookmark CRUD handlers for the REST API.
//!
//! Every handler is scoped to the authenticated user. A path id that is not
//! a UUID cannot name anything the caller owns, so it takes the same path as
//! an unknown id: 404 on read, 403 on edit and delete.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use shelf_types::bookmark::{Bookmark, BookmarkId, CreateBookmarkRequest, EditBookmarkRequest};
use shelf_types::error::BookmarkError;

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::http::extractors::json::ValidatedJson;
use crate::state::AppState;

/// GET /bookmarks - All bookmarks of the caller.
pub async fn list_bookmarks(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Bookmark>>, AppError> {
    let bookmarks = state.bookmark_service.list(&user.id).await?;
    Ok(Json(bookmarks))
}

/// GET /bookmarks/{id} - A single bookmark owned by the caller.
pub async fn get_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Bookmark>, AppError> {
    let id: BookmarkId = id.parse().map_err(|_| BookmarkError::NotFound)?;

    state
        .bookmark_service
        .get_by_id(&user.id, &id)
        .await?
        .map(Json)
        .ok_or(AppError::Bookmark(BookmarkError::NotFound))
}

/// POST /bookmarks - Create a bookmark owned by the caller.
pub async fn create_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(body): ValidatedJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), AppError> {
    let bookmark = state.bookmark_service.create(&user.id, body).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// PATCH /bookmarks/{id} - Partially update a bookmark owned by the caller.
pub async fn edit_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<EditBookmarkRequest>,
) -> Result<Json<Bookmark>, AppError> {
    let id: BookmarkId = id.parse().map_err(|_| BookmarkError::Forbidden)?;
    let bookmark = state.bookmark_service.edit_by_id(&user.id, &id, &body).await?;
    Ok(Json(bookmark))
}

/// DELETE /bookmarks/{id} - Remove a bookmark owned by the caller.
pub async fn delete_bookmark(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id: BookmarkId = id.parse().map_err(|_| BookmarkError::Forbidden)?;
    state.bookmark_service.delete_by_id(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
