//! Bookmark service.
//!
//! Every operation is scoped by the authenticated user. Reads of someone
//! else's bookmark behave exactly like reads of a missing one (`None`);
//! edits and deletes of either fail with `BookmarkError::Forbidden`. The
//! ownership check is part of the storage statement itself, so there is no
//! window between checking and writing.

use chrono::Utc;
use shelf_types::bookmark::{Bookmark, BookmarkId, CreateBookmarkRequest, EditBookmarkRequest};
use shelf_types::error::{BookmarkError, RepositoryError};
use shelf_types::user::UserId;

use crate::repository::bookmark::BookmarkRepository;

fn storage(e: RepositoryError) -> BookmarkError {
    BookmarkError::StorageError(e.to_string())
}

/// Service orchestrating per-user bookmark CRUD.
pub struct BookmarkService<B: BookmarkRepository> {
    bookmarks: B,
}

impl<B: BookmarkRepository> BookmarkService<B> {
    pub fn new(bookmarks: B) -> Self {
        Self { bookmarks }
    }

    /// All bookmarks owned by `user_id`. Empty when there are none.
    pub async fn list(&self, user_id: &UserId) -> Result<Vec<Bookmark>, BookmarkError> {
        self.bookmarks.list_by_owner(user_id).await.map_err(storage)
    }

    /// The bookmark if it exists and belongs to `user_id`.
    pub async fn get_by_id(
        &self,
        user_id: &UserId,
        id: &BookmarkId,
    ) -> Result<Option<Bookmark>, BookmarkError> {
        self.bookmarks.get_owned(user_id, id).await.map_err(storage)
    }

    /// Persist a new bookmark owned by `user_id`.
    pub async fn create(
        &self,
        user_id: &UserId,
        request: CreateBookmarkRequest,
    ) -> Result<Bookmark, BookmarkError> {
        let now = Utc::now();
        let bookmark = Bookmark {
            id: BookmarkId::new(),
            user_id: user_id.clone(),
            title: request.title,
            description: request.description,
            link: request.link,
            created_at: now,
            updated_at: now,
        };

        let bookmark = self.bookmarks.create(&bookmark).await.map_err(storage)?;
        tracing::debug!(user_id = %user_id, bookmark_id = %bookmark.id, "bookmark created");
        Ok(bookmark)
    }

    /// Apply a partial update to a bookmark owned by `user_id`.
    pub async fn edit_by_id(
        &self,
        user_id: &UserId,
        id: &BookmarkId,
        edit: &EditBookmarkRequest,
    ) -> Result<Bookmark, BookmarkError> {
        let updated = self
            .bookmarks
            .update_owned(user_id, id, edit, Utc::now())
            .await
            .map_err(storage)?;

        match updated {
            Some(bookmark) => {
                tracing::debug!(user_id = %user_id, bookmark_id = %id, "bookmark edited");
                Ok(bookmark)
            }
            None => Err(BookmarkError::Forbidden),
        }
    }

    /// Physically remove a bookmark owned by `user_id`.
    pub async fn delete_by_id(
        &self,
        user_id: &UserId,
        id: &BookmarkId,
    ) -> Result<(), BookmarkError> {
        if !self.bookmarks.delete_owned(user_id, id).await.map_err(storage)? {
            return Err(BookmarkError::Forbidden);
        }
        tracing::debug!(user_id = %user_id, bookmark_id = %id, "bookmark deleted");
        Ok(())
    }
}
