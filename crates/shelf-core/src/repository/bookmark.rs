//! Bookmark repository trait definition.
//!
//! Every read and write past `create` is keyed by both the bookmark id and
//! the owning user id, so the ownership check and the data access happen in
//! one statement.

use chrono::{DateTime, Utc};
use shelf_types::bookmark::{Bookmark, BookmarkId, EditBookmarkRequest};
use shelf_types::error::RepositoryError;
use shelf_types::user::UserId;

/// Repository trait for bookmark persistence.
pub trait BookmarkRepository: Send + Sync {
    /// Insert a new bookmark. Returns the stored record.
    fn create(
        &self,
        bookmark: &Bookmark,
    ) -> impl std::future::Future<Output = Result<Bookmark, RepositoryError>> + Send;

    /// All bookmarks owned by `owner`, in store order.
    fn list_by_owner(
        &self,
        owner: &UserId,
    ) -> impl std::future::Future<Output = Result<Vec<Bookmark>, RepositoryError>> + Send;

    /// The bookmark with `id`, only if it is owned by `owner`.
    fn get_owned(
        &self,
        owner: &UserId,
        id: &BookmarkId,
    ) -> impl std::future::Future<Output = Result<Option<Bookmark>, RepositoryError>> + Send;

    /// Apply `edit` to the bookmark with `id` if and only if it is owned by
    /// `owner`, stamping `updated_at`.
    ///
    /// Returns `None` when no row matched (missing or not owned).
    fn update_owned(
        &self,
        owner: &UserId,
        id: &BookmarkId,
        edit: &EditBookmarkRequest,
        updated_at: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<Option<Bookmark>, RepositoryError>> + Send;

    /// Permanently delete the bookmark with `id` if it is owned by `owner`.
    ///
    /// Returns `false` when no row matched.
    fn delete_owned(
        &self,
        owner: &UserId,
        id: &BookmarkId,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;
}
