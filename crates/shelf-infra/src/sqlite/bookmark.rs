//! SQLite bookmark repository implementation.
//!
//! Edits and deletes are single statements filtered on both `id` and
//! `user_id`; the affected row (or its absence) is the ownership check.

use chrono::{DateTime, Utc};
use shelf_core::repository::bookmark::BookmarkRepository;
use shelf_types::bookmark::{Bookmark, BookmarkId, EditBookmarkRequest};
use shelf_types::error::RepositoryError;
use shelf_types::user::UserId;
use sqlx::Row;

use super::pool::DatabasePool;
use super::user::{format_datetime, parse_datetime};

/// SQLite-backed implementation of `BookmarkRepository`.
#[derive(Clone)]
pub struct SqliteBookmarkRepository {
    pool: DatabasePool,
}

impl SqliteBookmarkRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct BookmarkRow {
    id: String,
    user_id: String,
    title: String,
    description: Option<String>,
    link: String,
    created_at: String,
    updated_at: String,
}

impl BookmarkRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            link: row.try_get("link")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_bookmark(self) -> Result<Bookmark, RepositoryError> {
        let id = self
            .id
            .parse::<BookmarkId>()
            .map_err(|e| RepositoryError::Query(format!("invalid bookmark id: {e}")))?;
        let user_id = self
            .user_id
            .parse::<UserId>()
            .map_err(|e| RepositoryError::Query(format!("invalid user id: {e}")))?;

        Ok(Bookmark {
            id,
            user_id,
            title: self.title,
            description: self.description,
            link: self.link,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

fn decode(row: &sqlx::sqlite::SqliteRow) -> Result<Bookmark, RepositoryError> {
    BookmarkRow::from_row(row)
        .map_err(|e| RepositoryError::Query(e.to_string()))?
        .into_bookmark()
}

impl BookmarkRepository for SqliteBookmarkRepository {
    async fn create(&self, bookmark: &Bookmark) -> Result<Bookmark, RepositoryError> {
        let row = sqlx::query(
            "INSERT INTO bookmarks (id, user_id, title, description, link, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(bookmark.id.to_string())
        .bind(bookmark.user_id.to_string())
        .bind(&bookmark.title)
        .bind(&bookmark.description)
        .bind(&bookmark.link)
        .bind(format_datetime(&bookmark.created_at))
        .bind(format_datetime(&bookmark.updated_at))
        .fetch_one(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        decode(&row)
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Bookmark>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM bookmarks WHERE user_id = ? ORDER BY created_at, id")
            .bind(owner.to_string())
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter().map(decode).collect()
    }

    async fn get_owned(
        &self,
        owner: &UserId,
        id: &BookmarkId,
    ) -> Result<Option<Bookmark>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM bookmarks WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(owner.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        row.as_ref().map(decode).transpose()
    }

    async fn update_owned(
        &self,
        owner: &UserId,
        id: &BookmarkId,
        edit: &EditBookmarkRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Bookmark>, RepositoryError> {
        let row = sqlx::query(
            "UPDATE bookmarks
             SET title = COALESCE(?, title),
                 description = COALESCE(?, description),
                 link = COALESCE(?, link),
                 updated_at = ?
             WHERE id = ? AND user_id = ?
             RETURNING *",
        )
        .bind(&edit.title)
        .bind(&edit.description)
        .bind(&edit.link)
        .bind(format_datetime(&updated_at))
        .bind(id.to_string())
        .bind(owner.to_string())
        .fetch_optional(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        row.as_ref().map(decode).transpose()
    }

    async fn delete_owned(&self, owner: &UserId, id: &BookmarkId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(owner.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;
    use crate::sqlite::user::SqliteUserRepository;
    use shelf_core::repository::user::UserRepository;
    use shelf_types::user::User;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    async fn make_owner(pool: &DatabasePool, email: &str) -> UserId {
        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: email.to_string(),
            password_hash: "digest".to_string(),
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        };
        SqliteUserRepository::new(pool.clone())
            .create(&user)
            .await
            .unwrap();
        user.id
    }

    fn make_bookmark(owner: &UserId, title: &str) -> Bookmark {
        let now = Utc::now();
        Bookmark {
            id: BookmarkId::new(),
            user_id: owner.clone(),
            title: title.to_string(),
            description: None,
            link: "https://www.youtube.com/watch?v=GHTA143_b-s".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_owned() {
        let pool = test_pool().await;
        let owner = make_owner(&pool, "hanny@gmail.com").await;
        let repo = SqliteBookmarkRepository::new(pool);
        let bookmark = make_bookmark(&owner, "first bookmark");

        let created = repo.create(&bookmark).await.unwrap();
        let found = repo.get_owned(&owner, &bookmark.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.title, "first bookmark");
        assert_eq!(found.user_id, owner);
    }

    #[tokio::test]
    async fn test_get_owned_hides_other_users_rows() {
        let pool = test_pool().await;
        let owner = make_owner(&pool, "hanny@gmail.com").await;
        let intruder = make_owner(&pool, "eve@gmail.com").await;
        let repo = SqliteBookmarkRepository::new(pool);
        let bookmark = make_bookmark(&owner, "first bookmark");
        repo.create(&bookmark).await.unwrap();

        assert!(repo.get_owned(&intruder, &bookmark.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_owner_in_creation_order() {
        let pool = test_pool().await;
        let owner = make_owner(&pool, "hanny@gmail.com").await;
        let other = make_owner(&pool, "eve@gmail.com").await;
        let repo = SqliteBookmarkRepository::new(pool);

        assert!(repo.list_by_owner(&owner).await.unwrap().is_empty());

        let first = make_bookmark(&owner, "one");
        let second = make_bookmark(&owner, "two");
        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();
        repo.create(&make_bookmark(&other, "theirs")).await.unwrap();

        let listed = repo.list_by_owner(&owner).await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_update_owned_is_partial() {
        let pool = test_pool().await;
        let owner = make_owner(&pool, "hanny@gmail.com").await;
        let repo = SqliteBookmarkRepository::new(pool);
        let bookmark = make_bookmark(&owner, "first bookmark");
        repo.create(&bookmark).await.unwrap();

        let edit = EditBookmarkRequest {
            title: Some("test title".to_string()),
            description: Some("edit bookmark".to_string()),
            link: None,
        };
        let updated = repo
            .update_owned(&owner, &bookmark.id, &edit, Utc::now())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "test title");
        assert_eq!(updated.description.as_deref(), Some("edit bookmark"));
        assert_eq!(updated.link, bookmark.link);
    }

    #[tokio::test]
    async fn test_update_owned_by_intruder_matches_nothing() {
        let pool = test_pool().await;
        let owner = make_owner(&pool, "hanny@gmail.com").await;
        let intruder = make_owner(&pool, "eve@gmail.com").await;
        let repo = SqliteBookmarkRepository::new(pool);
        let bookmark = make_bookmark(&owner, "first bookmark");
        repo.create(&bookmark).await.unwrap();

        let edit = EditBookmarkRequest {
            title: Some("hijacked".to_string()),
            ..Default::default()
        };
        let result = repo
            .update_owned(&intruder, &bookmark.id, &edit, Utc::now())
            .await
            .unwrap();
        assert!(result.is_none());

        let found = repo.get_owned(&owner, &bookmark.id).await.unwrap().unwrap();
        assert_eq!(found.title, "first bookmark");
    }

    #[tokio::test]
    async fn test_delete_owned() {
        let pool = test_pool().await;
        let owner = make_owner(&pool, "hanny@gmail.com").await;
        let intruder = make_owner(&pool, "eve@gmail.com").await;
        let repo = SqliteBookmarkRepository::new(pool);
        let bookmark = make_bookmark(&owner, "first bookmark");
        repo.create(&bookmark).await.unwrap();

        assert!(!repo.delete_owned(&intruder, &bookmark.id).await.unwrap());
        assert!(repo.get_owned(&owner, &bookmark.id).await.unwrap().is_some());

        assert!(repo.delete_owned(&owner, &bookmark.id).await.unwrap());
        assert!(repo.get_owned(&owner, &bookmark.id).await.unwrap().is_none());
        assert!(!repo.delete_owned(&owner, &bookmark.id).await.unwrap());
    }
}
