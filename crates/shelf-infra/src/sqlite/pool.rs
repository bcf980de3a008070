//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time. This module provides a `DatabasePool`
//! with a multi-connection reader pool for concurrent reads and a single-connection
//! writer pool for serialized writes. Both use WAL journal mode and enforce foreign keys.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Split read/write pool for SQLite with WAL mode.
///
/// - `reader`: Multi-connection pool (up to 8) for concurrent SELECT queries.
/// - `writer`: Single-connection pool for serialized INSERT/UPDATE/DELETE.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Create a new DatabasePool with split reader/writer connections.
    ///
    /// Runs migrations automatically on the writer pool.
    /// Both pools use WAL journal mode, foreign key enforcement, and 5-second busy timeout.
    ///
    /// In-memory URLs are rejected: each pool would open its own private
    /// database, so readers would never see the writer's tables.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        if is_in_memory(database_url) {
            return Err(sqlx::Error::Configuration(
                format!("in-memory SQLite is not supported: {database_url}").into(),
            ));
        }

        let base_opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(std::time::Duration::from_secs(5))
            .create_if_missing(true);

        let read_opts = base_opts.clone().read_only(true);
        let write_opts = base_opts;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(write_opts)
            .await?;

        // Run migrations on writer before opening reader pool
        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(read_opts)
            .await?;

        tracing::debug!(url = %database_url, "database pool ready");
        Ok(Self { reader, writer })
    }

    /// Delete every row from every table, children first.
    ///
    /// Test-harness reset only; nothing on a request path calls this.
    pub async fn clean_db(&self) -> Result<(), sqlx::Error> {
        let mut tx = self.writer.begin().await?;
        sqlx::query("DELETE FROM bookmarks").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM users").execute(&mut *tx).await?;
        tx.commit().await
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Default database URL inside the data directory: `{data_dir}/shelf.db`.
pub fn default_database_url(data_dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", data_dir.join("shelf.db").display())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_pool(name: &str) -> (tempfile::TempDir, DatabasePool) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join(name).display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (dir, pool)
    }

    #[tokio::test]
    async fn test_pool_creates_tables() {
        let (_dir, pool) = temp_pool("test.db").await;

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(&pool.reader)
        .await
        .unwrap();

        let table_names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(table_names, vec!["bookmarks", "users"]);
    }

    #[tokio::test]
    async fn test_pool_wal_mode() {
        let (_dir, pool) = temp_pool("test_wal.db").await;

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool.writer)
            .await
            .unwrap();

        assert_eq!(result.0.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn test_pool_foreign_keys_enforced() {
        let (_dir, pool) = temp_pool("test_fk.db").await;

        let orphan = sqlx::query(
            "INSERT INTO bookmarks (id, user_id, title, link, created_at, updated_at)
             VALUES ('b1', 'nobody', 't', 'l', '', '')",
        )
        .execute(&pool.writer)
        .await;

        assert!(orphan.is_err(), "bookmark without owner must be rejected");
    }

    #[tokio::test]
    async fn test_clean_db_empties_tables() {
        let (_dir, pool) = temp_pool("test_clean.db").await;

        sqlx::query(
            "INSERT INTO users (id, email, password_hash, created_at, updated_at)
             VALUES ('u1', 'a@b.io', 'x', '', '')",
        )
        .execute(&pool.writer)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO bookmarks (id, user_id, title, link, created_at, updated_at)
             VALUES ('b1', 'u1', 't', 'l', '', '')",
        )
        .execute(&pool.writer)
        .await
        .unwrap();

        pool.clean_db().await.unwrap();

        let (users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        let (bookmarks,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookmarks")
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        assert_eq!((users, bookmarks), (0, 0));
    }

    #[tokio::test]
    async fn test_in_memory_url_rejected() {
        for url in ["sqlite::memory:", "sqlite://shelf.db?mode=memory"] {
            let err = DatabasePool::new(url).await.err().unwrap();
            assert!(matches!(err, sqlx::Error::Configuration(_)), "{url}");
        }
    }

    #[test]
    fn test_default_database_url() {
        let url = default_database_url(Path::new("/tmp/shelf"));
        assert_eq!(url, "sqlite:///tmp/shelf/shelf.db?mode=rwc");
    }
}
