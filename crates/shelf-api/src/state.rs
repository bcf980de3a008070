//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the REST API.
//! Services are generic over repository/hasher/token traits, but AppState
//! pins them to the concrete infra implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use secrecy::SecretString;
use shelf_core::service::auth::AuthService;
use shelf_core::service::bookmark::BookmarkService;
use shelf_core::service::user::UserService;
use shelf_infra::config::{load_jwt_secret, load_server_config, resolve_data_dir};
use shelf_infra::crypto::password::Argon2PasswordHasher;
use shelf_infra::crypto::token::JwtTokenIssuer;
use shelf_infra::sqlite::bookmark::SqliteBookmarkRepository;
use shelf_infra::sqlite::pool::{DatabasePool, default_database_url};
use shelf_infra::sqlite::user::SqliteUserRepository;
use shelf_types::config::ServerConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteAuthService =
    AuthService<SqliteUserRepository, Argon2PasswordHasher, JwtTokenIssuer>;

pub type ConcreteUserService = UserService<SqliteUserRepository>;

pub type ConcreteBookmarkService = BookmarkService<SqliteBookmarkRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<ConcreteAuthService>,
    pub user_service: Arc<ConcreteUserService>,
    pub bookmark_service: Arc<ConcreteBookmarkService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Wire every service over an already-open pool.
    pub fn new(db_pool: DatabasePool, jwt_secret: SecretString) -> Self {
        let users = SqliteUserRepository::new(db_pool.clone());
        let bookmarks = SqliteBookmarkRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            users.clone(),
            Argon2PasswordHasher::new(),
            JwtTokenIssuer::new(jwt_secret),
        );

        Self {
            auth_service: Arc::new(auth_service),
            user_service: Arc::new(UserService::new(users)),
            bookmark_service: Arc::new(BookmarkService::new(bookmarks)),
            db_pool,
        }
    }

    /// Initialize from an open pool and the `JWT_SECRET` environment variable.
    pub fn init(db_pool: DatabasePool) -> anyhow::Result<Self> {
        let secret = load_jwt_secret()?;
        Ok(Self::new(db_pool, secret))
    }
}

/// Resolved data directory plus the server configuration loaded from it.
pub struct Environment {
    pub data_dir: PathBuf,
    pub config: ServerConfig,
}

impl Environment {
    /// Resolve the data directory, create it, and load `config.toml` plus
    /// environment overrides.
    pub async fn load() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;
        let config = load_server_config(&data_dir).await;
        Ok(Self { data_dir, config })
    }

    /// Connection string from config, or `{data_dir}/shelf.db`.
    pub fn database_url(&self) -> String {
        database_url_for(&self.config, &self.data_dir)
    }

    /// Open the pool, applying pending migrations.
    pub async fn open_database(&self) -> anyhow::Result<DatabasePool> {
        let url = self.database_url();
        let pool = DatabasePool::new(&url).await?;
        Ok(pool)
    }
}

fn database_url_for(config: &ServerConfig, data_dir: &Path) -> String {
    config
        .database_url
        .clone()
        .unwrap_or_else(|| default_database_url(data_dir))
}
