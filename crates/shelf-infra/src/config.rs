//! Server configuration loader for Shelf.
//!
//! Reads `config.toml` from the data directory (`~/.shelf/` in production)
//! into [`ServerConfig`], then applies environment overrides. Falls back to
//! defaults when the file is missing or malformed. The token signing secret
//! is read from `JWT_SECRET` only.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use shelf_types::config::ServerConfig;

/// Environment variable holding the token signing secret.
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{0} is set but empty")]
    Empty(&'static str),
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `SHELF_DATA_DIR` environment variable
/// 2. `~/.shelf`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SHELF_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".shelf");
    }

    PathBuf::from(".shelf")
}

/// Load server configuration from `{data_dir}/config.toml` and the process
/// environment.
pub async fn load_server_config(data_dir: &Path) -> ServerConfig {
    let config = read_config_file(data_dir).await;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

async fn read_config_file(data_dir: &Path) -> ServerConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServerConfig::default()
        }
    }
}

/// Apply `SHELF_HOST`, `SHELF_PORT` and `DATABASE_URL` on top of `config`.
///
/// An unparsable `SHELF_PORT` is ignored with a warning.
pub fn apply_env_overrides(
    mut config: ServerConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ServerConfig {
    if let Some(host) = lookup("SHELF_HOST") {
        config.host = host;
    }

    if let Some(port) = lookup("SHELF_PORT") {
        match port.parse::<u16>() {
            Ok(port) => config.port = port,
            Err(err) => tracing::warn!("Ignoring SHELF_PORT={port}: {err}"),
        }
    }

    if let Some(url) = lookup("DATABASE_URL") {
        config.database_url = Some(url);
    }

    config
}

/// Read the signing secret from the process environment.
pub fn load_jwt_secret() -> Result<SecretString, ConfigError> {
    jwt_secret_from(|key| std::env::var(key).ok())
}

/// Read the signing secret through `lookup`. Missing and empty are both errors.
pub fn jwt_secret_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, ConfigError> {
    match lookup(JWT_SECRET_VAR) {
        None => Err(ConfigError::Missing(JWT_SECRET_VAR)),
        Some(secret) if secret.trim().is_empty() => Err(ConfigError::Empty(JWT_SECRET_VAR)),
        Some(secret) => Ok(SecretString::from(secret)),
    }
}
