use thiserror::Error;

/// Errors from signup, signin and token handling.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("credentials taken")]
    CredentialsTaken,

    /// Same message for an unknown email and a wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("password hashing failed")]
    Hashing,

    #[error("token error: {0}")]
    Token(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors related to the current user's profile.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user not found")]
    NotFound,

    #[error("email '{0}' is already registered")]
    EmailTaken(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors related to bookmark operations.
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("bookmark not found")]
    NotFound,

    #[error("access to resource denied")]
    Forbidden,

    #[error("storage error: {0}")]
    StorageError(String),
}

/// A request payload failed validation before reaching a service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors from repository operations (used by trait definitions in shelf-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    /// A unique constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        let err = AuthError::InvalidCredentials;
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn test_forbidden_display() {
        assert_eq!(
            BookmarkError::Forbidden.to_string(),
            "access to resource denied"
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("email", "must be a valid email address");
        assert_eq!(err.to_string(), "email: must be a valid email address");
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
