//! Explicit input validation for request payloads.
//!
//! Runs before any service call so that malformed input never reaches the
//! core. Each check returns the first failing field as a [`ValidationError`].

use crate::auth::AuthRequest;
use crate::bookmark::{CreateBookmarkRequest, EditBookmarkRequest};
use crate::error::ValidationError;
use crate::user::EditUserRequest;

/// A payload that can check its own shape.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Loose structural email check: `local@domain.tld`, no whitespace.
///
/// # Examples
///
/// ```
/// use shelf_types::validation::is_valid_email;
///
/// assert!(is_valid_email("hanny@gmail.com"));
/// assert!(!is_valid_email("hanny@gmail"));
/// assert!(!is_valid_email("hanny gmail.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "should not be empty"));
    }
    Ok(())
}

fn require_email(value: &str) -> Result<(), ValidationError> {
    if !is_valid_email(value) {
        return Err(ValidationError::new("email", "must be an email"));
    }
    Ok(())
}

impl Validate for AuthRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("email", &self.email)?;
        require_email(&self.email)?;
        // Any non-empty password is accepted as typed, whitespace included.
        if self.password.is_empty() {
            return Err(ValidationError::new("password", "should not be empty"));
        }
        Ok(())
    }
}

impl Validate for CreateBookmarkRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("link", &self.link)
    }
}

impl Validate for EditBookmarkRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            require("title", title)?;
        }
        if let Some(link) = &self.link {
            require("link", link)?;
        }
        Ok(())
    }
}

impl Validate for EditUserRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(email) = &self.email {
            require_email(email)?;
        }
        Ok(())
    }
}
