//! Current-user profile service.

use chrono::Utc;
use shelf_types::error::{RepositoryError, UserError};
use shelf_types::user::{EditUserRequest, UserId, UserProfile};

use crate::repository::user::UserRepository;

/// Reads and edits the profile of the authenticated user.
pub struct UserService<U: UserRepository> {
    users: U,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }

    /// Profile of `user_id`, without the password hash.
    pub async fn me(&self, user_id: &UserId) -> Result<UserProfile, UserError> {
        self.users
            .get_by_id(user_id)
            .await
            .map_err(|e| UserError::StorageError(e.to_string()))?
            .map(UserProfile::from)
            .ok_or(UserError::NotFound)
    }

    /// Apply the supplied profile fields. Email stays unique.
    pub async fn edit(
        &self,
        user_id: &UserId,
        request: EditUserRequest,
    ) -> Result<UserProfile, UserError> {
        let mut user = self
            .users
            .get_by_id(user_id)
            .await
            .map_err(|e| UserError::StorageError(e.to_string()))?
            .ok_or(UserError::NotFound)?;

        if request.is_empty() {
            return Ok(user.into());
        }

        if let Some(email) = request.email {
            user.email = email;
        }
        if let Some(first_name) = request.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = request.last_name {
            user.last_name = Some(last_name);
        }
        user.updated_at = Utc::now();

        let email = user.email.clone();
        let updated = self.users.update(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => UserError::EmailTaken(email),
            RepositoryError::NotFound => UserError::NotFound,
            other => UserError::StorageError(other.to_string()),
        })?;

        tracing::debug!(user_id = %updated.id, "profile updated");
        Ok(updated.into())
    }
}
