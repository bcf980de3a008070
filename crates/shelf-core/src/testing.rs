//! In-memory fakes for service tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use shelf_types::auth::{AccessToken, TokenClaims};
use shelf_types::bookmark::{Bookmark, BookmarkId, EditBookmarkRequest};
use shelf_types::error::{AuthError, RepositoryError};
use shelf_types::user::{User, UserId};

use crate::repository::bookmark::BookmarkRepository;
use crate::repository::user::UserRepository;
use crate::service::password::PasswordHasher;
use crate::service::token::TokenIssuer;

/// User store backed by a shared vec. Clones see the same rows.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
    /// When set, every call fails as if the database were unreachable.
    pub offline: bool,
}

impl InMemoryUserRepository {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn check_online(&self) -> Result<(), RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Connection);
        }
        Ok(())
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        self.check_online()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict(format!(
                "email '{}' already exists",
                user.email
            )));
        }
        users.push(user.clone());
        Ok(user.clone())
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        self.check_online()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        self.check_online()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        self.check_online()?;
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(RepositoryError::Conflict(format!(
                "email '{}' already exists",
                user.email
            )));
        }
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = user.clone();
        Ok(user.clone())
    }
}

/// Bookmark store backed by a shared vec.
#[derive(Clone, Default)]
pub struct InMemoryBookmarkRepository {
    bookmarks: Arc<Mutex<Vec<Bookmark>>>,
}

impl InMemoryBookmarkRepository {
    /// Direct lookup that ignores ownership, for asserting on raw state.
    pub fn raw_get(&self, id: &BookmarkId) -> Option<Bookmark> {
        let bookmarks = self.bookmarks.lock().unwrap();
        bookmarks.iter().find(|b| &b.id == id).cloned()
    }
}

impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn create(&self, bookmark: &Bookmark) -> Result<Bookmark, RepositoryError> {
        self.bookmarks.lock().unwrap().push(bookmark.clone());
        Ok(bookmark.clone())
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Bookmark>, RepositoryError> {
        let bookmarks = self.bookmarks.lock().unwrap();
        Ok(bookmarks
            .iter()
            .filter(|b| &b.user_id == owner)
            .cloned()
            .collect())
    }

    async fn get_owned(
        &self,
        owner: &UserId,
        id: &BookmarkId,
    ) -> Result<Option<Bookmark>, RepositoryError> {
        let bookmarks = self.bookmarks.lock().unwrap();
        Ok(bookmarks
            .iter()
            .find(|b| &b.id == id && &b.user_id == owner)
            .cloned())
    }

    async fn update_owned(
        &self,
        owner: &UserId,
        id: &BookmarkId,
        edit: &EditBookmarkRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Bookmark>, RepositoryError> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let Some(bookmark) = bookmarks
            .iter_mut()
            .find(|b| &b.id == id && &b.user_id == owner)
        else {
            return Ok(None);
        };
        edit.apply_to(bookmark);
        bookmark.updated_at = updated_at;
        Ok(Some(bookmark.clone()))
    }

    async fn delete_owned(&self, owner: &UserId, id: &BookmarkId) -> Result<bool, RepositoryError> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let before = bookmarks.len();
        bookmarks.retain(|b| !(&b.id == id && &b.user_id == owner));
        Ok(bookmarks.len() != before)
    }
}

/// Reversible "hash" so tests can see what was stored.
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        Ok(format!("plain${plaintext}"))
    }

    async fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, AuthError> {
        Ok(digest == format!("plain${plaintext}"))
    }

    fn dummy_digest(&self) -> &str {
        "plain-dummy"
    }
}

/// `PlainHasher` that counts `verify` calls. Clones share the count.
#[derive(Clone, Default)]
pub struct CountingHasher {
    verifies: Arc<AtomicUsize>,
}

impl CountingHasher {
    pub fn verifies(&self) -> usize {
        self.verifies.load(Ordering::SeqCst)
    }
}

impl PasswordHasher for CountingHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        PlainHasher.hash(plaintext).await
    }

    async fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, AuthError> {
        self.verifies.fetch_add(1, Ordering::SeqCst);
        PlainHasher.verify(plaintext, digest).await
    }

    fn dummy_digest(&self) -> &str {
        PlainHasher.dummy_digest()
    }
}

/// Unsigned `sub|email|iat` tokens.
pub struct PlainTokenIssuer;

impl TokenIssuer for PlainTokenIssuer {
    fn issue_at(
        &self,
        user_id: &UserId,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        Ok(AccessToken {
            access_token: format!("{user_id}|{email}|{}", now.timestamp()),
        })
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut parts = token.split('|');
        let (Some(sub), Some(email), Some(iat)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(AuthError::Unauthorized("malformed token".to_string()));
        };
        let iat: i64 = iat
            .parse()
            .map_err(|_| AuthError::Unauthorized("malformed token".to_string()))?;
        Ok(TokenClaims {
            sub: sub.to_string(),
            email: email.to_string(),
            iat,
            exp: iat + 3600,
        })
    }
}
