use async_trait::async_trait;

use crate::domain::entities::{NewUser, ProfileUpdate, User};
use crate::shared::errors::AppResult;

/// Port over user accounts. Deleting a user cascades to that user's
/// rentals and ratings at the store level.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user. Conflicts when the email is already registered.
    async fn insert_user(&self, user: &NewUser) -> AppResult<User>;

    async fn find_by_id(&self, user_id: i32) -> AppResult<Option<User>>;

    /// Credential lookup: matches email and secret together so the
    /// caller never sees the stored secret.
    async fn find_by_credentials(&self, email: &str, secret: &str) -> AppResult<Option<User>>;

    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    async fn update_profile(&self, user_id: i32, update: &ProfileUpdate) -> AppResult<User>;

    async fn delete(&self, user_id: i32) -> AppResult<()>;

    async fn list(&self) -> AppResult<Vec<User>>;
}
