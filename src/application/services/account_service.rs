use crate::domain::{
    entities::{NewUser, ProfileUpdate, User},
    repositories::UserRepository,
    value_objects::{Credentials, UserRole},
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use std::sync::Arc;

/// Reserved address; the bootstrap admin account cannot be re-created
/// through signup.
const ADMIN_EMAIL: &str = "admin@example.com";

/// User signup, login and profile maintenance. Authentication checks
/// the stored secret, never the role string.
pub struct AccountService {
    user_repo: Arc<dyn UserRepository>,
}

impl AccountService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        age: i32,
        role: UserRole,
        secret: &str,
    ) -> AppResult<User> {
        Validator::validate_name(name)?;
        Validator::validate_email(email)?;
        Validator::validate_age(age)?;
        if secret.is_empty() {
            return Err(AppError::ValidationError(
                "Secret cannot be empty".to_string(),
            ));
        }
        if email.eq_ignore_ascii_case(ADMIN_EMAIL) {
            return Err(AppError::ValidationError(
                "Cannot create an account with the admin email".to_string(),
            ));
        }

        // Friendly early rejection; the unique index on email remains
        // the authority if a concurrent signup slips past this check.
        if self.user_repo.email_exists(email).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            age,
            role,
            secret: secret.to_string(),
        };
        let created = self.user_repo.insert_user(&user).await?;
        log::info!("User {} signed up", created.user_id);
        Ok(created)
    }

    pub async fn log_in(&self, credentials: &Credentials) -> AppResult<User> {
        if credentials.email.is_empty() || credentials.secret.is_empty() {
            return Err(AppError::ValidationError(
                "Email and secret are required".to_string(),
            ));
        }

        self.user_repo
            .find_by_credentials(&credentials.email, &credentials.secret)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid email or secret".to_string()))
    }

    pub async fn update_profile(
        &self,
        user_id: i32,
        update: &ProfileUpdate,
    ) -> AppResult<User> {
        Validator::validate_user_id(user_id)?;
        Validator::validate_name(&update.name)?;
        Validator::validate_email(&update.email)?;
        Validator::validate_age(update.age)?;

        self.user_repo.update_profile(user_id, update).await
    }

    /// Removes the account together with its rentals and ratings (the
    /// store cascades).
    pub async fn delete_account(&self, user_id: i32) -> AppResult<()> {
        Validator::validate_user_id(user_id)?;
        self.user_repo.delete(user_id).await?;
        log::info!("User {} deleted", user_id);
        Ok(())
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.list().await
    }
}
