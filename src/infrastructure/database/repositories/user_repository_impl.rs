use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;

use crate::domain::{
    entities::{NewUser, ProfileUpdate, User},
    repositories::UserRepository,
};
use crate::infrastructure::database::{
    connection::Database,
    models::{NewUserRow, ProfileChangeset, UserModel},
    schema::users,
};
use crate::shared::errors::{AppError, AppResult};

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn insert_user(&self, user: &NewUser) -> AppResult<User> {
        let db = Arc::clone(&self.db);
        let row = NewUserRow::from(user);

        let model = task::spawn_blocking(move || -> AppResult<UserModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(users::table)
                .values(&row)
                .get_result::<UserModel>(&mut conn)
                .map_err(|e| match e {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AppError::Conflict("Email already exists".to_string())
                    }
                    other => AppError::from(other),
                })?;
            Ok(m)
        })
        .await??;

        model.try_into()
    }

    async fn find_by_id(&self, user_id: i32) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            let m = users::table
                .filter(users::user_id.eq(user_id))
                .first::<UserModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        model.map(User::try_from).transpose()
    }

    async fn find_by_credentials(&self, email: &str, secret: &str) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let email = email.to_string();
        let secret = secret.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            let m = users::table
                .filter(users::email.eq(email))
                .filter(users::secret.eq(secret))
                .first::<UserModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        model.map(User::try_from).transpose()
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let email = email.to_string();

        let count = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let n = users::table
                .filter(users::email.eq(email))
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(count > 0)
    }

    async fn update_profile(&self, user_id: i32, update: &ProfileUpdate) -> AppResult<User> {
        let db = Arc::clone(&self.db);
        let changes = ProfileChangeset::from(update);

        let model = task::spawn_blocking(move || -> AppResult<UserModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(users::table.filter(users::user_id.eq(user_id)))
                .set(&changes)
                .get_result::<UserModel>(&mut conn)
                .optional()
                .map_err(|e| match e {
                    // Changing to an address another account holds
                    // trips the same unique index as signup.
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AppError::Conflict("Email already exists".to_string())
                    }
                    other => AppError::from(other),
                })?
                .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;
            Ok(m)
        })
        .await??;

        model.try_into()
    }

    async fn delete(&self, user_id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            // Rentals and ratings go with the user via ON DELETE CASCADE.
            let deleted =
                diesel::delete(users::table.filter(users::user_id.eq(user_id)))
                    .execute(&mut conn)?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!("User {} not found", user_id)));
            }
            Ok(())
        })
        .await??;

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<UserModel>> {
            let mut conn = db.get_connection()?;
            let rows = users::table
                .order(users::user_id.asc())
                .load::<UserModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        models.into_iter().map(User::try_from).collect()
    }
}
