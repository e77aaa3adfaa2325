use crate::domain::entities::{NewUser, ProfileUpdate, User};
use crate::domain::value_objects::UserRole;
use crate::infrastructure::database::schema::users;
use crate::shared::errors::AppError;
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = users, primary_key(user_id))]
pub struct UserModel {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub role: String,
    pub secret: String,
}

impl TryFrom<UserModel> for User {
    type Error = AppError;

    // The secret stays behind in the model; it never crosses into the
    // domain entity.
    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse::<UserRole>()
            .map_err(AppError::InternalError)?;
        Ok(User {
            user_id: model.user_id,
            name: model.name,
            email: model.email,
            age: model.age,
            role,
        })
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub role: String,
    pub secret: String,
}

impl From<&NewUser> for NewUserRow {
    fn from(user: &NewUser) -> Self {
        NewUserRow {
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age,
            role: user.role.to_string(),
            secret: user.secret.clone(),
        }
    }
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = users)]
pub struct ProfileChangeset {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<&ProfileUpdate> for ProfileChangeset {
    fn from(update: &ProfileUpdate) -> Self {
        ProfileChangeset {
            name: update.name.clone(),
            email: update.email.clone(),
            age: update.age,
        }
    }
}
