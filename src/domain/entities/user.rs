use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub role: UserRole,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Fields for a signup about to be inserted; the store assigns the id.
/// The secret is kept out of `User` so it never rides along on reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub role: UserRole,
    pub secret: String,
}

/// Profile fields a user may change about themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub age: i32,
}
