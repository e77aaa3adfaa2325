use serde::{Deserialize, Serialize};

/// A user's single rating and review of a movie they have rented.
/// At most one rating may exist per (user, movie) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rating {
    pub rating_id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub rating_value: i32,
    pub review: String,
}

/// Fields for a rating about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRating {
    pub user_id: i32,
    pub movie_id: i32,
    pub rating_value: i32,
    pub review: String,
}
