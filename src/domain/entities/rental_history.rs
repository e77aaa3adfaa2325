use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denormalized "my rentals" row: a rental joined with its movie and,
/// when one exists, the user's unique rating for that movie. The join
/// fans out only if the one-rating-per-pair invariant is broken, which
/// the store rules out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentalHistoryRow {
    pub rental_id: i32,
    pub rental_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub user_id: i32,
    pub movie_id: i32,
    pub movie_title: String,
    pub movie_duration: Option<i32>,
    pub movie_rating: Option<i32>,
    pub movie_review: Option<String>,
}

impl RentalHistoryRow {
    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }

    pub fn has_rating(&self) -> bool {
        self.movie_rating.is_some()
    }
}
