use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{NewRating, NewRental, Rating, Rental, RentalHistoryRow};
use crate::shared::errors::AppResult;

/// Port over the durable rental/rating ledger.
///
/// Implementations own the uniqueness invariants: inserting a second
/// active rental for a (user, movie) pair, or a second rating for a
/// pair, must fail with `AppError::Conflict` atomically with the
/// insert attempt. Callers never pre-check and insert in two steps.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Insert a rental in the Active state. Conflicts when the pair
    /// already holds an active rental.
    async fn insert_rental(&self, rental: &NewRental) -> AppResult<Rental>;

    /// Atomically move a rental from Active to Closed. `NotFound` when
    /// the rental does not exist, `Conflict` when it is already closed.
    async fn close_rental(&self, rental_id: i32, end_date: DateTime<Utc>) -> AppResult<Rental>;

    async fn find_rental(&self, rental_id: i32) -> AppResult<Option<Rental>>;

    async fn find_active_rental(&self, user_id: i32, movie_id: i32) -> AppResult<Option<Rental>>;

    /// Whether any rental, active or historical, exists for the pair.
    async fn rental_exists(&self, user_id: i32, movie_id: i32) -> AppResult<bool>;

    /// Insert a rating. Conflicts when the pair is already rated.
    async fn insert_rating(&self, rating: &NewRating) -> AppResult<Rating>;

    async fn find_rating(&self, user_id: i32, movie_id: i32) -> AppResult<Option<Rating>>;

    async fn list_ratings(&self) -> AppResult<Vec<Rating>>;

    /// Denormalized rental history for one user, newest rental first
    /// (rental_date desc, rental_id desc as tie-breaker).
    async fn list_rentals_for_user(&self, user_id: i32) -> AppResult<Vec<RentalHistoryRow>>;
}
