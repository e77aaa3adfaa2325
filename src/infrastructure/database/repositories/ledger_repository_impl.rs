use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;

use crate::domain::{
    entities::{NewRating, NewRental, Rating, Rental, RentalHistoryRow},
    repositories::LedgerRepository,
};
use crate::infrastructure::database::{
    connection::Database,
    models::{NewRatingRow, NewRentalRow, RatingModel, RentalModel},
    schema::{movies, ratings, rentals},
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;

pub struct LedgerRepositoryImpl {
    db: Arc<Database>,
}

impl LedgerRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Translate store-level constraint violations into the business
    /// errors they encode. Anything else stays a persistence error.
    fn map_write_error(err: DieselError, conflict_msg: &str) -> AppError {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                AppError::Conflict(conflict_msg.to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                AppError::NotFound("Referenced user or movie does not exist".to_string())
            }
            other => AppError::from(other),
        }
    }
}

#[async_trait]
impl LedgerRepository for LedgerRepositoryImpl {
    async fn insert_rental(&self, rental: &NewRental) -> AppResult<Rental> {
        let db = Arc::clone(&self.db);
        let row = NewRentalRow::from(rental);
        let start = std::time::Instant::now();

        let model = task::spawn_blocking(move || -> AppResult<RentalModel> {
            let mut conn = db.get_connection()?;
            // The partial unique index over (user_id, movie_id) where
            // end_date is null does the R1 check and the insert as one
            // atomic step; no pre-check racing here.
            let m = diesel::insert_into(rentals::table)
                .values(&row)
                .get_result::<RentalModel>(&mut conn)
                .map_err(|e| {
                    Self::map_write_error(
                        e,
                        "An active rental already exists for this user and movie",
                    )
                })?;
            Ok(m)
        })
        .await??;

        LogContext::db_operation("insert", "rentals", Some(start.elapsed().as_millis() as u64));
        Ok(model.into())
    }

    async fn close_rental(&self, rental_id: i32, end_date: DateTime<Utc>) -> AppResult<Rental> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<RentalModel> {
            let mut conn = db.get_connection()?;

            // Single guarded UPDATE: only an active rental transitions.
            // Atomic against a concurrent insert for the same pair.
            let updated = diesel::update(
                rentals::table
                    .filter(rentals::rental_id.eq(rental_id))
                    .filter(rentals::end_date.is_null()),
            )
            .set(rentals::end_date.eq(Some(end_date)))
            .get_result::<RentalModel>(&mut conn)
            .optional()?;

            match updated {
                Some(m) => Ok(m),
                None => {
                    // Distinguish "no such rental" from "already closed".
                    let exists = rentals::table
                        .filter(rentals::rental_id.eq(rental_id))
                        .first::<RentalModel>(&mut conn)
                        .optional()?;
                    match exists {
                        Some(_) => Err(AppError::Conflict(format!(
                            "Rental {} is already closed",
                            rental_id
                        ))),
                        None => Err(AppError::NotFound(format!(
                            "Rental {} not found",
                            rental_id
                        ))),
                    }
                }
            }
        })
        .await??;

        Ok(model.into())
    }

    async fn find_rental(&self, rental_id: i32) -> AppResult<Option<Rental>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<RentalModel>> {
            let mut conn = db.get_connection()?;
            let m = rentals::table
                .filter(rentals::rental_id.eq(rental_id))
                .first::<RentalModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Rental::from))
    }

    async fn find_active_rental(&self, user_id: i32, movie_id: i32) -> AppResult<Option<Rental>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<RentalModel>> {
            let mut conn = db.get_connection()?;
            let m = rentals::table
                .filter(rentals::user_id.eq(user_id))
                .filter(rentals::movie_id.eq(movie_id))
                .filter(rentals::end_date.is_null())
                .first::<RentalModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Rental::from))
    }

    async fn rental_exists(&self, user_id: i32, movie_id: i32) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        let count = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let n = rentals::table
                .filter(rentals::user_id.eq(user_id))
                .filter(rentals::movie_id.eq(movie_id))
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(count > 0)
    }

    async fn insert_rating(&self, rating: &NewRating) -> AppResult<Rating> {
        let db = Arc::clone(&self.db);
        let row = NewRatingRow::from(rating);
        let start = std::time::Instant::now();

        let model = task::spawn_blocking(move || -> AppResult<RatingModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(ratings::table)
                .values(&row)
                .get_result::<RatingModel>(&mut conn)
                .map_err(|e| {
                    Self::map_write_error(e, "This user has already rated this movie")
                })?;
            Ok(m)
        })
        .await??;

        LogContext::db_operation("insert", "ratings", Some(start.elapsed().as_millis() as u64));
        Ok(model.into())
    }

    async fn find_rating(&self, user_id: i32, movie_id: i32) -> AppResult<Option<Rating>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<RatingModel>> {
            let mut conn = db.get_connection()?;
            let m = ratings::table
                .filter(ratings::user_id.eq(user_id))
                .filter(ratings::movie_id.eq(movie_id))
                .first::<RatingModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Rating::from))
    }

    async fn list_ratings(&self) -> AppResult<Vec<Rating>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<RatingModel>> {
            let mut conn = db.get_connection()?;
            let rows = ratings::table
                .order(ratings::rating_id.asc())
                .load::<RatingModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Rating::from).collect())
    }

    async fn list_rentals_for_user(&self, user_id: i32) -> AppResult<Vec<RentalHistoryRow>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<RentalHistoryRow>> {
            let mut conn = db.get_connection()?;

            let rentals_with_movies = rentals::table
                .inner_join(movies::table)
                .filter(rentals::user_id.eq(user_id))
                .order((rentals::rental_date.desc(), rentals::rental_id.desc()))
                .select((rentals::all_columns, movies::title, movies::runtime))
                .load::<(RentalModel, String, Option<i32>)>(&mut conn)?;

            // Attach the user's ratings by movie. One rating per pair
            // is guaranteed by the store, so this never fans out.
            let user_ratings = ratings::table
                .filter(ratings::user_id.eq(user_id))
                .load::<RatingModel>(&mut conn)?;
            let by_movie: HashMap<i32, RatingModel> = user_ratings
                .into_iter()
                .map(|r| (r.movie_id, r))
                .collect();

            let out = rentals_with_movies
                .into_iter()
                .map(|(rental, title, runtime)| {
                    let rating = by_movie.get(&rental.movie_id);
                    RentalHistoryRow {
                        rental_id: rental.rental_id,
                        rental_date: rental.rental_date,
                        end_date: rental.end_date,
                        user_id: rental.user_id,
                        movie_id: rental.movie_id,
                        movie_title: title,
                        movie_duration: runtime,
                        movie_rating: rating.map(|r| r.rating_value),
                        movie_review: rating.map(|r| r.review.clone()),
                    }
                })
                .collect();
            Ok(out)
        })
        .await??;

        Ok(rows)
    }
}
