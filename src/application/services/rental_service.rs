use crate::domain::{
    entities::{NewRental, Rental},
    repositories::{CatalogRepository, LedgerRepository, UserRepository},
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Creates and closes rentals. The no-duplicate-active-rental rule is
/// enforced by the ledger store; this service validates input and
/// resolves the referenced user and movie up front so foreign-key
/// failures surface as `NotFound` instead of raw persistence errors.
pub struct RentalService {
    ledger_repo: Arc<dyn LedgerRepository>,
    catalog_repo: Arc<dyn CatalogRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl RentalService {
    pub fn new(
        ledger_repo: Arc<dyn LedgerRepository>,
        catalog_repo: Arc<dyn CatalogRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            ledger_repo,
            catalog_repo,
            user_repo,
        }
    }

    /// Parse a wire-format rental date (RFC 3339) into an instant.
    pub fn parse_rental_date(raw: &str) -> AppResult<DateTime<Utc>> {
        let parsed = DateTime::parse_from_rfc3339(raw)?;
        Ok(parsed.with_timezone(&Utc))
    }

    pub async fn create_rental(
        &self,
        user_id: i32,
        movie_id: i32,
        rental_date: DateTime<Utc>,
    ) -> AppResult<Rental> {
        Validator::validate_user_id(user_id)?;
        Validator::validate_movie_id(movie_id)?;

        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }
        if self.catalog_repo.find_movie(movie_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Movie {} not found", movie_id)));
        }

        let rental = NewRental {
            user_id,
            movie_id,
            rental_date,
        };

        // Duplicate active rentals come back as Conflict from the store
        // constraint; two concurrent calls cannot both pass here.
        let created = self.ledger_repo.insert_rental(&rental).await?;

        log::info!(
            "Rental {} created for user {} movie {}",
            created.rental_id,
            user_id,
            movie_id
        );
        Ok(created)
    }

    /// Move a rental to Closed. Atomic against concurrent
    /// `create_rental` calls for the same pair.
    pub async fn close_rental(
        &self,
        rental_id: i32,
        end_date: DateTime<Utc>,
    ) -> AppResult<Rental> {
        if rental_id <= 0 {
            return Err(AppError::ValidationError(
                "rental_id must be positive".to_string(),
            ));
        }

        let closed = self.ledger_repo.close_rental(rental_id, end_date).await?;
        log::info!("Rental {} closed", rental_id);
        Ok(closed)
    }

    pub async fn get_rental(&self, rental_id: i32) -> AppResult<Option<Rental>> {
        self.ledger_repo.find_rental(rental_id).await
    }

    /// The rental currently held by the user for this movie, if any.
    /// `None` means a new rental for the pair would be accepted.
    pub async fn active_rental(&self, user_id: i32, movie_id: i32) -> AppResult<Option<Rental>> {
        Validator::validate_user_id(user_id)?;
        Validator::validate_movie_id(movie_id)?;
        self.ledger_repo.find_active_rental(user_id, movie_id).await
    }
}
