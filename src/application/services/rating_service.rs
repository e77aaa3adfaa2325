use crate::domain::{
    entities::{NewRating, Rating},
    repositories::LedgerRepository,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use std::sync::Arc;

/// Records one rating/review per (user, movie) pair.
///
/// Two deliberate departures from the observed legacy behavior, both
/// hardening: the 0-10 range is enforced here instead of in the UI,
/// and a rental (active or historical) must exist before a rating is
/// accepted. Duplicate ratings are refused by the store constraint.
pub struct RatingService {
    ledger_repo: Arc<dyn LedgerRepository>,
}

impl RatingService {
    pub fn new(ledger_repo: Arc<dyn LedgerRepository>) -> Self {
        Self { ledger_repo }
    }

    pub async fn submit_rating(
        &self,
        user_id: i32,
        movie_id: i32,
        rating_value: i32,
        review: &str,
    ) -> AppResult<Rating> {
        Validator::validate_user_id(user_id)?;
        Validator::validate_movie_id(movie_id)?;
        Validator::validate_rating_value(rating_value)?;
        Validator::validate_review(review)?;

        if !self.ledger_repo.rental_exists(user_id, movie_id).await? {
            return Err(AppError::NotFound(format!(
                "No rental of movie {} found for user {}",
                movie_id, user_id
            )));
        }

        let rating = NewRating {
            user_id,
            movie_id,
            rating_value,
            review: review.trim().to_string(),
        };

        let created = self.ledger_repo.insert_rating(&rating).await?;
        log::info!(
            "Rating {} recorded for user {} movie {}",
            created.rating_id,
            user_id,
            movie_id
        );
        Ok(created)
    }

    pub async fn get_rating(&self, user_id: i32, movie_id: i32) -> AppResult<Option<Rating>> {
        self.ledger_repo.find_rating(user_id, movie_id).await
    }

    pub async fn list_ratings(&self) -> AppResult<Vec<Rating>> {
        self.ledger_repo.list_ratings().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLedgerRepository;
    use mockall::predicate::eq;

    fn rating_from(new: &NewRating) -> Rating {
        Rating {
            rating_id: 3,
            user_id: new.user_id,
            movie_id: new.movie_id,
            rating_value: new.rating_value,
            review: new.review.clone(),
        }
    }

    #[tokio::test]
    async fn submit_rating_inserts_when_rental_exists() {
        let mut ledger = MockLedgerRepository::new();
        ledger
            .expect_rental_exists()
            .with(eq(1), eq(42))
            .returning(|_, _| Ok(true));
        ledger
            .expect_insert_rating()
            .returning(|new| Ok(rating_from(new)));

        let svc = RatingService::new(Arc::new(ledger));
        let rating = svc.submit_rating(1, 42, 8, "great").await.unwrap();
        assert_eq!(rating.rating_value, 8);
        assert_eq!(rating.review, "great");
    }

    #[tokio::test]
    async fn submit_rating_rejects_out_of_range_values() {
        // Store must never be touched for invalid input.
        let svc = RatingService::new(Arc::new(MockLedgerRepository::new()));

        let err = svc.submit_rating(1, 42, 11, "x").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = svc.submit_rating(1, 42, -1, "x").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn submit_rating_accepts_range_endpoints() {
        let mut ledger = MockLedgerRepository::new();
        ledger.expect_rental_exists().returning(|_, _| Ok(true));
        ledger
            .expect_insert_rating()
            .returning(|new| Ok(rating_from(new)));

        let svc = RatingService::new(Arc::new(ledger));
        assert!(svc.submit_rating(1, 42, 0, "meh").await.is_ok());
        assert!(svc.submit_rating(1, 43, 10, "peak").await.is_ok());
    }

    #[tokio::test]
    async fn submit_rating_rejects_blank_review() {
        let svc = RatingService::new(Arc::new(MockLedgerRepository::new()));
        let err = svc.submit_rating(1, 42, 5, "   ").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn submit_rating_requires_a_rental_for_the_pair() {
        let mut ledger = MockLedgerRepository::new();
        ledger.expect_rental_exists().returning(|_, _| Ok(false));

        let svc = RatingService::new(Arc::new(ledger));
        let err = svc.submit_rating(1, 42, 8, "great").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn submit_rating_propagates_duplicate_conflict() {
        let mut ledger = MockLedgerRepository::new();
        ledger.expect_rental_exists().returning(|_, _| Ok(true));
        ledger
            .expect_insert_rating()
            .returning(|_| Err(AppError::Conflict("already rated".to_string())));

        let svc = RatingService::new(Arc::new(ledger));
        let err = svc.submit_rating(1, 42, 8, "again").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
