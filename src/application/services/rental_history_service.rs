use crate::domain::{entities::RentalHistoryRow, repositories::LedgerRepository};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use std::sync::Arc;

/// Read-only façade over the ledger: each rental of a user joined with
/// its movie and, when present, the user's rating. No side effects;
/// safe to call concurrently with any write.
pub struct RentalHistoryService {
    ledger_repo: Arc<dyn LedgerRepository>,
}

impl RentalHistoryService {
    pub fn new(ledger_repo: Arc<dyn LedgerRepository>) -> Self {
        Self { ledger_repo }
    }

    /// Rows come back newest rental first (rental_date desc, rental_id
    /// desc as tie-breaker) so repeated reads are deterministic.
    pub async fn list_rentals_for_user(&self, user_id: i32) -> AppResult<Vec<RentalHistoryRow>> {
        Validator::validate_user_id(user_id)?;
        self.ledger_repo.list_rentals_for_user(user_id).await
    }
}
