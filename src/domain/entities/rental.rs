use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RentalStatus;

/// One ledger entry for a held movie. A rental with no end date is
/// active; at most one active rental may exist per (user, movie) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rental {
    pub rental_id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub rental_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl Rental {
    pub fn status(&self) -> RentalStatus {
        match self.end_date {
            None => RentalStatus::Active,
            Some(_) => RentalStatus::Closed,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status().is_active()
    }

    /// Transition Active -> Closed. Closing an already closed rental is
    /// rejected; the ledger never reopens a rental.
    pub fn close(&mut self, end_date: DateTime<Utc>) -> Result<(), String> {
        if self.end_date.is_some() {
            return Err(format!("Rental {} is already closed", self.rental_id));
        }
        self.end_date = Some(end_date);
        Ok(())
    }
}

/// Fields for a rental about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRental {
    pub user_id: i32,
    pub movie_id: i32,
    pub rental_date: DateTime<Utc>,
}
