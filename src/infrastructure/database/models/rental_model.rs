use crate::domain::entities::{NewRental, Rental};
use crate::infrastructure::database::schema::rentals;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = rentals, primary_key(rental_id))]
pub struct RentalModel {
    pub rental_id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub rental_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl From<RentalModel> for Rental {
    fn from(model: RentalModel) -> Self {
        Rental {
            rental_id: model.rental_id,
            user_id: model.user_id,
            movie_id: model.movie_id,
            rental_date: model.rental_date,
            end_date: model.end_date,
        }
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = rentals)]
pub struct NewRentalRow {
    pub user_id: i32,
    pub movie_id: i32,
    pub rental_date: DateTime<Utc>,
}

impl From<&NewRental> for NewRentalRow {
    fn from(rental: &NewRental) -> Self {
        NewRentalRow {
            user_id: rental.user_id,
            movie_id: rental.movie_id,
            rental_date: rental.rental_date,
        }
    }
}
