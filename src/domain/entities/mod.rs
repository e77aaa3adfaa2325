mod genre;
mod movie;
mod production_company;
mod rating;
mod rental;
mod rental_history;
mod user;

pub use genre::{Genre, MovieGenre};
pub use movie::Movie;
pub use production_company::ProductionCompany;
pub use rating::{NewRating, Rating};
pub use rental::{NewRental, Rental};
pub use rental_history::RentalHistoryRow;
pub use user::{NewUser, ProfileUpdate, User};
