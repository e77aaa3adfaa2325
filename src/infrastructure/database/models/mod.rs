mod catalog_models;
mod movie_model;
mod rating_model;
mod rental_model;
mod user_model;

pub use catalog_models::{GenreModel, ProductionCompanyModel};
pub use movie_model::MovieModel;
pub use rating_model::{NewRatingRow, RatingModel};
pub use rental_model::{NewRentalRow, RentalModel};
pub use user_model::{NewUserRow, ProfileChangeset, UserModel};
