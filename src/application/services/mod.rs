mod account_service;
mod catalog_service;
mod rating_service;
mod rental_history_service;
mod rental_service;

pub use account_service::AccountService;
pub use catalog_service::CatalogService;
pub use rating_service::RatingService;
pub use rental_history_service::RentalHistoryService;
pub use rental_service::RentalService;
