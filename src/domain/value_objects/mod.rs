mod rental_status;
mod user_role;

pub use rental_status::RentalStatus;
pub use user_role::{Credentials, UserRole};
