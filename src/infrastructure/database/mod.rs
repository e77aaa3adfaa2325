pub mod connection;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod state;

pub use connection::{Database, DbConnection, DbPool};
pub use state::DatabaseState;
