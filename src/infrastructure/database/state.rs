use super::connection::Database;
use crate::shared::errors::AppError;
use std::sync::Arc;

/// Outcome of opening the store at startup. A failed open is carried
/// as a value so the composition root decides how to degrade instead
/// of panicking mid-wire.
#[derive(Clone)]
pub enum DatabaseState {
    Available(Arc<Database>),
    Unavailable { reason: String },
}

impl DatabaseState {
    pub fn initialize() -> Self {
        match Database::new() {
            Ok(db) => {
                log::info!("Database initialized successfully");
                DatabaseState::Available(Arc::new(db))
            }
            Err(e) => {
                log::error!("Database initialization failed: {}", e);
                DatabaseState::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn get_database(&self) -> Result<Arc<Database>, AppError> {
        match self {
            DatabaseState::Available(db) => Ok(Arc::clone(db)),
            DatabaseState::Unavailable { reason } => Err(AppError::ServiceUnavailable(format!(
                "Database unavailable: {}",
                reason
            ))),
        }
    }
}
