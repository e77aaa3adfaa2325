pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

use application::services::{
    AccountService, CatalogService, RatingService, RentalHistoryService, RentalService,
};
use infrastructure::database::repositories::{
    CatalogRepositoryImpl, LedgerRepositoryImpl, UserRepositoryImpl,
};
use infrastructure::database::{Database, DatabaseState};
use shared::errors::AppResult;
use std::sync::Arc;

/// Composition root: owns the store handle and the wired services.
/// Services receive their repositories explicitly; nothing here is
/// process-global except the logger.
pub struct AppServices {
    db: Arc<Database>,
    pub rental_service: Arc<RentalService>,
    pub rating_service: Arc<RatingService>,
    pub rental_history_service: Arc<RentalHistoryService>,
    pub catalog_service: Arc<CatalogService>,
    pub account_service: Arc<AccountService>,
}

impl AppServices {
    /// Open the pool, run pending migrations and wire every service.
    pub fn initialize() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        shared::utils::init_logger();

        let state = DatabaseState::initialize();
        let db = state.get_database()?;
        db.run_migrations()?;

        let ledger_repo = Arc::new(LedgerRepositoryImpl::new(Arc::clone(&db)));
        let catalog_repo = Arc::new(CatalogRepositoryImpl::new(Arc::clone(&db)));
        let user_repo = Arc::new(UserRepositoryImpl::new(Arc::clone(&db)));

        let rental_service = Arc::new(RentalService::new(
            ledger_repo.clone(),
            catalog_repo.clone(),
            user_repo.clone(),
        ));
        let rating_service = Arc::new(RatingService::new(ledger_repo.clone()));
        let rental_history_service = Arc::new(RentalHistoryService::new(ledger_repo));
        let catalog_service = Arc::new(CatalogService::new(catalog_repo));
        let account_service = Arc::new(AccountService::new(user_repo));

        Ok(Self {
            db,
            rental_service,
            rating_service,
            rental_history_service,
            catalog_service,
            account_service,
        })
    }

    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.db)
    }

    /// Drain and close the pool. Call once the services are no longer
    /// reachable; outstanding connections close on return.
    pub fn shutdown(self) {
        let Self { db, .. } = self;
        if let Ok(db) = Arc::try_unwrap(db) {
            db.shutdown();
        } else {
            log::warn!("Database still referenced at shutdown; pool closes when last user drops");
        }
    }
}
