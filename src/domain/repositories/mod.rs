mod catalog_repository;
mod ledger_repository;
mod user_repository;

pub use catalog_repository::CatalogRepository;
pub use ledger_repository::LedgerRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
#[cfg(test)]
pub use ledger_repository::MockLedgerRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
