mod catalog_repository_impl;
mod ledger_repository_impl;
mod user_repository_impl;

pub use catalog_repository_impl::CatalogRepositoryImpl;
pub use ledger_repository_impl::LedgerRepositoryImpl;
pub use user_repository_impl::UserRepositoryImpl;
