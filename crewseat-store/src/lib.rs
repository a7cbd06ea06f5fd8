pub mod app_config;
pub mod database;
pub mod memory_repo;
pub mod voucher_repo;

pub use database::DbClient;
pub use memory_repo::InMemoryVoucherRepository;
pub use voucher_repo::SqlVoucherRepository;
