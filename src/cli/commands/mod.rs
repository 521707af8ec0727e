//! CLI command implementations.

pub mod customer;
pub mod init;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::cache::{CachedCustomerRepository, CustomerCache};
use crate::adapters::sqlite::{initialize_from_config, SqliteCustomerStore};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Load config and open the cache-fronted repository every command runs
/// against. The cache is constructed here and injected; within one process
/// all repositories share it.
pub async fn open_repository(
    config: &Config,
    cache: Arc<CustomerCache>,
) -> Result<CachedCustomerRepository<SqliteCustomerStore>> {
    let pool = initialize_from_config(&config.database)
        .await
        .context("Failed to open database")?;
    let store = Arc::new(SqliteCustomerStore::new(pool));

    CachedCustomerRepository::open(store, cache)
        .await
        .context("Failed to prime customer cache")
}

pub fn load_config() -> Result<Config> {
    ConfigLoader::load()
}
