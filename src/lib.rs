//! Clientele - Customer Directory Service
//!
//! Clientele exposes CRUD over a customer collection, backed by SQLite and
//! fronted by a process-wide in-memory read-through cache. The core of the
//! crate is the cache-consistent repository layer: durable store writes
//! always commit before the shared cache is touched, so the cache never
//! holds a value the store did not accept.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): the `Customer` model and the
//!   `CustomerStore` / `CustomerRepository` ports
//! - **Adapters** (`adapters`): SQLite store gateway, the concurrent
//!   customer cache, and the cache-fronted repository
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use clientele::adapters::cache::{CachedCustomerRepository, CustomerCache};
//! use clientele::adapters::sqlite::{initialize_database, SqliteCustomerStore};
//! use clientele::domain::ports::CustomerRepository;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = initialize_database("sqlite:.clientele/clientele.db").await?;
//!     let store = Arc::new(SqliteCustomerStore::new(pool));
//!     let cache = Arc::new(CustomerCache::new());
//!     let repo = CachedCustomerRepository::open(store, cache).await?;
//!     let all = repo.retrieve_all().await?;
//!     println!("{} customers", all.len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::cache::{CachedCustomerRepository, CustomerCache};
pub use adapters::sqlite::SqliteCustomerStore;
pub use domain::models::{Config, Customer, CustomerId, DatabaseConfig, LoggingConfig};
pub use domain::ports::{CustomerRepository, CustomerStore};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
