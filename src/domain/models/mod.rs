pub mod config;
pub mod customer;

pub use config::{Config, DatabaseConfig, LoggingConfig};
pub use customer::{Customer, CustomerId};
