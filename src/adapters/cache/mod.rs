//! In-memory cache adapters.

pub mod cached_customer_repository;
pub mod customer_cache;

pub use cached_customer_repository::CachedCustomerRepository;
pub use customer_cache::CustomerCache;
