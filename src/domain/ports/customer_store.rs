//! Store gateway port: the durable backing store for customers.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Customer, CustomerId};

/// Gateway to the durable relational store.
///
/// Write operations return the number of rows the store reported as
/// affected. The repository treats exactly 1 as success for single-entity
/// writes; the store is the single source of truth on durable state,
/// including key uniqueness. An insert refused because of a duplicate key
/// reports 0 rows affected rather than an error, so every refused write
/// funnels through the same affected-count check.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a new customer row. Returns rows affected (0 on duplicate key).
    async fn insert(&self, customer: &Customer) -> DomainResult<u64>;

    /// Update an existing customer row by id. Returns rows affected.
    async fn update(&self, customer: &Customer) -> DomainResult<u64>;

    /// Delete a customer row by id. Returns rows affected.
    async fn delete(&self, id: &CustomerId) -> DomainResult<u64>;

    /// Look up one customer by id.
    async fn find(&self, id: &CustomerId) -> DomainResult<Option<Customer>>;

    /// Enumerate every customer row. Used to prime the cache.
    async fn list_all(&self) -> DomainResult<Vec<Customer>>;
}
