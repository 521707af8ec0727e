//! Customer repository port: the surface the API boundary consumes.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Customer;

/// Repository interface for customer CRUD.
///
/// Raw string ids are accepted at this boundary and normalized to their
/// uppercase canonical form before any cache or store interaction.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Create a new customer. Fails with `StoreRejected` if the store
    /// refuses the write (e.g. duplicate key).
    async fn create(&self, customer: Customer) -> DomainResult<Customer>;

    /// Snapshot of all customers currently cached. Never queries the store.
    async fn retrieve_all(&self) -> DomainResult<Vec<Customer>>;

    /// Look up one customer by id from the cache. `Ok(None)` when absent.
    /// Never touches the store.
    async fn retrieve(&self, id: &str) -> DomainResult<Option<Customer>>;

    /// Replace the customer at `id` with `customer`. The path id and the
    /// body id must agree after normalization.
    async fn update(&self, id: &str, customer: Customer) -> DomainResult<Customer>;

    /// Delete the customer at `id`. Returns whether the cache held an
    /// entry to evict; `false` after a successful durable delete is a
    /// consistency signal, not a failure.
    async fn delete(&self, id: &str) -> DomainResult<bool>;
}
