//! Cache-consistent repository over any `CustomerStore`.
//!
//! Orchestrates durable store writes with mirror updates in the shared
//! `CustomerCache`. The store always commits before the cache is touched,
//! so the cache never holds a value the store did not accept; reads are
//! served from the cache alone.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::adapters::cache::CustomerCache;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Customer, CustomerId};
use crate::domain::ports::{CustomerRepository, CustomerStore};

/// How many read-then-swap rounds an update attempts before accepting a
/// transiently stale cache entry. The store commit already succeeded at
/// that point, so the operation still reports success.
const CAS_ATTEMPTS: usize = 2;

pub struct CachedCustomerRepository<S: CustomerStore> {
    store: Arc<S>,
    cache: Arc<CustomerCache>,
}

impl<S: CustomerStore> CachedCustomerRepository<S> {
    /// Construct the repository, priming the shared cache from the store's
    /// enumerate-all if no earlier construction already did.
    pub async fn open(store: Arc<S>, cache: Arc<CustomerCache>) -> DomainResult<Self> {
        cache.prime(|| async { store.list_all().await }).await?;
        Ok(Self { store, cache })
    }

    /// Construct without priming. Intended for tests that stage the cache
    /// by hand; production paths go through [`Self::open`].
    pub fn new_unprimed(store: Arc<S>, cache: Arc<CustomerCache>) -> Self {
        Self { store, cache }
    }

    /// Mirror a committed update into the cache with a bounded
    /// read-then-swap loop.
    fn mirror_update(&self, id: &CustomerId, customer: &Customer) {
        for attempt in 1..=CAS_ATTEMPTS {
            match self.cache.get(id) {
                None => {
                    // The store accepted the write, so converge the cache
                    // instead of leaving it behind.
                    self.cache.upsert(customer.clone());
                    warn!(
                        customer_id = %id,
                        "cache had no entry for updated customer; inserted committed value"
                    );
                    return;
                }
                Some(old) => {
                    if self.cache.compare_and_swap(id, customer.clone(), &old) {
                        debug!(customer_id = %id, attempt, "cache entry updated");
                        return;
                    }
                }
            }
        }
        // Both swap rounds lost to concurrent writers. The durable state
        // is committed; the cache may lag until the next write to this key.
        warn!(
            customer_id = %id,
            attempts = CAS_ATTEMPTS,
            "cache update lost compare-and-swap race; cached value may be stale"
        );
    }
}

#[async_trait]
impl<S: CustomerStore + 'static> CustomerRepository for CachedCustomerRepository<S> {
    async fn create(&self, customer: Customer) -> DomainResult<Customer> {
        // Entity ids are normalized at construction; re-derive to cover
        // records deserialized from external input.
        let id = CustomerId::new(customer.id.as_str())?;
        let customer = Customer { id, ..customer };

        let affected = self.store.insert(&customer).await?;
        if affected != 1 {
            return Err(DomainError::StoreRejected {
                operation: "create",
                id: customer.id.to_string(),
                rows: affected,
            });
        }

        Ok(self.cache.upsert(customer))
    }

    async fn retrieve_all(&self) -> DomainResult<Vec<Customer>> {
        if !self.cache.is_primed() {
            // Defensive fallback: construction is supposed to have primed
            // the cache before any read reaches it.
            warn!("retrieve_all called against an unprimed cache");
            return Ok(Vec::new());
        }
        Ok(self.cache.get_all())
    }

    async fn retrieve(&self, id: &str) -> DomainResult<Option<Customer>> {
        let id = CustomerId::new(id)?;
        Ok(self.cache.get(&id))
    }

    async fn update(&self, id: &str, customer: Customer) -> DomainResult<Customer> {
        let path_id = CustomerId::new(id)?;
        let body_id = CustomerId::new(customer.id.as_str())?;
        if path_id != body_id {
            return Err(DomainError::Validation(format!(
                "customer id mismatch: path has {path_id}, body has {body_id}"
            )));
        }
        let customer = Customer {
            id: body_id,
            ..customer
        };

        let affected = self.store.update(&customer).await?;
        if affected != 1 {
            return Err(DomainError::StoreRejected {
                operation: "update",
                id: path_id.to_string(),
                rows: affected,
            });
        }

        self.mirror_update(&path_id, &customer);
        Ok(customer)
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let id = CustomerId::new(id)?;

        // The store is the authoritative source for delete existence.
        if self.store.find(&id).await?.is_none() {
            return Err(DomainError::NotFound(id.to_string()));
        }

        let affected = self.store.delete(&id).await?;
        if affected != 1 {
            return Err(DomainError::StoreRejected {
                operation: "delete",
                id: id.to_string(),
                rows: affected,
            });
        }

        let evicted = self.cache.remove(&id);
        if !evicted {
            warn!(
                customer_id = %id,
                "durable delete succeeded but cache held no entry"
            );
        }
        Ok(evicted)
    }
}
