//! Process-wide concurrent customer cache.
//!
//! One `CustomerCache` instance holds the entire customer set, keyed by
//! the uppercase identity key. It is constructed explicitly and shared
//! across repositories via `Arc` rather than living behind a static, so
//! ownership and lifecycle stay visible and testable. There is no
//! eviction, expiry, or size bound.

use std::future::Future;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::OnceCell;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Customer, CustomerId};

#[derive(Default)]
pub struct CustomerCache {
    entries: DashMap<CustomerId, Customer>,
    primed: OnceCell<()>,
}

impl CustomerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the cache from `load` exactly once.
    ///
    /// Concurrent callers race safely: one runs the load, everyone else
    /// waits on it. A failed load leaves the cache unprimed so the next
    /// caller retries.
    pub async fn prime<F, Fut>(&self, load: F) -> DomainResult<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = DomainResult<Vec<Customer>>>,
    {
        self.primed
            .get_or_try_init(|| async {
                for customer in load().await? {
                    self.entries.insert(customer.id.clone(), customer);
                }
                Ok::<(), crate::domain::errors::DomainError>(())
            })
            .await
            .copied()
    }

    /// Whether the initial full population has run.
    pub fn is_primed(&self) -> bool {
        self.primed.initialized()
    }

    pub fn get(&self, id: &CustomerId) -> Option<Customer> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    /// Snapshot of all cached customers: consistent at some instant, not
    /// necessarily the newest possible view.
    pub fn get_all(&self) -> Vec<Customer> {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Insert or overwrite, returning the stored value.
    pub fn upsert(&self, customer: Customer) -> Customer {
        self.entries
            .insert(customer.id.clone(), customer.clone());
        customer
    }

    /// Replace the entry for `id` with `new` only if the current value
    /// equals `expected`. Returns false when the entry is absent or a
    /// concurrent writer changed it first.
    pub fn compare_and_swap(&self, id: &CustomerId, new: Customer, expected: &Customer) -> bool {
        match self.entries.entry(id.clone()) {
            Entry::Occupied(mut occupied) if occupied.get() == expected => {
                occupied.insert(new);
                true
            }
            _ => false,
        }
    }

    /// Remove the entry for `id`. True iff an entry was present.
    pub fn remove(&self, id: &CustomerId) -> bool {
        self.entries.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
