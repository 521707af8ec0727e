//! Integration tests for the cache-consistent customer repository.
//!
//! Runs the cache-fronted repository against the real SQLite store on an
//! in-memory migrated pool.

use std::sync::Arc;

use clientele::adapters::cache::{CachedCustomerRepository, CustomerCache};
use clientele::adapters::sqlite::{create_migrated_test_pool, SqliteCustomerStore};
use clientele::domain::models::{Customer, CustomerId};
use clientele::domain::ports::{CustomerRepository, CustomerStore};
use clientele::domain::DomainError;

async fn setup() -> (
    Arc<SqliteCustomerStore>,
    Arc<CachedCustomerRepository<SqliteCustomerStore>>,
) {
    let pool = create_migrated_test_pool().await.unwrap();
    let store = Arc::new(SqliteCustomerStore::new(pool));
    let cache = Arc::new(CustomerCache::new());
    let repo = CachedCustomerRepository::open(Arc::clone(&store), cache)
        .await
        .unwrap();
    (store, Arc::new(repo))
}

fn customer(id: &str, company: &str) -> Customer {
    Customer::new(id, company).unwrap()
}

#[tokio::test]
async fn test_full_crud_scenario() {
    let (_store, repo) = setup().await;

    // Create with a lowercase id stores the uppercase canonical form.
    let created = repo.create(customer("mxnt", "Acme")).await.unwrap();
    assert_eq!(created.id.as_str(), "MXNT");

    // Lookup is case-insensitive through normalization.
    let found = repo.retrieve("mxnt").await.unwrap().unwrap();
    assert_eq!(found.id.as_str(), "MXNT");
    assert_eq!(found.company_name, "Acme");

    assert!(repo.retrieve("ZZZZ").await.unwrap().is_none());

    assert!(repo.delete("MXNT").await.unwrap());
    assert!(repo.retrieve("MXNT").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_visible_in_store_and_cache() {
    let (store, repo) = setup().await;

    repo.create(customer("ALFKI", "Alfreds Futterkiste").with_country("Germany"))
        .await
        .unwrap();

    let durable = store
        .find(&CustomerId::new("ALFKI").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(durable.company_name, "Alfreds Futterkiste");

    let cached = repo.retrieve("ALFKI").await.unwrap().unwrap();
    assert_eq!(cached, durable);
}

#[tokio::test]
async fn test_duplicate_create_rejected_cache_reflects_accepted_write() {
    let (_store, repo) = setup().await;

    repo.create(customer("ANATR", "First")).await.unwrap();
    let err = repo.create(customer("anatr", "Second")).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::StoreRejected {
            operation: "create",
            rows: 0,
            ..
        }
    ));

    assert_eq!(
        repo.retrieve("ANATR").await.unwrap().unwrap().company_name,
        "First"
    );
}

#[tokio::test]
async fn test_cache_primed_from_existing_rows() {
    let pool = create_migrated_test_pool().await.unwrap();
    let store = Arc::new(SqliteCustomerStore::new(pool));
    store
        .insert(&customer("BONAP", "Bon app'").with_country("France"))
        .await
        .unwrap();
    store
        .insert(&customer("ALFKI", "Alfreds Futterkiste"))
        .await
        .unwrap();

    let repo = CachedCustomerRepository::open(store, Arc::new(CustomerCache::new()))
        .await
        .unwrap();

    let mut all = repo.retrieve_all().await.unwrap();
    all.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id.as_str(), "ALFKI");
    assert_eq!(all[1].id.as_str(), "BONAP");
}

#[tokio::test]
async fn test_update_replaces_durable_and_cached_state() {
    let (store, repo) = setup().await;
    repo.create(customer("ANTON", "Antonio Moreno")).await.unwrap();

    let mut replacement = customer("ANTON", "Antonio Moreno Taqueria");
    replacement.city = Some("Mexico D.F.".to_string());
    repo.update("anton", replacement).await.unwrap();

    let cached = repo.retrieve("ANTON").await.unwrap().unwrap();
    assert_eq!(cached.company_name, "Antonio Moreno Taqueria");
    assert_eq!(cached.city.as_deref(), Some("Mexico D.F."));

    let durable = store
        .find(&CustomerId::new("ANTON").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(durable.company_name, cached.company_name);
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let (store, repo) = setup().await;
    repo.create(customer("AROUT", "Around the Horn")).await.unwrap();

    let replacement = customer("AROUT", "Around the Horn Ltd");
    repo.update("AROUT", replacement.clone()).await.unwrap();
    let after_first = repo.retrieve("AROUT").await.unwrap().unwrap();

    repo.update("AROUT", replacement).await.unwrap();
    let after_second = repo.retrieve("AROUT").await.unwrap().unwrap();

    assert_eq!(after_first.company_name, after_second.company_name);
    let durable = store
        .find(&CustomerId::new("AROUT").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(durable.company_name, after_second.company_name);
}

#[tokio::test]
async fn test_update_key_mismatch_rejected() {
    let (_store, repo) = setup().await;
    repo.create(customer("BERGS", "Berglunds")).await.unwrap();

    let err = repo
        .update("BERGS", customer("BLAUS", "Wrong Body"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    // Neither record was touched.
    assert_eq!(
        repo.retrieve("BERGS").await.unwrap().unwrap().company_name,
        "Berglunds"
    );
    assert!(repo.retrieve("BLAUS").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_missing_customer_store_rejected() {
    let (_store, repo) = setup().await;

    let err = repo
        .update("GHOST", customer("GHOST", "Nobody"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::StoreRejected {
            operation: "update",
            rows: 0,
            ..
        }
    ));
}

#[tokio::test]
async fn test_delete_missing_customer_not_found() {
    let (_store, repo) = setup().await;

    let err = repo.delete("ZZZZ").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_concurrent_creates_distinct_keys_no_lost_writes() {
    let (store, repo) = setup().await;
    let n = 20;

    let tasks: Vec<_> = (0..n)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.create(customer(&format!("CU{i:03}"), &format!("Company {i}")))
                    .await
            })
        })
        .collect();

    for result in futures::future::join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let all = repo.retrieve_all().await.unwrap();
    assert_eq!(all.len(), n);

    let mut ids: Vec<_> = all.iter().map(|c| c.id.as_str().to_string()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), n, "duplicate ids in snapshot");

    assert_eq!(store.list_all().await.unwrap().len(), n);
}

#[tokio::test]
async fn test_racing_updates_cache_converges_to_a_committed_value() {
    let (store, repo) = setup().await;
    repo.create(customer("CACTU", "Cactus")).await.unwrap();

    let a = Arc::clone(&repo);
    let b = Arc::clone(&repo);
    let (ra, rb) = tokio::join!(
        tokio::spawn(async move { a.update("CACTU", customer("CACTU", "Writer A")).await }),
        tokio::spawn(async move { b.update("CACTU", customer("CACTU", "Writer B")).await }),
    );
    ra.unwrap().unwrap();
    rb.unwrap().unwrap();

    let durable = store
        .find(&CustomerId::new("CACTU").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert!(durable.company_name == "Writer A" || durable.company_name == "Writer B");

    // The cache may transiently lag the last store commit, but it must
    // only ever hold a value the store accepted.
    let cached = repo.retrieve("CACTU").await.unwrap().unwrap();
    assert!(cached.company_name == "Writer A" || cached.company_name == "Writer B");

    // A follow-up uncontended update converges both views.
    repo.update("CACTU", customer("CACTU", "Settled")).await.unwrap();
    assert_eq!(
        repo.retrieve("CACTU").await.unwrap().unwrap().company_name,
        "Settled"
    );
    let durable = store
        .find(&CustomerId::new("CACTU").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(durable.company_name, "Settled");
}

#[tokio::test]
async fn test_country_filter_over_snapshot() {
    let (_store, repo) = setup().await;
    repo.create(customer("ALFKI", "Alfreds").with_country("Germany"))
        .await
        .unwrap();
    repo.create(customer("BLAUS", "Blauer See").with_country("Germany"))
        .await
        .unwrap();
    repo.create(customer("BONAP", "Bon app'").with_country("France"))
        .await
        .unwrap();

    let snapshot = repo.retrieve_all().await.unwrap();
    let germans: Vec<_> = snapshot
        .iter()
        .filter(|c| c.is_in_country("Germany"))
        .collect();
    assert_eq!(germans.len(), 2);
}
