//! Port trait definitions (Hexagonal Architecture)
//!
//! Async trait interfaces that infrastructure adapters implement:
//! - `CustomerStore`: durable relational store gateway
//! - `CustomerRepository`: the CRUD surface consumed by the API boundary
//!
//! These traits keep the domain independent of specific infrastructure
//! implementations.

pub mod customer_repository;
pub mod customer_store;

pub use customer_repository::CustomerRepository;
pub use customer_store::CustomerStore;
