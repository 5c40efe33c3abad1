//! SQLite persistence adapter.
//!
//! Provides the pooled query executor and the SQLite-backed
//! [`OrderStore`](crate::port::outbound::OrderStore) using Diesel ORM.

pub mod database;
pub mod executor;
pub mod store;

pub use database::connection::{create_pool, DbPool};
pub use executor::QueryExecutor;
pub use store::SqliteOrderStore;
