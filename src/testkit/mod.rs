//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`db`] — Booktown schema DDL and seeded SQLite pools.
//! - [`store`] — `RecordingStore`, an in-memory [`OrderStore`](crate::port::outbound::OrderStore)
//!   that records every call.

pub mod db;
pub mod store;
