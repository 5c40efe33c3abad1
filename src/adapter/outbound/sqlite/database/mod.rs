//! SQLite database modules.
//!
//! Provides connection pooling, schema definitions, and Diesel model types.

pub mod connection;
pub mod model;
pub mod schema;
