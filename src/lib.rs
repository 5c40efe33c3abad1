//! Booktown orders - order management against the booktown database.
//!
//! One invocation performs one action (`create`, `addItem`, `removeItem`,
//! `updateItem`, `list`, `delete`) as a single statement or transaction,
//! then prints the requested columns as tab-separated text.
//!
//! # Modules
//!
//! - [`domain`] - Orders, line items, actions and result rows
//! - [`port`] - The [`OrderStore`](port::outbound::OrderStore) persistence port
//! - [`application`] - Required-field checks and action dispatch
//! - [`adapter`] - Command-line parsing, output, and the SQLite store
//! - [`infrastructure`] - Configuration, logging, and pool wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use booktown_orders::adapter::outbound::sqlite::{create_pool, SqliteOrderStore};
//! use booktown_orders::application::{dispatch, Context, OrderOptions};
//! use booktown_orders::domain::Action;
//!
//! # async fn example() -> booktown_orders::error::Result<()> {
//! let pool = create_pool("booktown.db", 1, std::time::Duration::from_secs(5));
//! let store = SqliteOrderStore::new(pool);
//! let options = OrderOptions { order_id: Some(1), ..OrderOptions::default() };
//! let outcome = dispatch(&store, &Action::List, &options, Context::from_env()).await?;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
