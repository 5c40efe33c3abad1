//! Test helpers for booktown database setup.

use std::time::Duration;

use diesel::connection::SimpleConnection;

use crate::adapter::outbound::sqlite::database::connection::{create_pool, DbPool};

/// Book ids present in every seeded database.
pub const DUNE: i32 = 2;
pub const NEUROMANCER: i32 = 3;

/// Tables the tool expects to already exist, plus a few books.
pub const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY,
        title TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created TEXT NOT NULL,
        creator TEXT
    );
    CREATE TABLE IF NOT EXISTS line_items (
        order_id INTEGER NOT NULL,
        book_id INTEGER NOT NULL,
        quantity INTEGER NOT NULL,
        PRIMARY KEY (order_id, book_id)
    );
    INSERT OR IGNORE INTO books (id, title) VALUES
        (2, 'Dune'),
        (3, 'Neuromancer');
";

/// Apply [`SCHEMA`] through one pooled connection.
pub fn apply_schema(pool: &DbPool) {
    let mut conn = pool.get().expect("sqlite connection should be available");
    conn.batch_execute(SCHEMA)
        .expect("booktown schema should apply");
}

/// Single-connection in-memory pool with the booktown schema applied.
///
/// One connection keeps every checkout on the same in-memory database.
pub fn seeded_pool() -> DbPool {
    let pool = create_pool(":memory:", 1, Duration::from_secs(1));
    apply_schema(&pool);
    pool
}
