//! Database connection management using Diesel ORM.
//!
//! Provides the r2d2 connection pool used for every statement. Connections
//! are opened lazily on first checkout, so building a pool never touches
//! the database. Every target is opened read-write without create: a missing
//! database file fails the checkout instead of leaving an empty file behind.

use std::time::Duration;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Create a connection pool for the given database URL.
///
/// Checkouts wait at most `connection_timeout` for a connection to open.
/// Idle connections are kept until the pool is dropped.
pub fn create_pool(database_url: &str, max_size: u32, connection_timeout: Duration) -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(read_write_url(database_url));
    Pool::builder()
        .max_size(max_size)
        .min_idle(Some(0))
        .idle_timeout(None)
        .connection_timeout(connection_timeout)
        .build_unchecked(manager)
}

/// Rewrite `url` as a SQLite URI opened with `mode=rw`.
///
/// Plain paths and `sqlite://` URLs become `file:` URIs. In-memory targets
/// and URIs that already name a `mode` are returned unchanged.
#[must_use]
pub fn read_write_url(url: &str) -> String {
    if url == MEMORY {
        return url.to_string();
    }

    let uri = match url.strip_prefix("sqlite://") {
        Some(rest) => format!("file:{rest}"),
        None if url.starts_with("file:") => url.to_string(),
        None => format!("file:{}", escape_path(url)),
    };

    let (path, query) = match uri.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (uri.as_str(), None),
    };
    let has_mode = query.is_some_and(|q| q.split('&').any(|param| param.starts_with("mode=")));
    if has_mode || path == "file::memory:" {
        return uri;
    }

    let separator = if query.is_some() { '&' } else { '?' };
    format!("{uri}{separator}mode=rw")
}

const MEMORY: &str = ":memory:";

/// Percent-encode the characters that end the path part of a URI.
fn escape_path(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            '?' => escaped.push_str("%3f"),
            '#' => escaped.push_str("%23"),
            _ => escaped.push(c),
        }
    }
    escaped
}
