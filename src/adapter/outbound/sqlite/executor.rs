//! Single-statement execution over the connection pool.

use diesel::result::QueryResult;
use diesel::SqliteConnection;
use tracing::debug;

use super::database::connection::DbPool;
use crate::error::{Error, Result};

/// Runs one unit of work per pool checkout.
///
/// The connection is checked back in before the outcome is reported,
/// whether the statement succeeded or not. Nothing is retried.
#[derive(Clone)]
pub struct QueryExecutor {
    pool: DbPool,
}

impl QueryExecutor {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Check out a connection, run `work` on it, and return the connection.
    ///
    /// # Errors
    /// [`Error::Connection`] if no connection could be acquired, otherwise
    /// [`Error::Database`] if the statement failed.
    pub fn run<T, F>(&self, statement: &'static str, work: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T>,
    {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let result = work(&mut *conn);
        drop(conn);

        match result {
            Ok(value) => {
                debug!(statement, "statement executed");
                Ok(value)
            }
            Err(e) => {
                debug!(statement, error = %e, "statement failed");
                Err(Error::Database(e.to_string()))
            }
        }
    }

    #[cfg(test)]
    fn pool(&self) -> &DbPool {
        &self.pool
    }
}
