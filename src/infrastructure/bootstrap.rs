//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::create_pool;
use crate::adapter::outbound::sqlite::store::SqliteOrderStore;
use crate::infrastructure::config::settings::Config;

/// Build the order store over a process-lifetime connection pool.
///
/// No connection is opened until the first statement runs, so actions
/// rejected before dispatch never touch the database.
#[must_use]
pub fn build_order_store(config: &Config) -> SqliteOrderStore {
    let database = &config.database;
    let pool = create_pool(
        &database.url,
        database.pool_size,
        database.connection_timeout(),
    );
    debug!(url = %database.url, pool_size = database.pool_size, "database pool configured");
    SqliteOrderStore::new(pool)
}
