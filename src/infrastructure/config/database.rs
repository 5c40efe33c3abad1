//! Database connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where the booktown database lives and how connections are pooled.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite path or `sqlite://` / `file:` URL. The file must already exist.
    #[serde(default = "default_url")]
    pub url: String,
    /// Maximum pooled connections. One invocation uses exactly one.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// How long to wait for a connection before giving up (seconds).
    #[serde(default = "default_connection_timeout_secs")]
    pub connection_timeout_secs: u64,
}

fn default_url() -> String {
    "booktown.db".to_string()
}

const fn default_pool_size() -> u32 {
    1
}

const fn default_connection_timeout_secs() -> u64 {
    5
}

impl DatabaseConfig {
    #[must_use]
    pub const fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            pool_size: default_pool_size(),
            connection_timeout_secs: default_connection_timeout_secs(),
        }
    }
}
