use std::path::{Path, PathBuf};
use std::time::Duration;

use booktown_orders::adapter::outbound::sqlite::{create_pool, DbPool};
use booktown_orders::testkit::db::apply_schema;
use diesel::prelude::*;
use tempfile::TempDir;

/// Temporary booktown SQLite database for integration tests.
///
/// The database file is created up front since the tool never creates one.
/// The directory and database file are removed on drop.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("booktown.db");
        std::fs::File::create(&path).expect("create database file");

        let url = format!("sqlite://{}", path.display());
        let pool = create_pool(&url, 2, Duration::from_secs(5));
        apply_schema(&pool);

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn count(&self, table: &str) -> i64 {
        let mut conn = self.pool.get().expect("get sqlite connection");
        diesel::sql_query(format!("SELECT COUNT(*) AS count FROM {table}"))
            .get_result::<Count>(&mut conn)
            .expect("count rows")
            .count
    }
}

#[derive(QueryableByName)]
struct Count {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}
