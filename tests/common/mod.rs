use contoso_university::db::{DbPool, establish_connection_pool, run_migrations};
use tempfile::TempDir;

/// A throwaway SQLite database with the schema applied, removed together
/// with its temp directory when the test ends.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let database_url = dir
            .path()
            .join(name)
            .to_str()
            .expect("valid utf-8 path")
            .to_string();

        let pool = establish_connection_pool(&database_url).expect("failed to create pool");
        let mut conn = pool.get().expect("failed to get connection");
        run_migrations(&mut conn).expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
