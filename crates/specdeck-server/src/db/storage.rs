//! Blob store for uploaded file content.
//!
//! The metadata record points at a `file_path`; this store resolves it to
//! raw bytes. Kept behind its own repository so the storage boundary stays
//! separate from the metadata one.

use sqlx::PgPool;

/// Object store keyed by `file_path`.
#[derive(Clone)]
pub struct ObjectStore {
    pool: PgPool,
}

impl ObjectStore {
    /// Create a new object store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a blob under the given path.
    pub async fn put(&self, file_path: &str, content: &[u8]) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO stored_objects (file_path, content) VALUES ($1, $2)")
            .bind(file_path)
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Fetch a blob by path. `None` when the path is unknown.
    pub async fn fetch(&self, file_path: &str) -> Result<Option<Vec<u8>>, sqlx::Error> {
        sqlx::query_scalar::<_, Vec<u8>>(
            "SELECT content FROM stored_objects WHERE file_path = $1",
        )
        .bind(file_path)
        .fetch_optional(&self.pool)
        .await
    }

    /// Remove a blob. Returns whether anything was deleted.
    pub async fn remove(&self, file_path: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stored_objects WHERE file_path = $1")
            .bind(file_path)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
