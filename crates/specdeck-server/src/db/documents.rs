//! Repository for uploaded-document metadata records.

use sqlx::PgPool;
use uuid::Uuid;

use super::models::{ConfigFile, NewConfigFile};

/// Repository for `config_files` records.
#[derive(Clone)]
pub struct DocumentsRepository {
    pool: PgPool,
}

impl DocumentsRepository {
    /// Create a new documents repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a metadata record.
    pub async fn create(&self, doc: NewConfigFile) -> Result<ConfigFile, sqlx::Error> {
        sqlx::query_as::<_, ConfigFile>(
            r#"
            INSERT INTO config_files (title, file_path, file_name, file_size, file_type, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&doc.title)
        .bind(&doc.file_path)
        .bind(&doc.file_name)
        .bind(doc.file_size)
        .bind(&doc.file_type)
        .bind(doc.user_id)
        .fetch_one(&self.pool)
        .await
    }

    /// List all records, newest first.
    pub async fn list(&self) -> Result<Vec<ConfigFile>, sqlx::Error> {
        sqlx::query_as::<_, ConfigFile>("SELECT * FROM config_files ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
    }

    /// Get a record by ID.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ConfigFile>, sqlx::Error> {
        sqlx::query_as::<_, ConfigFile>("SELECT * FROM config_files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete a record. Returns whether anything was deleted.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM config_files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
