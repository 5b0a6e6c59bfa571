//! Database models for the documentation portal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A metadata record for one uploaded API-definition file.
///
/// The raw bytes live in the blob store under `file_path`; this record is
/// everything the portal knows about them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ConfigFile {
    pub id: Uuid,
    pub title: String,
    pub file_path: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub uploaded_at: DateTime<Utc>,
    /// Owner; nullable because authentication is handled upstream.
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a metadata record.
#[derive(Debug, Clone, Deserialize)]
pub struct NewConfigFile {
    pub title: String,
    pub file_path: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub user_id: Option<Uuid>,
}
