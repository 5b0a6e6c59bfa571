//! Docs API handlers: upload, listing, normalization, and rendering.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use specdeck_normalizer::{
    normalize, parse_document, slug_segment, DocumentKind, NormalizeError, NormalizedDocument,
};

use crate::db::{ConfigFile, DocumentsRepository, NewConfigFile, ObjectStore};
use crate::error::ProblemDetails;

use super::router::AppState;

/// Uploads larger than this are rejected.
pub(super) const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: Uuid,
    pub title: String,
    /// Slugged title, usable as the `api` query parameter of `/reference`.
    pub slug: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
}

/// POST /docs - Upload an API-definition file
pub async fn upload_doc(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ProblemDetails> {
    let upload = super::multipart::extract_upload(multipart).await?;

    if upload.title.trim().is_empty() {
        return Err(ProblemDetails::bad_request("Title must not be empty"));
    }
    if upload.content.len() > MAX_UPLOAD_BYTES {
        return Err(ProblemDetails::bad_request(
            "File size must be less than 10MB",
        ));
    }

    let file_type = upload
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_else(|| "unknown".to_string());
    let file_path = format!("{}.{}", Uuid::new_v4(), file_type);
    let file_size = upload.content.len() as i64;

    let store = ObjectStore::new(state.pool.clone());
    let repo = DocumentsRepository::new(state.pool.clone());

    store.put(&file_path, &upload.content).await?;

    let record = match repo
        .create(NewConfigFile {
            title: upload.title,
            file_path: file_path.clone(),
            file_name: upload.file_name,
            file_size,
            file_type,
            // Authentication lives in front of this service; no owner here.
            user_id: None,
        })
        .await
    {
        Ok(record) => record,
        Err(e) => {
            // Don't leave an orphaned blob behind when the insert fails.
            if let Err(cleanup) = store.remove(&file_path).await {
                tracing::warn!(error = %cleanup, %file_path, "failed to clean up stored blob");
            }
            return Err(e.into());
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            id: record.id,
            slug: slug_segment(&record.title),
            title: record.title,
            file_name: record.file_name,
            file_size: record.file_size,
            file_type: record.file_type,
        }),
    ))
}

/// GET /docs - List all metadata records, newest first
pub async fn list_docs(
    State(state): State<AppState>,
) -> Result<Json<Vec<ConfigFile>>, ProblemDetails> {
    let repo = DocumentsRepository::new(state.pool.clone());
    let docs = repo.list().await?;
    Ok(Json(docs))
}

/// GET /docs/:id - Get one metadata record
pub async fn get_doc(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConfigFile>, ProblemDetails> {
    let repo = DocumentsRepository::new(state.pool.clone());
    let doc = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ProblemDetails::not_found(format!("Document {} not found", id)))?;
    Ok(Json(doc))
}

/// DELETE /docs/:id - Remove the record and its stored blob
pub async fn delete_doc(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ProblemDetails> {
    let repo = DocumentsRepository::new(state.pool.clone());
    let doc = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ProblemDetails::not_found(format!("Document {} not found", id)))?;

    repo.delete(id).await?;
    ObjectStore::new(state.pool.clone())
        .remove(&doc.file_path)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct NormalizedResponse {
    /// Detected input dialect.
    pub format: DocumentKind,
    pub warnings: Vec<String>,
    /// The document handed to the renderer: converted for Postman input,
    /// passed through for everything else.
    pub document: serde_json::Value,
}

/// GET /docs/:id/openapi - Load, classify, and normalize the stored document
pub async fn get_normalized_doc(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NormalizedResponse>, ProblemDetails> {
    let repo = DocumentsRepository::new(state.pool.clone());
    let doc = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ProblemDetails::not_found(format!("Document {} not found", id)))?;

    let normalized = load_and_normalize(&state.pool, &doc).await?;
    Ok(Json(NormalizedResponse {
        format: normalized.kind,
        warnings: normalized.warnings,
        document: normalized.document,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ReferenceQuery {
    pub api: Option<String>,
}

/// GET /reference - Interactive documentation for one uploaded definition
///
/// `?api=<slug>` selects the record whose slugged title matches; without the
/// parameter the first available record is rendered.
pub async fn reference_page(
    State(state): State<AppState>,
    Query(query): Query<ReferenceQuery>,
) -> Result<Html<String>, ProblemDetails> {
    let repo = DocumentsRepository::new(state.pool.clone());
    let records = repo.list().await?;

    let record = match &query.api {
        Some(slug) => records
            .iter()
            .find(|r| slug_segment(&r.title) == slug.to_lowercase())
            .ok_or_else(|| {
                ProblemDetails::not_found(format!("No API documentation found for: {}", slug))
            })?,
        None => records
            .first()
            .ok_or_else(|| ProblemDetails::not_found("No API documentation available"))?,
    };

    let normalized = load_and_normalize(&state.pool, record).await?;

    let config = serde_json::json!({
        "content": normalized.document,
        "theme": "default",
        "layout": "modern",
        "showSidebar": true,
    });

    Ok(Html(scalar_api_reference::scalar_html_default(&config)))
}

/// Shared load path: fetch the blob, parse per the declared file type,
/// normalize. Normalization warnings are logged here; they never fail the
/// request.
async fn load_and_normalize(
    pool: &PgPool,
    record: &ConfigFile,
) -> Result<NormalizedDocument, ProblemDetails> {
    let store = ObjectStore::new(pool.clone());
    let bytes = store.fetch(&record.file_path).await?.ok_or_else(|| {
        ProblemDetails::not_found(format!("Stored file {} not found", record.file_path))
    })?;

    let text = String::from_utf8(bytes)
        .map_err(|_| ProblemDetails::unprocessable("File is not valid UTF-8"))?;

    let parsed = parse_document(&text, &record.file_type).map_err(problem_from_normalize)?;
    let normalized = normalize(parsed).map_err(problem_from_normalize)?;

    for warning in &normalized.warnings {
        tracing::warn!(title = %record.title, "{}", warning);
    }

    Ok(normalized)
}

fn problem_from_normalize(err: NormalizeError) -> ProblemDetails {
    ProblemDetails::unprocessable(err.to_string())
}
