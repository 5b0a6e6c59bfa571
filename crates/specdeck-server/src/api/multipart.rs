//! Shared multipart form parsing helpers.

use axum::extract::Multipart;

use crate::error::ProblemDetails;

/// Fields extracted from an upload form.
pub struct Upload {
    pub title: String,
    pub content: Vec<u8>,
    pub file_name: String,
}

/// Extract the `title` and `file` fields from a multipart upload.
///
/// Fails with 400 if either field is missing or cannot be read.
pub async fn extract_upload(mut multipart: Multipart) -> Result<Upload, ProblemDetails> {
    let mut title: Option<String> = None;
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ProblemDetails::bad_request(format!("Invalid multipart data: {}", e)))?
    {
        match field.name().unwrap_or_default() {
            "title" => {
                title = Some(field.text().await.map_err(|e| {
                    ProblemDetails::bad_request(format!("Failed to read title: {}", e))
                })?);
            }
            "file" => {
                file_name = field.file_name().map(String::from);
                file_data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| {
                            ProblemDetails::bad_request(format!("Failed to read file: {}", e))
                        })?
                        .to_vec(),
                );
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| ProblemDetails::bad_request("Missing 'title' field"))?;
    let content = file_data.ok_or_else(|| ProblemDetails::bad_request("Missing 'file' field"))?;
    let file_name = file_name.ok_or_else(|| ProblemDetails::bad_request("Missing filename"))?;

    Ok(Upload {
        title,
        content,
        file_name,
    })
}
