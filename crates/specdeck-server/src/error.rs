//! RFC 9457 Problem Details error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC 9457 Problem Details response.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Create a 404 Not Found error.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            error_type: "urn:specdeck:error:not-found".into(),
            title: "Not Found".into(),
            status: 404,
            detail: Some(detail.into()),
        }
    }

    /// Create a 400 Bad Request error.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            error_type: "urn:specdeck:error:bad-request".into(),
            title: "Bad Request".into(),
            status: 400,
            detail: Some(detail.into()),
        }
    }

    /// Create a 422 for stored documents that cannot be parsed or normalized.
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self {
            error_type: "urn:specdeck:error:unprocessable-document".into(),
            title: "Unprocessable Document".into(),
            status: 422,
            detail: Some(detail.into()),
        }
    }

    /// Create a 409 Conflict error.
    pub fn conflict(detail: impl Into<String>) -> Self {
        Self {
            error_type: "urn:specdeck:error:conflict".into(),
            title: "Conflict".into(),
            status: 409,
            detail: Some(detail.into()),
        }
    }

    /// Create a 500 Internal Server Error.
    pub fn internal_error() -> Self {
        Self {
            error_type: "urn:specdeck:error:internal-error".into(),
            title: "Internal Server Error".into(),
            status: 500,
            detail: None,
        }
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = Json(&self).into_response();
        *response.status_mut() = status;
        response
            .headers_mut()
            .insert("content-type", "application/problem+json".parse().unwrap());
        response
    }
}

/// Convert database errors to ProblemDetails.
impl From<sqlx::Error> for ProblemDetails {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "database error");
        match err {
            sqlx::Error::RowNotFound => Self::not_found("resource not found"),
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    Self::conflict("resource already exists")
                } else {
                    Self::internal_error()
                }
            }
            _ => Self::internal_error(),
        }
    }
}
