//! Format detection and Postman-to-OpenAPI normalization for uploaded
//! API-definition documents.
//!
//! Uploaded files arrive as JSON or YAML text. [`parse_document`] turns the
//! text into an untyped tree, [`classify`] decides which dialect it speaks,
//! and [`normalize`] produces the document the reference renderer consumes:
//! OpenAPI/Swagger input passes through untouched, Postman Collections are
//! converted, and anything else passes through with a warning.

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;

pub use convert::{convert_collection, slug_segment, Conversion};
pub use detect::classify;
pub use error::NormalizeError;
pub use model::{DocumentKind, OpenApiSpec, PostmanCollection};

use serde_json::Value;

/// A document ready for rendering, plus how it got that way.
#[derive(Debug, Clone)]
pub struct NormalizedDocument {
    pub kind: DocumentKind,
    pub document: Value,
    pub warnings: Vec<String>,
}

/// Parse raw text into an untyped document tree according to the declared
/// file type (`json`, `yaml`, or `yml`).
pub fn parse_document(text: &str, file_type: &str) -> Result<Value, NormalizeError> {
    match file_type {
        "json" => serde_json::from_str(text).map_err(|e| NormalizeError::Parse(e.to_string())),
        "yaml" | "yml" => {
            serde_yaml::from_str(text).map_err(|e| NormalizeError::Parse(e.to_string()))
        }
        other => Err(NormalizeError::UnsupportedFileType(other.to_string())),
    }
}

/// Classify a parsed document and normalize it for rendering.
///
/// OpenAPI/Swagger documents are returned unchanged, not copied-and-mutated.
/// Unknown shapes are returned unchanged with a warning; the renderer may
/// still cope. Postman Collections are converted; only a collection that
/// cannot be read into the typed model at all is an error.
pub fn normalize(document: Value) -> Result<NormalizedDocument, NormalizeError> {
    match classify(&document) {
        DocumentKind::Postman => {
            let collection: PostmanCollection = serde_json::from_value(document)
                .map_err(|e| NormalizeError::MalformedCollection(e.to_string()))?;
            let Conversion { spec, warnings } = convert_collection(&collection);
            let document =
                serde_json::to_value(&spec).expect("converted spec serializes to JSON");
            Ok(NormalizedDocument {
                kind: DocumentKind::Postman,
                document,
                warnings,
            })
        }
        DocumentKind::OpenApi => Ok(NormalizedDocument {
            kind: DocumentKind::OpenApi,
            document,
            warnings: Vec::new(),
        }),
        DocumentKind::Unknown => Ok(NormalizedDocument {
            kind: DocumentKind::Unknown,
            document,
            warnings: vec![
                "unrecognized document format; rendering may fail or be degraded".to_string(),
            ],
        }),
    }
}
