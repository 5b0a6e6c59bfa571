use thiserror::Error;

/// Errors raised while loading a document for normalization.
///
/// Conversion itself never fails part-way: a malformed URL inside a
/// collection is skipped and reported as a warning. Only a document that
/// cannot be loaded at all ends up here.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The declared file type is not one we parse.
    #[error("unsupported file type: {0} (expected json, yaml, or yml)")]
    UnsupportedFileType(String),

    /// The text is not valid JSON/YAML.
    #[error("parse error: {0}")]
    Parse(String),

    /// The document claims to be a Postman Collection but does not fit the
    /// collection model.
    #[error("malformed Postman collection: {0}")]
    MalformedCollection(String),
}
