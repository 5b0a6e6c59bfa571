//! Document classification.

use serde_json::Value;

use crate::model::DocumentKind;

/// Classify a parsed document.
///
/// Total over arbitrary values: anything that is not recognizably a Postman
/// Collection or an OpenAPI/Swagger document is [`DocumentKind::Unknown`],
/// never an error.
pub fn classify(doc: &Value) -> DocumentKind {
    let is_postman = doc
        .get("info")
        .and_then(|info| info.get("schema"))
        .and_then(Value::as_str)
        .is_some_and(|schema| schema.contains("getpostman.com"));
    if is_postman {
        return DocumentKind::Postman;
    }

    // Field presence is enough; the version value is not validated here.
    if doc.get("openapi").is_some() || doc.get("swagger").is_some() {
        DocumentKind::OpenApi
    } else {
        DocumentKind::Unknown
    }
}
