use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Classification of a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A Postman Collection; needs conversion before rendering.
    Postman,
    /// An OpenAPI or Swagger document; rendered as-is.
    OpenApi,
    /// Anything else; passed through best-effort with a warning.
    Unknown,
}

/// A Postman Collection (v2.x export).
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanCollection {
    pub info: PostmanInfo,
    #[serde(default)]
    pub item: Vec<PostmanItem>,
    /// Collection variables; carried for completeness, unused by conversion.
    #[serde(default)]
    pub variable: Vec<PostmanVariable>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Schema URL; its `getpostman.com` substring is what identifies a
    /// collection in the first place.
    pub schema: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanVariable {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// A node in the collection tree.
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub node: PostmanNode,
}

/// Folder vs. request leaf as a tagged variant: a node is never both and
/// never neither. A node carrying both fields reads as a folder; one
/// carrying neither fails deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostmanNode {
    Folder { item: Vec<PostmanItem> },
    Request { request: PostmanRequest },
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanRequest {
    pub method: String,
    #[serde(default)]
    pub header: Option<Vec<PostmanKeyValue>>,
    #[serde(default)]
    pub url: Option<PostmanUrl>,
    #[serde(default)]
    pub body: Option<PostmanBody>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A request URL: the raw string shorthand or the structured object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostmanUrl {
    Raw(String),
    Structured {
        #[serde(default)]
        raw: String,
        #[serde(default)]
        host: Vec<String>,
        #[serde(default)]
        path: Vec<String>,
        #[serde(default)]
        query: Option<Vec<PostmanKeyValue>>,
    },
}

impl PostmanUrl {
    /// The raw URL text, regardless of representation.
    pub fn raw(&self) -> &str {
        match self {
            PostmanUrl::Raw(s) => s,
            PostmanUrl::Structured { raw, .. } => raw,
        }
    }

    /// Query entries; only the structured form carries them.
    pub fn query(&self) -> Option<&[PostmanKeyValue]> {
        match self {
            PostmanUrl::Raw(_) => None,
            PostmanUrl::Structured { query, .. } => query.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanKeyValue {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanBody {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub formdata: Option<Vec<PostmanKeyValue>>,
}

/// The normalized OpenAPI document produced by conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiSpec {
    pub openapi: String,
    pub info: OpenApiInfo,
    pub servers: Vec<OpenApiServer>,
    /// path → lowercase method → operation. Later requests overwrite earlier
    /// ones at the same (path, method) key.
    pub paths: BTreeMap<String, BTreeMap<String, Operation>>,
    pub components: OpenApiComponents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiServer {
    pub url: String,
    pub description: String,
}

/// Always empty: no schema inference is performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenApiComponents {
    pub schemas: BTreeMap<String, Value>,
    pub parameters: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub summary: String,
    pub description: String,
    pub responses: BTreeMap<String, ResponseObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(
        default,
        rename = "requestBody",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_body: Option<RequestBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseObject {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub required: bool,
    pub schema: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub content: Value,
}
