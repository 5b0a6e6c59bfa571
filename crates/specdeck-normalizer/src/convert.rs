//! Postman Collection to OpenAPI conversion.
//!
//! One operation is emitted per request leaf. Paths are derived from the
//! request URL when it parses, from the item name otherwise; folders prefix
//! their slugged name onto everything below them. Responses are a fixed
//! generic set; no schema inference happens here.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde_json::json;
use url::Url;

use crate::model::{
    OpenApiComponents, OpenApiInfo, OpenApiServer, OpenApiSpec, Operation, Parameter,
    PostmanCollection, PostmanItem, PostmanNode, PostmanRequest, RequestBody, ResponseObject,
};

/// Server URL used when no request in the collection yields a parseable URL.
const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// Substituted for `{{…}}` template tokens so templated hosts still parse.
const TEMPLATE_PLACEHOLDER: &str = "placeholder";

static TEMPLATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{.*?\}\}").expect("template token pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Result of converting a collection: the document plus any diagnostics
/// (malformed URLs) collected along the way.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub spec: OpenApiSpec,
    pub warnings: Vec<String>,
}

/// Lowercase a name and collapse each whitespace run to a single hyphen.
///
/// Used for synthesized path segments and for title slugs.
pub fn slug_segment(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Convert a classified Postman Collection into an OpenAPI document.
///
/// Pure: the input is never mutated and diagnostics come back with the
/// result. A malformed URL only skips that item's URL-derived fields;
/// siblings are still processed.
pub fn convert_collection(collection: &PostmanCollection) -> Conversion {
    let mut warnings = Vec::new();

    let title = match collection.info.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "API Documentation".to_string(),
    };
    let description = collection
        .info
        .description
        .clone()
        .unwrap_or_else(|| "Converted from Postman Collection".to_string());
    let version = collection
        .info
        .version
        .clone()
        .unwrap_or_else(|| "1.0.0".to_string());

    let base_url = extract_base_url(&collection.item, &mut warnings)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let mut paths: BTreeMap<String, BTreeMap<String, Operation>> = BTreeMap::new();
    process_items(&collection.item, "", &mut paths, &mut warnings);

    Conversion {
        spec: OpenApiSpec {
            openapi: "3.0.3".to_string(),
            info: OpenApiInfo {
                title,
                description,
                version,
            },
            servers: vec![OpenApiServer {
                url: base_url,
                description: "Base URL (extracted from Postman collection)".to_string(),
            }],
            paths,
            components: OpenApiComponents::default(),
        },
        warnings,
    }
}

/// Replace `{{…}}` template tokens, then parse as an absolute URL.
fn parse_request_url(raw: &str) -> Result<Url, url::ParseError> {
    let substituted = TEMPLATE_TOKEN.replace_all(raw, TEMPLATE_PLACEHOLDER);
    Url::parse(&substituted)
}

/// `scheme://host[:port]`, with the port only when explicit and non-default,
/// matching how a browser reports `protocol` + `host`.
fn base_url_of(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}

/// Pre-order search for the first leaf whose URL parses to an absolute URL
/// with a host. The first success wins; a failure collects a diagnostic and
/// the search moves on to the next item.
fn extract_base_url(items: &[PostmanItem], warnings: &mut Vec<String>) -> Option<String> {
    for item in items {
        match &item.node {
            PostmanNode::Request { request } => {
                let Some(url) = &request.url else { continue };
                match parse_request_url(url.raw()) {
                    Ok(parsed) => {
                        if let Some(base) = base_url_of(&parsed) {
                            return Some(base);
                        }
                        warnings.push(format!(
                            "invalid URL in '{}': '{}' has no host",
                            item.name,
                            url.raw()
                        ));
                    }
                    Err(e) => {
                        warnings.push(format!("invalid URL in '{}': {}", item.name, e));
                    }
                }
            }
            PostmanNode::Folder { item: children } => {
                if let Some(base) = extract_base_url(children, warnings) {
                    return Some(base);
                }
            }
        }
    }
    None
}

/// Walk the item tree, extending `base_path` per folder and registering one
/// operation per leaf in the `paths` accumulator.
fn process_items(
    items: &[PostmanItem],
    base_path: &str,
    paths: &mut BTreeMap<String, BTreeMap<String, Operation>>,
    warnings: &mut Vec<String>,
) {
    for item in items {
        match &item.node {
            PostmanNode::Folder { item: children } => {
                let folder_path = format!("{}/{}", base_path, slug_segment(&item.name));
                process_items(children, &folder_path, paths, warnings);
            }
            PostmanNode::Request { request } => {
                let method = request.method.to_lowercase();

                // Name-derived fallback, replaced by the URL's path when it parses.
                let mut path = format!("/{}", slug_segment(&item.name));
                if let Some(url) = &request.url {
                    match parse_request_url(url.raw()) {
                        Ok(parsed) if !parsed.path().is_empty() => {
                            path = parsed.path().to_string();
                        }
                        Ok(_) => {}
                        Err(e) => {
                            warnings.push(format!("invalid URL in '{}': {}", item.name, e));
                        }
                    }
                }

                let full_path = format!("{}{}", base_path, path);
                let operation = build_operation(item, request, &method, &full_path);

                // Later leaves overwrite earlier ones at the same
                // (path, method) key; kept as-is from the source behavior.
                paths.entry(full_path).or_default().insert(method, operation);
            }
        }
    }
}

fn build_operation(
    item: &PostmanItem,
    request: &PostmanRequest,
    method: &str,
    full_path: &str,
) -> Operation {
    let description = item
        .description
        .clone()
        .or_else(|| request.description.clone())
        .unwrap_or_else(|| format!("{} {}", method.to_uppercase(), full_path));

    let mut responses = BTreeMap::new();
    responses.insert(
        "200".to_string(),
        ResponseObject {
            description: "Successful response".to_string(),
            content: Some(json!({
                "application/json": {
                    "schema": {
                        "type": "object",
                        "properties": {
                            "message": { "type": "string", "example": "Success" }
                        }
                    }
                }
            })),
        },
    );
    responses.insert(
        "400".to_string(),
        ResponseObject {
            description: "Bad request".to_string(),
            content: None,
        },
    );
    responses.insert(
        "500".to_string(),
        ResponseObject {
            description: "Internal server error".to_string(),
            content: None,
        },
    );

    // Only a structured URL carries query entries; an empty array still
    // yields an (empty) parameters list.
    let parameters = request.url.as_ref().and_then(|url| url.query()).map(|query| {
        query
            .iter()
            .map(|q| Parameter {
                name: q.key.clone(),
                location: "query".to_string(),
                required: false,
                schema: json!({ "type": "string", "example": q.value }),
            })
            .collect()
    });

    let request_body = if matches!(method, "post" | "put" | "patch") && request.body.is_some() {
        let example = request
            .body
            .as_ref()
            .and_then(|b| b.raw.as_deref())
            .unwrap_or("Request body data");
        Some(RequestBody {
            content: json!({
                "application/json": {
                    "schema": {
                        "type": "object",
                        "properties": {
                            "data": { "type": "string", "example": example }
                        }
                    }
                }
            }),
        })
    } else {
        None
    };

    Operation {
        summary: item.name.clone(),
        description,
        responses,
        parameters,
        request_body,
    }
}
