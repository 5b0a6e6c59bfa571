//! CLI regression tests for the `specdeck-server` binary.
//!
//! These tests invoke the binary as a subprocess to catch regressions in flag
//! names, exit codes, and output formats.

use std::io::Write;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::NamedTempFile;

/// Returns an assert_cmd Command wrapping the `specdeck-server` binary.
fn specdeck() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("specdeck-server").expect("specdeck-server binary not found")
}

/// Write fixture content into a temp file with the given suffix.
fn write_fixture(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp fixture");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

const PETSTORE_COLLECTION: &str = r#"{
  "info": {
    "name": "Petstore",
    "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
  },
  "item": [
    {
      "name": "Get Pet",
      "request": { "method": "GET", "url": "https://api.test.com/pets/1" }
    }
  ]
}"#;

const BROKEN_URL_COLLECTION: &str = r#"{
  "info": {
    "name": "Broken",
    "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
  },
  "item": [
    {
      "name": "Bad Call",
      "request": { "method": "GET", "url": "not a url" }
    }
  ]
}"#;

// ---------------------------------------------------------------------------
// specdeck-server convert
// ---------------------------------------------------------------------------

#[test]
fn convert_postman_collection_prints_openapi() {
    let file = write_fixture(".json", PETSTORE_COLLECTION);
    specdeck()
        .arg("convert")
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("\"openapi\": \"3.0.3\""))
        .stdout(contains("/pets/1"))
        .stdout(contains("https://api.test.com"));
}

#[test]
fn convert_openapi_passes_through() {
    let file = write_fixture(
        ".yaml",
        "openapi: \"3.1.0\"\ninfo:\n  title: Existing\n  version: \"1.0.0\"\npaths: {}\n",
    );
    specdeck()
        .arg("convert")
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("\"openapi\": \"3.1.0\""))
        .stdout(contains("Existing"));
}

#[test]
fn convert_yaml_output_format() {
    let file = write_fixture(".json", PETSTORE_COLLECTION);
    specdeck()
        .args(["convert", "--format", "yaml"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("openapi: 3.0.3"));
}

#[test]
fn convert_malformed_url_warns_but_succeeds() {
    let file = write_fixture(".json", BROKEN_URL_COLLECTION);
    specdeck()
        .arg("convert")
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("/bad-call"))
        .stderr(contains("invalid URL"));
}

#[test]
fn convert_unknown_extension_exits_one() {
    let file = write_fixture(".txt", "just some text");
    specdeck()
        .arg("convert")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unsupported file type"));
}

#[test]
fn convert_invalid_json_exits_one() {
    let file = write_fixture(".json", "{definitely not json");
    specdeck()
        .arg("convert")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("parse error"));
}

#[test]
fn convert_missing_file_exits_three() {
    specdeck()
        .args(["convert", "this-file-does-not-exist.json"])
        .assert()
        .failure()
        .code(3);
}
