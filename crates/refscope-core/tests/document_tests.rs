#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;

use refscope_core::document::{load_document, node_at, ROOT_POINTER};
use refscope_core::errors::RefscopeError;
use refscope_core::resolve::resolve_deep;
use serde_json::json;
use tempfile::Builder;

const YAML_DOC: &str = r##"openapi: 3.0.3
info:
  title: Tiny
  version: "1"
components:
  schemas:
    Tree:
      type: object
      properties:
        label:
          type: string
        children:
          type: array
          items:
            $ref: "#/components/schemas/Tree"
"##;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_yaml_and_resolve() {
    let file = write_temp(".yaml", YAML_DOC);
    let root = load_document(file.path()).unwrap();

    let tree = resolve_deep(&json!({"$ref": "#/components/schemas/Tree"}), &root);
    assert_eq!(
        tree["properties"]["children"]["items"],
        json!({"$ref": "#/components/schemas/Tree", "circular": true})
    );
}

#[test]
fn test_load_json_by_extension() {
    let file = write_temp(".json", r#"{"components": {"schemas": {"A": {"type": "string"}}}}"#);
    let root = load_document(file.path()).unwrap();

    assert_eq!(node_at(&root, "#/components/schemas/A").unwrap(), &json!({"type": "string"}));
    assert_eq!(node_at(&root, ROOT_POINTER).unwrap(), &root);
}

#[test]
fn test_load_without_extension_detects_format() {
    let file = write_temp("", YAML_DOC);
    let root = load_document(file.path()).unwrap();

    assert_eq!(root["info"]["title"], "Tiny");
}

#[test]
fn test_load_errors() {
    let bad = write_temp(".json", "{ not json");
    assert!(matches!(
        load_document(bad.path()),
        Err(RefscopeError::DocumentParse { .. })
    ));

    let unsupported = write_temp(".toml", "a = 1");
    assert!(matches!(
        load_document(unsupported.path()),
        Err(RefscopeError::UnsupportedFormat { .. })
    ));

    assert!(matches!(
        load_document(std::path::Path::new("/definitely/not/here.yaml")),
        Err(RefscopeError::Io { .. })
    ));
}
