#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{petstore, schema_ref};
use refscope_core::label::{type_label, LABEL_INVALID_SCHEMA, LABEL_UNRESOLVED_REF};
use serde_json::json;

#[test]
fn test_labels_for_named_schemas() {
    let root = petstore();

    assert_eq!(type_label(&schema_ref("Pet"), &root), "object");
    assert_eq!(type_label(&schema_ref("Status"), &root), "string (enum)");
    assert_eq!(type_label(&schema_ref("Animal"), &root), "object");
}

#[test]
fn test_array_of_named_schema() {
    let root = petstore();
    let schema = json!({"type": "array", "items": schema_ref("Pet")});

    assert_eq!(type_label(&schema, &root), "array[Pet]");
}

#[test]
fn test_dangling_reference() {
    let root = petstore();

    assert_eq!(type_label(&schema_ref("Missing"), &root), LABEL_UNRESOLVED_REF);
}

#[test]
fn test_reference_to_reference_is_not_followed() {
    let root = petstore();

    assert_eq!(type_label(&schema_ref("Alias"), &root), "Reference (Alias)");
}

#[test]
fn test_self_referencing_schema_labels_without_looping() {
    let root = petstore();

    assert_eq!(type_label(&schema_ref("Node"), &root), "object");
    assert_eq!(type_label(&schema_ref("Category"), &root), "object");
}

#[test]
fn test_non_object_inputs() {
    let root = petstore();

    assert_eq!(type_label(&json!(null), &root), LABEL_INVALID_SCHEMA);
    assert_eq!(type_label(&json!("string"), &root), LABEL_INVALID_SCHEMA);
    assert_eq!(type_label(&json!([1, 2]), &root), LABEL_INVALID_SCHEMA);
}

#[test]
fn test_enum_without_type_defaults_to_string() {
    let root = json!({});

    assert_eq!(type_label(&json!({"enum": [1, 2]}), &root), "string (enum)");
    assert_eq!(
        type_label(&json!({"type": "integer", "enum": [1, 2]}), &root),
        "integer (enum)"
    );
}

#[test]
fn test_multi_type() {
    let root = json!({});

    assert_eq!(
        type_label(&json!({"type": ["string", "null"]}), &root),
        "string | null"
    );
}

#[test]
fn test_label_is_never_empty() {
    let root = petstore();
    let schemas = root["components"]["schemas"].as_object().unwrap();

    for schema in schemas.values() {
        assert!(!type_label(schema, &root).is_empty());
    }
    for name in schemas.keys() {
        assert!(!type_label(&schema_ref(name), &root).is_empty());
    }

    // Blank type names count as missing
    for schema in [json!({"type": ""}), json!({"type": [""]}), json!({"type": ["", ""]})] {
        assert_eq!(type_label(&schema, &root), "object");
    }
}
