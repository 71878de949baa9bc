#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::petstore;
use refscope_core::catalog::{
    list_operations, operation_summary, render_operation_list, render_operation_summary,
    render_schema_catalog, schema_catalog,
};
use refscope_core::errors::RefscopeError;

#[test]
fn test_schema_catalog_rows() {
    let root = petstore();
    let rows = schema_catalog(&root);

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names[0], "Pet");
    assert_eq!(names.len(), 11);

    let pet = &rows[0];
    assert_eq!(pet.label, "object");
    assert_eq!(pet.property_count, 5);
    assert_eq!(pet.required_count, 2);
    assert_eq!(pet.description.as_deref(), Some("A pet"));

    let status = rows.iter().find(|r| r.name == "Status").unwrap();
    assert_eq!(status.label, "string (enum)");
    assert_eq!(status.property_count, 0);

    // Alias is one hop away from Pet
    let alias = rows.iter().find(|r| r.name == "Alias").unwrap();
    assert_eq!(alias.label, "object");
    assert_eq!(alias.property_count, 5);
}

#[test]
fn test_list_operations_in_document_order() {
    let root = petstore();
    let ops = list_operations(&root);

    let keys: Vec<(&str, &str)> = ops
        .iter()
        .map(|o| (o.method.as_str(), o.path.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![("get", "/pets"), ("post", "/pets"), ("get", "/pets/{petId}")]
    );
    assert_eq!(ops[0].operation_id.as_deref(), Some("listPets"));
    assert!(ops[2].deprecated);
}

#[test]
fn test_operation_summary_parameters() {
    let root = petstore();
    let summary = operation_summary(&root, "/pets", "GET").unwrap();

    let params: Vec<(&str, &str, &str)> = summary
        .parameters
        .iter()
        .map(|p| (p.name.as_str(), p.location.as_str(), p.label.as_str()))
        .collect();
    assert_eq!(
        params,
        vec![
            ("X-Trace", "header", "string"),
            ("limit", "query", "integer"),
            ("status", "query", "string (enum)"),
        ]
    );
    assert_eq!(
        summary.parameters[1].description.as_deref(),
        Some("How many items to return")
    );
}

#[test]
fn test_operation_summary_responses() {
    let root = petstore();
    let summary = operation_summary(&root, "/pets", "get").unwrap();

    assert_eq!(summary.responses.len(), 2);
    let ok = &summary.responses[0];
    assert_eq!(ok.status, "200");
    assert_eq!(ok.content[0].media_type, "application/json");
    assert_eq!(ok.content[0].label, "array[Pet]");

    let fallback = &summary.responses[1];
    assert_eq!(fallback.status, "default");
    assert_eq!(fallback.description.as_deref(), Some("Unexpected error"));
    assert_eq!(fallback.content[0].label, "object");
}

#[test]
fn test_operation_summary_request_body() {
    let root = petstore();
    let summary = operation_summary(&root, "/pets", "post").unwrap();

    assert!(summary.request_body_required);
    assert_eq!(summary.request_body.len(), 1);
    assert_eq!(summary.request_body[0].label, "object");
}

#[test]
fn test_operation_not_found() {
    let root = petstore();

    assert!(matches!(
        operation_summary(&root, "/pets", "delete"),
        Err(RefscopeError::OperationNotFound { .. })
    ));
    assert!(matches!(
        operation_summary(&root, "/owners", "get"),
        Err(RefscopeError::OperationNotFound { .. })
    ));
    // Path-item keys that are not methods are not operations
    assert!(matches!(
        operation_summary(&root, "/pets", "parameters"),
        Err(RefscopeError::OperationNotFound { .. })
    ));
}

#[test]
fn test_markdown_tables() {
    let root = petstore();

    let schemas = render_schema_catalog(&schema_catalog(&root));
    assert!(schemas.starts_with("| Schema | Type | Properties | Required | Description |\n"));
    assert!(schemas.contains("| Pet | `object` | 5 | 2 | A pet |\n"));

    let ops = render_operation_list(&list_operations(&root));
    assert!(ops.contains("| GET | `/pets` | listPets | List all pets |\n"));

    let summary = render_operation_summary(&operation_summary(&root, "/pets", "get").unwrap());
    assert!(summary.starts_with("## GET /pets\n\nList all pets\n\n"));
    assert!(summary.contains("| limit | query | `integer` | no | How many items to return |\n"));
    assert!(summary.contains("- **200** A list of pets\n  - `application/json`: `array[Pet]`\n"));
}

#[test]
fn test_summary_serializes() {
    let root = petstore();
    let summary = operation_summary(&root, "/pets/{petId}", "get").unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["operation"]["operation_id"], "showPet");
    assert_eq!(json["parameters"][0]["required"], true);
}
