//! Table summaries of a document
//!
//! List views never materialize schemas: every row is built from one-hop
//! type labels, which keeps them cheap on documents with large or recursive
//! schema graphs.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{RefscopeError, Result};
use crate::label::{type_label, LABEL_UNRESOLVED_REF};
use crate::pointer::{ref_name, reference_of, resolve_pointer};
use crate::{log_op_end, log_op_error, log_op_start};

/// Methods recognised as operations inside a path item
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaRow {
    pub name: String,
    pub label: String,
    pub property_count: usize,
    pub required_count: usize,
    pub deprecated: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationRef {
    pub method: String,
    pub path: String,
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub deprecated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRow {
    pub name: String,
    pub location: String,
    pub required: bool,
    pub deprecated: bool,
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRow {
    pub media_type: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseRow {
    pub status: String,
    pub description: Option<String>,
    pub content: Vec<ContentRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationSummary {
    pub operation: OperationRef,
    pub parameters: Vec<ParameterRow>,
    pub request_body: Vec<ContentRow>,
    pub request_body_required: bool,
    pub responses: Vec<ResponseRow>,
}

/// One row per entry of `components.schemas`, in document order
pub fn schema_catalog(root: &Value) -> Vec<SchemaRow> {
    log_op_start!("schema_catalog");
    let start = std::time::Instant::now();

    let rows: Vec<SchemaRow> = root
        .pointer("/components/schemas")
        .and_then(Value::as_object)
        .map(|schemas| {
            schemas
                .iter()
                .map(|(name, schema)| schema_row(name, schema, root))
                .collect()
        })
        .unwrap_or_default();

    let elapsed = start.elapsed().as_millis() as u64;
    log_op_end!("schema_catalog", duration_ms = elapsed, rows = rows.len());
    rows
}

fn schema_row(name: &str, schema: &Value, root: &Value) -> SchemaRow {
    let node = one_hop(schema, root).unwrap_or(schema);
    SchemaRow {
        name: name.to_string(),
        label: type_label(schema, root),
        property_count: node
            .get("properties")
            .and_then(Value::as_object)
            .map_or(0, Map::len),
        required_count: node
            .get("required")
            .and_then(Value::as_array)
            .map_or(0, Vec::len),
        deprecated: bool_field(node, "deprecated"),
        description: str_field(node, "description"),
    }
}

/// Every operation under `paths`, in document order
pub fn list_operations(root: &Value) -> Vec<OperationRef> {
    let Some(paths) = root.get("paths").and_then(Value::as_object) else {
        return Vec::new();
    };

    paths
        .iter()
        .flat_map(|(path, item)| {
            item.as_object()
                .into_iter()
                .flat_map(|item| item.iter())
                .filter(|(method, _)| HTTP_METHODS.contains(&method.as_str()))
                .map(move |(method, operation)| operation_ref(path, method, operation))
        })
        .collect()
}

fn operation_ref(path: &str, method: &str, operation: &Value) -> OperationRef {
    OperationRef {
        method: method.to_string(),
        path: path.to_string(),
        operation_id: str_field(operation, "operationId"),
        summary: str_field(operation, "summary"),
        deprecated: bool_field(operation, "deprecated"),
    }
}

/// Parameters, request body and responses of one operation
///
/// Parameters declared on the path item are merged with the operation's
/// own; an operation parameter with the same name and location replaces
/// the path-level one.
///
/// # Errors
/// * `OperationNotFound` - If the path or method is absent
pub fn operation_summary(root: &Value, path: &str, method: &str) -> Result<OperationSummary> {
    log_op_start!("operation_summary", path = path, method = method);
    let start = std::time::Instant::now();

    let result = (|| -> Result<OperationSummary> {
        let method = method.to_ascii_lowercase();
        let item = root
            .get("paths")
            .and_then(|paths| paths.get(path))
            .and_then(|item| one_hop(item, root));
        let operation = item
            .and_then(|item| item.get(&method))
            .filter(|_| HTTP_METHODS.contains(&method.as_str()))
            .ok_or_else(|| RefscopeError::OperationNotFound {
                path: path.to_string(),
                method: method.clone(),
            })?;

        let mut parameters: Vec<ParameterRow> = Vec::new();
        let declared = [item.and_then(|i| i.get("parameters")), operation.get("parameters")];
        for list in declared.into_iter().flatten().filter_map(Value::as_array) {
            for parameter in list {
                let row = parameter_row(parameter, root);
                match parameters
                    .iter_mut()
                    .find(|p| p.name == row.name && p.location == row.location)
                {
                    Some(existing) => *existing = row,
                    None => parameters.push(row),
                }
            }
        }

        let body = operation
            .get("requestBody")
            .and_then(|body| one_hop(body, root));

        let responses = operation
            .get("responses")
            .and_then(Value::as_object)
            .map(|responses| {
                responses
                    .iter()
                    .map(|(status, response)| response_row(status, response, root))
                    .collect()
            })
            .unwrap_or_default();

        Ok(OperationSummary {
            operation: operation_ref(path, &method, operation),
            parameters,
            request_body: body.map(|b| content_rows(b, root)).unwrap_or_default(),
            request_body_required: body.map_or(false, |b| bool_field(b, "required")),
            responses,
        })
    })();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!("operation_summary", duration_ms = elapsed);
        }
        Err(e) => {
            log_op_error!("operation_summary", e.clone(), duration_ms = elapsed);
        }
    }
    result
}

fn parameter_row(parameter: &Value, root: &Value) -> ParameterRow {
    let Some(node) = one_hop(parameter, root) else {
        let name = reference_of(parameter).map(ref_name).unwrap_or_default();
        return ParameterRow {
            name: name.to_string(),
            location: String::new(),
            required: false,
            deprecated: false,
            label: LABEL_UNRESOLVED_REF.to_string(),
            description: None,
        };
    };

    // A parameter carries either a schema or a single-entry content map
    let schema = node.get("schema").or_else(|| {
        node.get("content")
            .and_then(Value::as_object)
            .and_then(|content| content.values().next())
            .and_then(|media| media.get("schema"))
    });

    ParameterRow {
        name: str_field(node, "name").unwrap_or_default(),
        location: str_field(node, "in").unwrap_or_default(),
        required: bool_field(node, "required"),
        deprecated: bool_field(node, "deprecated"),
        label: type_label(schema.unwrap_or(&Value::Null), root),
        description: str_field(node, "description"),
    }
}

fn response_row(status: &str, response: &Value, root: &Value) -> ResponseRow {
    match one_hop(response, root) {
        Some(node) => ResponseRow {
            status: status.to_string(),
            description: str_field(node, "description"),
            content: content_rows(node, root),
        },
        None => ResponseRow {
            status: status.to_string(),
            description: Some(LABEL_UNRESOLVED_REF.to_string()),
            content: Vec::new(),
        },
    }
}

fn content_rows(node: &Value, root: &Value) -> Vec<ContentRow> {
    node.get("content")
        .and_then(Value::as_object)
        .map(|content| {
            content
                .iter()
                .map(|(media_type, media)| ContentRow {
                    media_type: media_type.clone(),
                    label: type_label(media.get("schema").unwrap_or(&Value::Null), root),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Render schema rows as a Markdown table
pub fn render_schema_catalog(rows: &[SchemaRow]) -> String {
    let mut out = String::from("| Schema | Type | Properties | Required | Description |\n");
    out.push_str("|---|---|---|---|---|\n");
    for row in rows {
        let name = if row.deprecated {
            format!("~~{}~~", row.name)
        } else {
            row.name.clone()
        };
        out.push_str(&format!(
            "| {} | `{}` | {} | {} | {} |\n",
            name,
            row.label,
            row.property_count,
            row.required_count,
            cell(row.description.as_deref())
        ));
    }
    out
}

/// Render the operation list as a Markdown table
pub fn render_operation_list(operations: &[OperationRef]) -> String {
    let mut out = String::from("| Method | Path | Operation | Summary |\n");
    out.push_str("|---|---|---|---|\n");
    for op in operations {
        out.push_str(&format!(
            "| {} | `{}` | {} | {} |\n",
            op.method.to_ascii_uppercase(),
            op.path,
            cell(op.operation_id.as_deref()),
            cell(op.summary.as_deref())
        ));
    }
    out
}

/// Render an operation summary as Markdown sections
pub fn render_operation_summary(summary: &OperationSummary) -> String {
    let op = &summary.operation;
    let mut out = format!("## {} {}\n\n", op.method.to_ascii_uppercase(), op.path);
    if let Some(text) = &op.summary {
        out.push_str(&format!("{}\n\n", text));
    }
    if op.deprecated {
        out.push_str("**Deprecated**\n\n");
    }

    if !summary.parameters.is_empty() {
        out.push_str("### Parameters\n\n| Name | In | Type | Required | Description |\n");
        out.push_str("|---|---|---|---|---|\n");
        for p in &summary.parameters {
            out.push_str(&format!(
                "| {} | {} | `{}` | {} | {} |\n",
                p.name,
                p.location,
                p.label,
                if p.required { "yes" } else { "no" },
                cell(p.description.as_deref())
            ));
        }
        out.push('\n');
    }

    if !summary.request_body.is_empty() {
        let required = if summary.request_body_required {
            " (required)"
        } else {
            ""
        };
        out.push_str(&format!("### Request body{}\n\n", required));
        for c in &summary.request_body {
            out.push_str(&format!("- `{}`: `{}`\n", c.media_type, c.label));
        }
        out.push('\n');
    }

    if !summary.responses.is_empty() {
        out.push_str("### Responses\n\n");
        for r in &summary.responses {
            out.push_str(&format!("- **{}** {}\n", r.status, cell(r.description.as_deref())));
            for c in &r.content {
                out.push_str(&format!("  - `{}`: `{}`\n", c.media_type, c.label));
            }
        }
        out.push('\n');
    }

    out
}

/// Follow at most one reference; `None` when that reference dangles
fn one_hop<'a>(node: &'a Value, root: &'a Value) -> Option<&'a Value> {
    match reference_of(node) {
        Some(pointer) => resolve_pointer(pointer, root),
        None => Some(node),
    }
}

fn cell(text: Option<&str>) -> String {
    text.map(|t| t.replace('|', "\\|").replace('\n', " "))
        .unwrap_or_default()
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn bool_field(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}
