//! Compact type labels for tables and badges
//!
//! A label is a one-hop summary of a schema: it follows at most one pointer
//! and never materializes the full graph, so it is cheap enough to compute
//! for every row of a list view.

use serde_json::Value;

use crate::pointer::{ref_name, reference_of, resolve_pointer};

pub const LABEL_INVALID_SCHEMA: &str = "unknown (invalid schema)";
pub const LABEL_UNRESOLVED_REF: &str = "unknown (unresolved ref)";
pub const LABEL_UNKNOWN_ITEMS: &str = "unknown_item_format";

/// Produce a short human-readable type label for a schema or reference
///
/// | input                                   | label                  |
/// |-----------------------------------------|------------------------|
/// | `{type: string, enum: [..]}`            | `string (enum)`        |
/// | `{type: array, items: {$ref: ../User}}` | `array[User]`          |
/// | `{type: array, items: {type: integer}}` | `array[integer]`       |
/// | `{properties: {..}}`                    | `object`               |
/// | `{$ref: <dangling>}`                    | `unknown (unresolved ref)` |
///
/// A reference whose target is itself a reference is not followed further
/// and is labelled `Reference (<name>)`. The result is never empty.
pub fn type_label(schema: &Value, root: &Value) -> String {
    let Some(obj) = schema.as_object() else {
        return LABEL_INVALID_SCHEMA.to_string();
    };

    let node = match reference_of(schema) {
        Some(pointer) => match resolve_pointer(pointer, root) {
            None => return LABEL_UNRESOLVED_REF.to_string(),
            Some(target) if reference_of(target).is_some() => {
                return reference_label(pointer);
            }
            Some(target) => match target.as_object() {
                Some(target) => target,
                None => return LABEL_INVALID_SCHEMA.to_string(),
            },
        },
        None => obj,
    };

    let declared = node.get("type").and_then(type_name);

    if node.contains_key("enum") {
        return format!("{} (enum)", declared.as_deref().unwrap_or("string"));
    }

    match declared.as_deref() {
        Some("array") => format!("array[{}]", items_label(node.get("items"))),
        Some(ty) => ty.to_string(),
        None => "object".to_string(),
    }
}

/// Label for the element type of an array schema
fn items_label(items: Option<&Value>) -> String {
    let Some(items) = items else {
        return LABEL_UNKNOWN_ITEMS.to_string();
    };
    if let Some(pointer) = reference_of(items) {
        let name = ref_name(pointer);
        if !name.is_empty() {
            return name.to_string();
        }
    }
    items
        .get("type")
        .and_then(type_name)
        .unwrap_or_else(|| LABEL_UNKNOWN_ITEMS.to_string())
}

fn reference_label(pointer: &str) -> String {
    match ref_name(pointer) {
        "" => LABEL_UNRESOLVED_REF.to_string(),
        name => format!("Reference ({})", name),
    }
}

/// `type` may be a single name or, in OpenAPI 3.1, a list of names
fn type_name(ty: &Value) -> Option<String> {
    match ty {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(names) => {
            let names: Vec<&str> = names
                .iter()
                .filter_map(Value::as_str)
                .filter(|name| !name.is_empty())
                .collect();
            (!names.is_empty()).then(|| names.join(" | "))
        }
        _ => None,
    }
}
