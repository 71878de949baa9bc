use serde_json::{Map, Value};

use super::node_path::NodePath;
use super::state::ViewState;
use crate::config::ViewConfig;
use crate::label::type_label;
use crate::pointer::{ref_name, reference_of, resolve_pointer};
use crate::resolve::{Marker, ResolutionPath};

/// One node of the presentation tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub path: NodePath,
    pub depth: usize,
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: NodeKind,
    /// Pretty JSON of the resolved subtree, present when toggled on
    pub raw_json: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A reference that closes a cycle on its descent path
    Circular { reference: String },
    /// A dangling or malformed reference
    Unresolved { reference: String, reason: String },
    Variants(VariantGroup),
    Object { properties: Vec<PropertyRow> },
    Array { label: String, items: Child },
    Enum { label: String, values: Vec<Value> },
    Scalar { label: String, format: Option<String> },
}

/// A nested node that was either expanded or held back by the depth ceiling
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Expanded(Box<TreeNode>),
    Collapsed {
        path: NodePath,
        raw_json: Option<String>,
    },
}

impl Child {
    pub fn path(&self) -> &NodePath {
        match self {
            Child::Expanded(node) => &node.path,
            Child::Collapsed { path, .. } => path,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        matches!(self, Child::Collapsed { .. })
    }

    pub fn as_node(&self) -> Option<&TreeNode> {
        match self {
            Child::Expanded(node) => Some(node),
            Child::Collapsed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKeyword {
    OneOf,
    AnyOf,
}

impl VariantKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKeyword::OneOf => "oneOf",
            VariantKeyword::AnyOf => "anyOf",
        }
    }
}

/// Alternatives of a `oneOf`/`anyOf` node; only the active one is built
#[derive(Debug, Clone, PartialEq)]
pub struct VariantGroup {
    pub keyword: VariantKeyword,
    pub options: Vec<String>,
    pub active: usize,
    pub body: Option<Child>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRow {
    pub name: String,
    pub path: NodePath,
    pub label: String,
    pub format: Option<String>,
    pub required: bool,
    pub nullable: bool,
    pub deprecated: bool,
    pub description: Option<String>,
    pub enum_values: Vec<Value>,
    /// Present only for complex properties
    pub child: Option<Child>,
}

/// Project a resolved schema into a presentation tree
///
/// `resolved` is DeepResolver output. `source` is the same node before
/// resolution, when available; it is only consulted for labels and variant
/// names, which resolution erases. Recursion into children happens only
/// while `depth < config.max_depth`.
pub fn build_tree(
    resolved: &Value,
    source: Option<&Value>,
    root: &Value,
    config: &ViewConfig,
    state: &ViewState,
) -> TreeNode {
    TreeBuilder {
        root,
        config,
        state,
    }
    .node(resolved, source, NodePath::root(), 0)
}

struct TreeBuilder<'a> {
    root: &'a Value,
    config: &'a ViewConfig,
    state: &'a ViewState,
}

impl<'a> TreeBuilder<'a> {
    fn node(
        &self,
        value: &Value,
        source: Option<&'a Value>,
        path: NodePath,
        depth: usize,
    ) -> TreeNode {
        let kind = self.kind(value, source, &path, depth);
        TreeNode {
            raw_json: self.raw(value, &path),
            title: str_field(value, "title"),
            description: str_field(value, "description"),
            path,
            depth,
            kind,
        }
    }

    fn kind(
        &self,
        value: &Value,
        source: Option<&'a Value>,
        path: &NodePath,
        depth: usize,
    ) -> NodeKind {
        if let Some(marker) = Marker::of(value) {
            return match marker {
                Marker::Circular { reference } => NodeKind::Circular {
                    reference: reference.to_string(),
                },
                Marker::Unresolved { reference, reason } => NodeKind::Unresolved {
                    reference: reference.to_string(),
                    reason: reason.to_string(),
                },
            };
        }

        if let Some((keyword, variants)) = variants_of(value) {
            return NodeKind::Variants(self.variants(keyword, variants, source, path, depth));
        }

        if let Some(properties) = object_properties(value) {
            return NodeKind::Object {
                properties: self.rows(value, properties, source, path, depth),
            };
        }

        if let Some(items) = array_items(value) {
            let items_source = self.source_child(source, "items");
            return NodeKind::Array {
                label: self.label(value, source),
                items: self.child(items, items_source, path.child("items"), depth),
            };
        }

        if let Some(values) = value.get("enum").and_then(Value::as_array) {
            return NodeKind::Enum {
                label: self.label(value, source),
                values: values.clone(),
            };
        }

        NodeKind::Scalar {
            label: self.label(value, source),
            format: str_field(value, "format"),
        }
    }

    fn child(
        &self,
        value: &Value,
        source: Option<&'a Value>,
        path: NodePath,
        depth: usize,
    ) -> Child {
        if depth < self.config.max_depth {
            Child::Expanded(Box::new(self.node(value, source, path, depth + 1)))
        } else {
            Child::Collapsed {
                raw_json: self.raw(value, &path),
                path,
            }
        }
    }

    fn variants(
        &self,
        keyword: VariantKeyword,
        variants: &[Value],
        source: Option<&'a Value>,
        path: &NodePath,
        depth: usize,
    ) -> VariantGroup {
        let source_variants = self
            .source_child(source, keyword.as_str())
            .and_then(Value::as_array);
        let source_at = |i: usize| source_variants.and_then(|s| s.get(i));

        let options = variants
            .iter()
            .enumerate()
            .map(|(i, variant)| variant_label(variant, source_at(i), i))
            .collect();

        // A stale selection from an earlier document falls back to the first
        let selected = self.state.active_variant(path);
        let active = if selected < variants.len() { selected } else { 0 };

        let body = variants.get(active).map(|variant| {
            let variant_path = path.child(keyword.as_str()).child(active.to_string());
            self.child(variant, source_at(active), variant_path, depth)
        });

        VariantGroup {
            keyword,
            options,
            active,
            body,
        }
    }

    fn rows(
        &self,
        value: &Value,
        properties: &Map<String, Value>,
        source: Option<&'a Value>,
        path: &NodePath,
        depth: usize,
    ) -> Vec<PropertyRow> {
        let required: Vec<&str> = value
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        let source_properties = self.source_child(source, "properties");

        properties
            .iter()
            .map(|(name, property)| {
                let property_source = source_properties.and_then(|s| s.get(name));
                let property_path = path.child("properties").child(name.clone());
                let complex = is_complex(property);

                PropertyRow {
                    name: name.clone(),
                    label: self.label(property, property_source),
                    format: str_field(property, "format"),
                    required: required.contains(&name.as_str()),
                    nullable: bool_field(property, "nullable"),
                    deprecated: bool_field(property, "deprecated"),
                    description: str_field(property, "description"),
                    enum_values: if complex {
                        Vec::new()
                    } else {
                        property
                            .get("enum")
                            .and_then(Value::as_array)
                            .cloned()
                            .unwrap_or_default()
                    },
                    child: complex.then(|| {
                        self.child(property, property_source, property_path.clone(), depth)
                    }),
                    path: property_path,
                }
            })
            .collect()
    }

    /// Label from the unresolved form when known, so references keep names
    fn label(&self, value: &Value, source: Option<&Value>) -> String {
        type_label(source.unwrap_or(value), self.root)
    }

    fn raw(&self, value: &Value, path: &NodePath) -> Option<String> {
        self.state.show_raw(path).then(|| pretty_json(value))
    }

    /// Child of the unresolved source, following references to reach it
    fn source_child(&self, source: Option<&'a Value>, key: &str) -> Option<&'a Value> {
        self.deref(source?)?.get(key)
    }

    fn deref(&self, mut node: &'a Value) -> Option<&'a Value> {
        let mut seen = ResolutionPath::new();
        while let Some(pointer) = reference_of(node) {
            if seen.contains(pointer) {
                return None;
            }
            seen = seen.extended(pointer);
            node = resolve_pointer(pointer, self.root)?;
        }
        Some(node)
    }
}

/// Variant label: its own title, else the name it was referenced by
fn variant_label(resolved: &Value, source: Option<&Value>, index: usize) -> String {
    if let Some(title) = str_field(resolved, "title") {
        return title;
    }
    let referenced = source
        .and_then(reference_of)
        .or_else(|| Marker::of(resolved).map(|m| m.reference()))
        .map(ref_name)
        .filter(|name| !name.is_empty());

    match referenced {
        Some(name) => name.to_string(),
        None => format!("Option {}", index + 1),
    }
}

fn variants_of(value: &Value) -> Option<(VariantKeyword, &[Value])> {
    [VariantKeyword::OneOf, VariantKeyword::AnyOf]
        .into_iter()
        .find_map(|keyword| {
            value
                .get(keyword.as_str())
                .and_then(Value::as_array)
                .map(|variants| (keyword, variants.as_slice()))
        })
}

/// Properties of an object schema; `type` may be omitted
fn object_properties(value: &Value) -> Option<&Map<String, Value>> {
    match value.get("type") {
        None => {}
        Some(ty) if ty.as_str() == Some("object") => {}
        Some(_) => return None,
    }
    value.get("properties")?.as_object()
}

fn array_items(value: &Value) -> Option<&Value> {
    if value.get("type").and_then(Value::as_str) != Some("array") {
        return None;
    }
    value.get("items")
}

/// Whether a property gets its own nested node
pub(crate) fn is_complex(value: &Value) -> bool {
    Marker::of(value).is_some()
        || variants_of(value).is_some()
        || object_properties(value).is_some()
        || array_items(value).is_some()
}

pub(crate) fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn bool_field(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}
