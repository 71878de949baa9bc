use serde_json::Value;

use super::tree::{Child, NodeKind, PropertyRow, TreeNode, VariantGroup};

/// Render a presentation tree as a nested Markdown list
///
/// Each level is indented by two spaces. Raw JSON, when toggled on for a
/// node, follows that node's lines as a fenced `json` block.
pub fn render_markdown(node: &TreeNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &TreeNode, indent: usize) {
    match &node.kind {
        NodeKind::Circular { reference } => {
            line(out, indent, &format!("_circular reference to `{}`_", reference));
        }
        NodeKind::Unresolved { reference, reason } => {
            line(out, indent, &format!("**unresolved** `{}`: {}", reference, reason));
        }
        NodeKind::Variants(group) => write_variants(out, group, indent),
        NodeKind::Object { properties } => {
            if properties.is_empty() {
                line(out, indent, "_no properties_");
            }
            for row in properties {
                write_row(out, row, indent);
            }
        }
        NodeKind::Array { label, items } => {
            line(out, indent, &format!("`{}` items:", label));
            write_child(out, items, indent + 1);
        }
        NodeKind::Enum { label, values } => {
            line(out, indent, &format!("`{}`: {}", label, literals(values)));
        }
        NodeKind::Scalar { label, format } => match format {
            Some(format) => line(out, indent, &format!("`{}` ({})", label, format)),
            None => line(out, indent, &format!("`{}`", label)),
        },
    }

    if let Some(raw) = &node.raw_json {
        fenced(out, indent, raw);
    }
}

fn write_variants(out: &mut String, group: &VariantGroup, indent: usize) {
    let options: Vec<String> = group
        .options
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == group.active {
                format!("**[{}]**", name)
            } else {
                name.clone()
            }
        })
        .collect();

    if options.is_empty() {
        line(out, indent, &format!("**{}**: _no variants_", group.keyword.as_str()));
        return;
    }
    line(
        out,
        indent,
        &format!("**{}**: {}", group.keyword.as_str(), options.join(" | ")),
    );
    if let Some(body) = &group.body {
        write_child(out, body, indent + 1);
    }
}

fn write_row(out: &mut String, row: &PropertyRow, indent: usize) {
    let mut text = format!("**{}** `{}`", row.name, row.label);
    if let Some(format) = &row.format {
        text.push_str(&format!(" ({})", format));
    }
    if row.required {
        text.push_str(" _required_");
    }
    if row.nullable {
        text.push_str(" _nullable_");
    }
    if row.deprecated {
        text.push_str(" ~~deprecated~~");
    }
    if !row.enum_values.is_empty() {
        text.push_str(&format!(": {}", literals(&row.enum_values)));
    }
    if let Some(description) = &row.description {
        text.push_str(&format!(" - {}", description));
    }
    line(out, indent, &text);

    if let Some(child) = &row.child {
        write_child(out, child, indent + 1);
    }
}

fn write_child(out: &mut String, child: &Child, indent: usize) {
    match child {
        Child::Expanded(node) => write_node(out, node, indent),
        Child::Collapsed { path, raw_json } => {
            line(
                out,
                indent,
                &format!("_depth limit reached; raw JSON available at `{}`_", path),
            );
            if let Some(raw) = raw_json {
                fenced(out, indent, raw);
            }
        }
    }
}

fn literals(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| format!("`{}`", v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string())))
        .collect::<Vec<_>>()
        .join(", ")
}

fn line(out: &mut String, indent: usize, text: &str) {
    out.push_str(&"  ".repeat(indent));
    out.push_str("- ");
    out.push_str(text);
    out.push('\n');
}

fn fenced(out: &mut String, indent: usize, body: &str) {
    let pad = "  ".repeat(indent + 1);
    out.push_str(&format!("{}```json\n", pad));
    for text in body.lines() {
        out.push_str(&pad);
        out.push_str(text);
        out.push('\n');
    }
    out.push_str(&format!("{}```\n", pad));
}
