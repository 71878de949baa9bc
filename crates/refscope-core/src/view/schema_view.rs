use serde_json::{json, Value};

use super::node_path::NodePath;
use super::render::render_markdown;
use super::state::ViewState;
use super::tree::{build_tree, pretty_json, TreeNode};
use crate::config::ViewConfig;
use crate::document::{node_at, ROOT_POINTER};
use crate::errors::{RefscopeError, Result};
use crate::label::type_label;
use crate::pointer::{ref_name, reference_of};
use crate::resolve::{resolve_deep_with_stats, ResolveStats};
use crate::{log_op_end, log_op_start};

/// Interactive view of one schema node
///
/// The node is resolved once, on construction. Everything after that
/// (variant selection, raw JSON toggles, tree projection, rendering) works
/// on the stored result and never resolves again. Build a new view when the
/// document or the node being viewed changes.
#[derive(Debug, Clone)]
pub struct SchemaView<'r> {
    root: &'r Value,
    source: Value,
    resolved: Value,
    stats: ResolveStats,
    config: ViewConfig,
    state: ViewState,
}

impl<'r> SchemaView<'r> {
    /// View an arbitrary node of `root`, which may itself be a reference
    pub fn new(node: &Value, root: &'r Value, config: ViewConfig) -> Self {
        log_op_start!("schema_view", max_depth = config.max_depth);
        let start = std::time::Instant::now();

        let (resolved, stats) = resolve_deep_with_stats(node, root);

        let elapsed = start.elapsed().as_millis() as u64;
        log_op_end!(
            "schema_view",
            duration_ms = elapsed,
            refs_followed = stats.refs_followed,
            circular = stats.circular,
            unresolved = stats.unresolved
        );

        Self {
            root,
            source: node.clone(),
            resolved,
            stats,
            config,
            state: ViewState::new(),
        }
    }

    /// View the node a pointer addresses
    ///
    /// The pointer is followed as a reference, so it counts as the first
    /// step of every descent path: a schema that refers back to itself is
    /// marked circular at its first nested occurrence.
    ///
    /// # Errors
    /// * `InvalidPointer` - If the pointer is malformed
    /// * `NodeNotFound` - If nothing exists at the pointer
    pub fn at_pointer(root: &'r Value, pointer: &str, config: ViewConfig) -> Result<Self> {
        let node = node_at(root, pointer)?;
        if pointer == ROOT_POINTER {
            return Ok(Self::new(node, root, config));
        }
        Ok(Self::new(&json!({ "$ref": pointer }), root, config))
    }

    pub fn root(&self) -> &Value {
        self.root
    }

    /// The node as given, before resolution
    pub fn source(&self) -> &Value {
        &self.source
    }

    /// The fully materialized node
    pub fn resolved(&self) -> &Value {
        &self.resolved
    }

    pub fn stats(&self) -> ResolveStats {
        self.stats
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Heading for the view: the referenced name, else the schema title
    pub fn title(&self) -> Option<String> {
        reference_of(&self.source)
            .map(ref_name)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| {
                self.resolved
                    .get("title")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
    }

    /// Compact label of the viewed node
    pub fn label(&self) -> String {
        type_label(&self.source, self.root)
    }

    /// Make variant `index` the active one under the node at `path`
    ///
    /// # Errors
    /// * `UnknownNodePath` - If `path` addresses nothing
    /// * `NotAVariantNode` - If the node has no `oneOf`/`anyOf`
    /// * `VariantOutOfRange` - If `index` is past the last variant
    pub fn select_variant(&mut self, path: &NodePath, index: usize) -> Result<()> {
        let node = self.lookup(path)?;
        let count = ["oneOf", "anyOf"]
            .iter()
            .find_map(|k| node.get(*k).and_then(Value::as_array))
            .map(Vec::len)
            .ok_or_else(|| RefscopeError::NotAVariantNode {
                path: path.to_string(),
            })?;

        if index >= count {
            return Err(RefscopeError::VariantOutOfRange {
                path: path.to_string(),
                index,
                count,
            });
        }
        self.state.set_active_variant(path.clone(), index);
        Ok(())
    }

    /// Flip the raw JSON toggle at `path`, returning the new setting
    ///
    /// # Errors
    /// * `UnknownNodePath` - If `path` addresses nothing
    pub fn toggle_raw(&mut self, path: &NodePath) -> Result<bool> {
        self.lookup(path)?;
        Ok(self.state.toggle_raw(path.clone()))
    }

    /// Pretty JSON of the resolved subtree at `path`
    ///
    /// Available for any node, including ones the depth ceiling keeps
    /// collapsed in the tree.
    ///
    /// # Errors
    /// * `UnknownNodePath` - If `path` addresses nothing
    pub fn raw_json(&self, path: &NodePath) -> Result<String> {
        self.lookup(path).map(pretty_json)
    }

    /// Project the presentation tree for the current state
    pub fn tree(&self) -> TreeNode {
        build_tree(
            &self.resolved,
            Some(&self.source),
            self.root,
            &self.config,
            &self.state,
        )
    }

    /// Render the view as Markdown, headed by its title and label
    pub fn render_markdown(&self) -> String {
        let tree = self.tree();
        let mut out = String::new();

        if let Some(title) = self.title() {
            out.push_str(&format!("## {}\n\n", title));
        }
        out.push_str(&format!("`{}`\n\n", self.label()));
        if let Some(description) = &tree.description {
            out.push_str(&format!("{}\n\n", description));
        }
        out.push_str(&render_markdown(&tree));
        out
    }

    fn lookup(&self, path: &NodePath) -> Result<&Value> {
        path.lookup(&self.resolved)
            .ok_or_else(|| RefscopeError::UnknownNodePath {
                path: path.to_string(),
            })
    }
}
