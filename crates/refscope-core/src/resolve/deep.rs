use serde_json::{Map, Value};

use super::outcome::{Resolution, ResolveStats, UNRESOLVED_REASON};
use super::path::ResolutionPath;
use crate::pointer::{resolve_pointer, REF_KEY};

/// Fully materialize `value` against `root`
///
/// Every reference node is replaced in place by its resolved target, by a
/// circular marker (`{...ref, circular: true}`) when its pointer already
/// occurs on the current descent path, or by an error marker
/// (`{...ref, error: "Could not resolve reference"}`) when the pointer is
/// dangling or malformed. Values without references come back structurally
/// equal to the input.
///
/// Shared targets are recomputed once per path that reaches them; there is
/// no memoization across branches.
///
/// # Example
///
/// ```
/// use refscope_core::resolve::resolve_deep;
/// use serde_json::json;
///
/// let root = json!({"A": {"$ref": "#/A"}});
/// let resolved = resolve_deep(&json!({"$ref": "#/A"}), &root);
/// assert_eq!(resolved, json!({"$ref": "#/A", "circular": true}));
/// ```
pub fn resolve_deep(value: &Value, root: &Value) -> Value {
    resolve_deep_from(value, root, &ResolutionPath::new())
}

/// Like [`resolve_deep`], starting from an existing descent path
///
/// Pointers already in `path` are treated as ancestors: meeting one of them
/// yields a circular marker.
pub fn resolve_deep_from(value: &Value, root: &Value, path: &ResolutionPath) -> Value {
    Walker::new(root).walk(value, path)
}

/// Like [`resolve_deep`], also reporting what the pass encountered
pub fn resolve_deep_with_stats(value: &Value, root: &Value) -> (Value, ResolveStats) {
    let mut walker = Walker::new(root);
    let resolved = walker.walk(value, &ResolutionPath::new());
    (resolved, walker.stats)
}

/// Follow one pointer from `path` and materialize its target
///
/// The target itself is resolved deeply with `path` extended by `pointer`.
pub fn resolve_reference(pointer: &str, root: &Value, path: &ResolutionPath) -> Resolution {
    Walker::new(root).follow(pointer, path)
}

struct Walker<'a> {
    root: &'a Value,
    stats: ResolveStats,
}

impl<'a> Walker<'a> {
    fn new(root: &'a Value) -> Self {
        Self {
            root,
            stats: ResolveStats::default(),
        }
    }

    fn walk(&mut self, value: &Value, path: &ResolutionPath) -> Value {
        match value {
            Value::Object(obj) => match obj.get(REF_KEY).and_then(Value::as_str) {
                Some(pointer) => self.follow(pointer, path).into_value(obj),
                None => Value::Object(self.walk_object(obj, path)),
            },
            // Each element sees the caller's path, never a sibling's
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.walk(item, path)).collect())
            }
            scalar => scalar.clone(),
        }
    }

    fn walk_object(&mut self, obj: &Map<String, Value>, path: &ResolutionPath) -> Map<String, Value> {
        obj.iter()
            .map(|(key, child)| (key.clone(), self.walk(child, path)))
            .collect()
    }

    fn follow(&mut self, pointer: &str, path: &ResolutionPath) -> Resolution {
        if path.contains(pointer) {
            self.stats.circular += 1;
            tracing::debug!(pointer, chain = %path, "circular reference");
            return Resolution::Circular {
                reference: pointer.to_string(),
            };
        }

        let Some(target) = resolve_pointer(pointer, self.root) else {
            self.stats.unresolved += 1;
            tracing::debug!(pointer, "unresolved reference");
            return Resolution::Unresolved {
                reference: pointer.to_string(),
                reason: UNRESOLVED_REASON.to_string(),
            };
        };

        self.stats.refs_followed += 1;
        let extended = path.extended(pointer);
        Resolution::Resolved(self.walk(target, &extended))
    }
}
