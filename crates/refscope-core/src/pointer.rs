//! Single-hop pointer resolution
//!
//! Pointers are intra-document only: `#/` followed by `/`-separated map keys.
//! There is no `~0`/`~1` escaping, no array indexing and no external or HTTP
//! targets. Resolution here knows nothing about cycles or nested references;
//! it follows exactly one pointer.

use serde_json::Value;

/// Prefix every resolvable pointer starts with
pub const POINTER_PREFIX: &str = "#/";

/// Key that marks an object as a reference node
pub const REF_KEY: &str = "$ref";

/// Resolve one pointer against the root document
///
/// Returns `None` when the pointer is not `#/`-prefixed, or when any segment
/// is missing or lands on a value that is not an object.
///
/// # Example
///
/// ```
/// use refscope_core::pointer::resolve_pointer;
/// use serde_json::json;
///
/// let root = json!({"components": {"schemas": {"Pet": {"type": "object"}}}});
/// let pet = resolve_pointer("#/components/schemas/Pet", &root);
/// assert_eq!(pet, Some(&json!({"type": "object"})));
/// assert_eq!(resolve_pointer("components/schemas/Pet", &root), None);
/// ```
pub fn resolve_pointer<'a>(pointer: &str, root: &'a Value) -> Option<&'a Value> {
    let rest = pointer.strip_prefix(POINTER_PREFIX)?;

    rest.split('/')
        .try_fold(root, |node, segment| node.as_object()?.get(segment))
}

/// The `$ref` string of a reference node, if `value` is one
pub fn reference_of(value: &Value) -> Option<&str> {
    value.as_object()?.get(REF_KEY)?.as_str()
}

/// Final segment of a pointer, used as a display name
///
/// `#/components/schemas/User` yields `User`. A pointer with no usable
/// segment (empty, or ending in `/`) yields an empty string.
pub fn ref_name(pointer: &str) -> &str {
    pointer.rsplit('/').next().unwrap_or_default()
}
