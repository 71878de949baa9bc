use serde::Serialize;
use serde_json::{Map, Value};

use crate::pointer::REF_KEY;

/// Field added to a reference node that closes a cycle
pub const CIRCULAR_KEY: &str = "circular";

/// Field added to a reference node that could not be resolved
pub const ERROR_KEY: &str = "error";

/// Reason recorded on error markers for dangling and malformed pointers
pub const UNRESOLVED_REASON: &str = "Could not resolve reference";

/// Outcome of following a single reference
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The pointer resolved and its target was fully materialized
    Resolved(Value),
    /// The pointer already appears on the current descent path
    Circular { reference: String },
    /// The pointer is dangling or malformed
    Unresolved { reference: String, reason: String },
}

impl Resolution {
    /// Turn the outcome into the value that replaces the reference node
    ///
    /// `original` is the reference node's own object. Markers keep all of
    /// its fields and add either `circular: true` or `error: <reason>`.
    pub fn into_value(self, original: &Map<String, Value>) -> Value {
        match self {
            Resolution::Resolved(value) => value,
            Resolution::Circular { .. } => {
                let mut marker = original.clone();
                marker.insert(CIRCULAR_KEY.to_string(), Value::Bool(true));
                Value::Object(marker)
            }
            Resolution::Unresolved { reason, .. } => {
                let mut marker = original.clone();
                marker.insert(ERROR_KEY.to_string(), Value::String(reason));
                Value::Object(marker)
            }
        }
    }
}

/// A marker left in resolved output in place of a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    Circular { reference: &'a str },
    Unresolved { reference: &'a str, reason: &'a str },
}

impl<'a> Marker<'a> {
    /// Classify a node of resolved output
    ///
    /// Returns `None` for anything that is not a marker, including plain
    /// reference nodes that were never passed through the resolver.
    pub fn of(value: &'a Value) -> Option<Self> {
        let obj = value.as_object()?;
        let reference = obj.get(REF_KEY)?.as_str()?;

        if obj.get(CIRCULAR_KEY).and_then(Value::as_bool) == Some(true) {
            return Some(Marker::Circular { reference });
        }
        let reason = obj.get(ERROR_KEY)?.as_str()?;
        Some(Marker::Unresolved { reference, reason })
    }

    /// The original pointer the marker stands in for
    pub fn reference(&self) -> &'a str {
        match self {
            Marker::Circular { reference } | Marker::Unresolved { reference, .. } => reference,
        }
    }
}

/// Counters collected over one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolveStats {
    /// Pointers successfully followed
    pub refs_followed: usize,
    /// Circular markers produced
    pub circular: usize,
    /// Error markers produced
    pub unresolved: usize,
}

impl ResolveStats {
    /// Whether the pass produced any marker
    pub fn is_degraded(&self) -> bool {
        self.circular > 0 || self.unresolved > 0
    }
}
