//! Deep reference resolution
//!
//! Replaces every reference node in a value with its fully materialized
//! target. Cycles are detected per descent path, so a pointer reached through
//! two unrelated branches (a diamond) resolves in both places, while a
//! pointer that repeats along one root-to-leaf chain becomes a circular
//! marker. Dangling or malformed pointers become error markers. Nothing here
//! returns an error or panics; every outcome is a value.

pub mod deep;
pub mod outcome;
pub mod path;

pub use deep::{resolve_deep, resolve_deep_from, resolve_deep_with_stats, resolve_reference};
pub use outcome::{Marker, Resolution, ResolveStats, CIRCULAR_KEY, ERROR_KEY, UNRESOLVED_REASON};
pub use path::ResolutionPath;
