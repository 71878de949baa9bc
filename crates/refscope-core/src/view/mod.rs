//! Depth-gated schema tree view
//!
//! Presents an already materialized schema as a tree of properties, array
//! items, enum values and `oneOf`/`anyOf` variants. Two bounds apply and stay
//! separate: resolution terminates through cycle markers, and presentation
//! stops expanding children once [`ViewConfig::max_depth`] is reached. A raw
//! JSON rendering of any subtree stays available regardless of either.
//!
//! [`ViewConfig::max_depth`]: crate::config::ViewConfig

pub mod node_path;
pub mod render;
pub mod schema_view;
pub mod state;
pub mod tree;

pub use node_path::NodePath;
pub use render::render_markdown;
pub use schema_view::SchemaView;
pub use state::ViewState;
pub use tree::{
    build_tree, Child, NodeKind, PropertyRow, TreeNode, VariantGroup, VariantKeyword,
};
