//! Label command
//!
//! Usage: refscope label <FILE> <POINTER>

use clap::Args;
use refscope_core::document::{load_document, node_at, ROOT_POINTER};
use refscope_core::type_label;
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LabelArgs {
    /// Document to read (JSON or YAML)
    pub file: PathBuf,

    /// Schema to label, e.g. #/components/schemas/Pet
    pub pointer: String,
}

/// Execute label command
pub fn execute(args: LabelArgs) -> Result<(), Box<dyn std::error::Error>> {
    let root = load_document(&args.file)?;
    let node = node_at(&root, &args.pointer)?;

    // Labelling through a reference keeps the one-hop semantics of list views
    let label = if args.pointer == ROOT_POINTER {
        type_label(node, &root)
    } else {
        type_label(&json!({ "$ref": args.pointer }), &root)
    };

    println!("{}", label);
    Ok(())
}
