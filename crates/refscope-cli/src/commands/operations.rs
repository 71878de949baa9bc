//! Operations command
//!
//! Usage: refscope operations <FILE> [--json]

use clap::Args;
use refscope_core::catalog::{list_operations, render_operation_list};
use refscope_core::document::load_document;
use std::path::PathBuf;

use super::{emit, to_json};

#[derive(Debug, Args)]
pub struct OperationsArgs {
    /// Document to read (JSON or YAML)
    pub file: PathBuf,

    /// Emit JSON rows instead of a Markdown table
    #[arg(long)]
    pub json: bool,
}

/// Execute operations command
pub fn execute(args: OperationsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let root = load_document(&args.file)?;
    let operations = list_operations(&root);

    let text = if args.json {
        to_json(&operations)?
    } else {
        render_operation_list(&operations)
    };
    emit(&text, None)
}
