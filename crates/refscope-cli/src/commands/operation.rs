//! Operation command
//!
//! Usage: refscope operation <FILE> <PATH> <METHOD> [--json] [--output <FILE>]

use clap::Args;
use refscope_core::catalog::{operation_summary, render_operation_summary};
use refscope_core::document::load_document;
use std::path::PathBuf;

use super::{emit, to_json};

#[derive(Debug, Args)]
pub struct OperationArgs {
    /// Document to read (JSON or YAML)
    pub file: PathBuf,

    /// Path template as written under `paths`, e.g. /pets/{petId}
    pub path: String,

    /// HTTP method, case-insensitive
    pub method: String,

    /// Emit JSON instead of Markdown
    #[arg(long)]
    pub json: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute operation command
pub fn execute(args: OperationArgs) -> Result<(), Box<dyn std::error::Error>> {
    let root = load_document(&args.file)?;
    let summary = operation_summary(&root, &args.path, &args.method)?;

    let text = if args.json {
        to_json(&summary)?
    } else {
        render_operation_summary(&summary)
    };
    emit(&text, args.output.as_deref())
}
