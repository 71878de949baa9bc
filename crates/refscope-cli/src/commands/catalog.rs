//! Catalog command
//!
//! Usage: refscope catalog <FILE> [--json] [--output <FILE>]

use clap::Args;
use refscope_core::catalog::{render_schema_catalog, schema_catalog};
use refscope_core::document::load_document;
use std::path::PathBuf;

use super::{emit, to_json};

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Document to read (JSON or YAML)
    pub file: PathBuf,

    /// Emit JSON rows instead of a Markdown table
    #[arg(long)]
    pub json: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute catalog command
pub fn execute(args: CatalogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let root = load_document(&args.file)?;
    let rows = schema_catalog(&root);

    let text = if args.json {
        to_json(&rows)?
    } else {
        render_schema_catalog(&rows)
    };
    emit(&text, args.output.as_deref())
}
