//! Resolve command
//!
//! Usage: refscope resolve <FILE> [--pointer <POINTER>] [--stats] [--output <FILE>]

use clap::Args;
use refscope_core::document::{load_document, ROOT_POINTER};
use refscope_core::{SchemaView, ViewConfig};
use std::path::PathBuf;

use super::{emit, to_json};

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Document to read (JSON or YAML)
    pub file: PathBuf,

    /// Node to resolve (default: the whole document)
    #[arg(short, long, default_value = ROOT_POINTER)]
    pub pointer: String,

    /// Report reference counts on stderr
    #[arg(long)]
    pub stats: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute resolve command
pub fn execute(args: ResolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let root = load_document(&args.file)?;
    let view = SchemaView::at_pointer(&root, &args.pointer, ViewConfig::default())?;

    if args.stats {
        let stats = view.stats();
        eprintln!(
            "references followed: {}, circular: {}, unresolved: {}",
            stats.refs_followed, stats.circular, stats.unresolved
        );
    }

    emit(&to_json(view.resolved())?, args.output.as_deref())
}
