//! Tree command
//!
//! Usage: refscope tree <FILE> <POINTER> [--max-depth <N>] [--variant <PATH=INDEX>]...
//!        [--raw <PATH>]... [--output <FILE>]

use clap::Args;
use refscope_core::document::load_document;
use refscope_core::{NodePath, SchemaView, ViewConfig};
use std::path::PathBuf;

use super::emit;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Document to read (JSON or YAML)
    pub file: PathBuf,

    /// Schema to render, e.g. #/components/schemas/Pet
    pub pointer: String,

    /// Nesting levels to expand (default: REFSCOPE_MAX_DEPTH, else 7)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Select a oneOf/anyOf variant, e.g. --variant /properties/pet=1
    #[arg(long, value_parser = parse_variant)]
    pub variant: Vec<(NodePath, usize)>,

    /// Show raw JSON under a node, e.g. --raw /properties/owner
    #[arg(long)]
    pub raw: Vec<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute tree command
pub fn execute(args: TreeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let root = load_document(&args.file)?;

    let mut config = ViewConfig::from_env()?;
    if let Some(max_depth) = args.max_depth {
        config = config.with_max_depth(max_depth);
    }

    let mut view = SchemaView::at_pointer(&root, &args.pointer, config)?;
    // Variants first: raw paths may sit below a selected variant
    for (path, index) in &args.variant {
        view.select_variant(path, *index)?;
    }
    for path in &args.raw {
        view.toggle_raw(&NodePath::parse(path))?;
    }

    emit(&view.render_markdown(), args.output.as_deref())
}

fn parse_variant(s: &str) -> Result<(NodePath, usize), String> {
    let (path, index) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected PATH=INDEX, got '{}'", s))?;
    let index = index
        .parse::<usize>()
        .map_err(|_| format!("variant index must be a non-negative integer, got '{}'", index))?;
    Ok((NodePath::parse(path), index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variant() {
        let (path, index) = parse_variant("/properties/pet=2").unwrap();
        assert_eq!(path.to_string(), "/properties/pet");
        assert_eq!(index, 2);

        let (path, index) = parse_variant("=1").unwrap();
        assert!(path.is_root());
        assert_eq!(index, 1);

        assert!(parse_variant("/properties/pet").is_err());
        assert!(parse_variant("/x=-1").is_err());
    }
}
