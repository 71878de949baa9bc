//! refscope CLI
//!
//! Command-line interface for inspecting OpenAPI documents

use clap::{Parser, Subcommand, ValueEnum};
use refscope_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "refscope")]
#[command(about = "refscope - Resolve and inspect OpenAPI schema references", long_about = None)]
struct Cli {
    /// Emit logs to stderr (off unless set)
    #[arg(long, global = true, value_enum)]
    log: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    /// Human-readable, debug level
    Pretty,
    /// JSON lines, info level
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a node with every reference resolved
    Resolve(commands::resolve::ResolveArgs),
    /// Print the compact type label of a node
    Label(commands::label::LabelArgs),
    /// Render a schema as a depth-limited Markdown tree
    Tree(commands::tree::TreeArgs),
    /// List the schemas under components.schemas
    Catalog(commands::catalog::CatalogArgs),
    /// List every operation under paths
    Operations(commands::operations::OperationsArgs),
    /// Summarize one operation
    Operation(commands::operation::OperationArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.log {
        Some(LogFormat::Pretty) => init(Profile::Development),
        Some(LogFormat::Json) => init(Profile::Production),
        None => {}
    }

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args),
        Commands::Label(args) => commands::label::execute(args),
        Commands::Tree(args) => commands::tree::execute(args),
        Commands::Catalog(args) => commands::catalog::execute(args),
        Commands::Operations(args) => commands::operations::execute(args),
        Commands::Operation(args) => commands::operation::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
