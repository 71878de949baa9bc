pub mod catalog;
pub mod label;
pub mod operation;
pub mod operations;
pub mod resolve;
pub mod tree;

use std::path::Path;

/// Write command output to a file, or to stdout when no file is given
pub fn emit(text: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            println!("✓ Written to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

/// Pretty JSON with a trailing newline
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, Box<dyn std::error::Error>> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}
