//! Subcommand implementations

pub mod backend;
pub mod hours;
pub mod location;

use chapashop_core::{Error, ErrorCode, Result, ResultExt};
use serde::Serialize;
use std::path::Path;

/// Read and parse a JSON input file
pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Reading {}", path.display()))?;

    serde_json::from_str(&content).map_err(|e| {
        Error::new(
            ErrorCode::InvalidInput,
            format!("{} is not valid JSON: {}", path.display(), e),
        )
    })
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
