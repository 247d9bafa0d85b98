//! Backend error shaping command

use super::{print_json, read_json};
use crate::OutputFormat;
use chapashop_core::backend::shape_backend_error;
use chapashop_core::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

/// Print the shaped error and its user-facing message
pub fn shape(file: &Path, format: OutputFormat) -> Result<()> {
    let shaped = shape_backend_error(&read_json(file)?);
    let code = shaped.error_code();

    match format {
        OutputFormat::Json => print_json(&json!({
            "error": shaped,
            "userMessage": shaped.user_message(),
            "errorCode": code.to_string(),
            "category": code.category(),
        })),
        OutputFormat::Text => {
            println!("{}", shaped.user_message().bold());
            println!("  {} {} ({})", "code:".dimmed(), code, code.category());
            if let Some(backend_code) = &shaped.code {
                println!("  {} {}", "backend code:".dimmed(), backend_code);
            }
            if let Some(details) = &shaped.details {
                println!("  {} {}", "details:".dimmed(), details);
            }
            if let Some(hint) = &shaped.hint {
                println!("  {} {}", "hint:".dimmed(), hint);
            }
            Ok(())
        }
    }
}
