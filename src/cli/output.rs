//! Output formatting for CLI commands

use serde_json::Value;

use super::checklist::render;
use crate::domain::Checklist;
pub use crate::storage::OutputFormat;

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a message that needs no listing (e.g. nothing to do)
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints the full checklist
    pub fn checklist(&self, list: &Checklist) {
        match self.format {
            OutputFormat::Text => print_lines(list),
            OutputFormat::Json => println!("{}", Value::Array(entries(list))),
        }
    }

    /// Prints a confirmation followed by the full checklist
    pub fn report(&self, message: &str, list: &Checklist) {
        match self.format {
            OutputFormat::Text => {
                println!("{}", message);
                print_lines(list);
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message,
                        "items": entries(list),
                    })
                );
            }
        }
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

fn print_lines(list: &Checklist) {
    for line in render(list) {
        println!("{}", line);
    }
}

fn entries(list: &Checklist) -> Vec<Value> {
    list.iter()
        .map(|(pos, item)| {
            serde_json::json!({
                "index": pos.get(),
                "name": item.name,
                "priority": Value::from(item.priority.clone()),
            })
        })
        .collect()
}
