//! Output formatting for the CLI
//!
//! All user-facing text funnels through [`OutputFormatter`] so the
//! `--json` and `--no-color` flags behave uniformly across commands.
//! Handlers gather their data first and emit once; in JSON mode only
//! [`OutputFormatter::print_json`] writes to stdout.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats command output as colored text or JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter from the global CLI flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON output was requested
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.yellow());
        }
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("{message}");
        } else {
            eprintln!("{}", message.red().bold());
        }
    }

    /// Print a value as pretty JSON to stdout
    pub fn print_json(&self, value: &impl Serialize) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_remembers_json_flag() {
        assert!(OutputFormatter::new(true, false).is_json());
        assert!(!OutputFormatter::new(false, true).is_json());
        assert!(!OutputFormatter::default().is_json());
    }
}
