//! Output handling for the plugin
//!
//! Stdout is reserved for what the host parses: either a notice line or a
//! single JSON payload. Diagnostics go to stderr.

use anyhow::{Context, Result};
use serde::Serialize;

/// Output helper for consistent formatting
pub struct Output {
    verbose: bool,
}

impl Output {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Prints a single line to stdout
    pub fn line(&self, text: &str) {
        println!("{}", text);
    }

    /// Prints structured data as one line of JSON
    pub fn data<T: Serialize>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string(data).context("Failed to serialize output")?;
        println!("{}", json);
        Ok(())
    }

    /// Returns true if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
