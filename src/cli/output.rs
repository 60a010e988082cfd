//! Terminal output for the CLI
//!
//! Text goes to stdout with colored status markers. In JSON mode the
//! human-readable lines are suppressed and only JSON documents are printed.

use crate::error::Result;
use crate::views::{Toast, ToastVariant};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    pub fn new(json: bool, no_color: bool) -> Self {
        let formatter = Self { json };
        if no_color {
            formatter.disable_color();
        }
        formatter
    }

    /// Turn off ANSI colors for the rest of the process
    pub fn disable_color(&self) {
        colored::control::set_override(false);
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{} {message}", "✓".green().bold());
        }
    }

    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    pub fn warning(&self, message: &str) {
        if !self.json {
            eprintln!("{} {message}", "!".yellow().bold());
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", "✗".red().bold());
    }

    /// Section heading
    pub fn heading(&self, title: &str) {
        if !self.json {
            println!("{}", title.bold().underline());
        }
    }

    /// Render a toast raised by a dashboard action
    pub fn toast(&self, toast: &Toast) {
        match toast.variant {
            ToastVariant::Default => self.success(&format!("{}: {}", toast.title, toast.description)),
            ToastVariant::Destructive => {
                self.error(&format!("{}: {}", toast.title, toast.description));
            },
        }
    }

    /// Pretty-print `value` as JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print `value` as compact JSON on stderr
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        eprintln!("{}", serde_json::to_string(value)?);
        Ok(())
    }
}
