//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::rule::Finding;
use crate::tag::SyntaxError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of validating one raw tag
#[derive(Debug, Clone, Serialize)]
pub struct TagValidation {
    /// The tag as given
    pub tag: String,
    /// Whether it is in canonical form
    pub valid: bool,
    /// The first syntax error, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SyntaxError>,
}

impl TagValidation {
    /// Build from a validation outcome
    #[must_use]
    pub fn new(tag: &str, outcome: Result<(), SyntaxError>) -> Self {
        Self {
            tag: tag.to_string(),
            valid: outcome.is_ok(),
            error: outcome.err(),
        }
    }
}

/// Result of a validate operation
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Whether every tag is valid
    pub passed: bool,
    /// Per-tag outcomes, in input order
    pub tags: Vec<TagValidation>,
}

/// Result of a key lookup
#[derive(Debug, Serialize)]
pub struct LookupResult {
    /// The tag searched
    pub tag: String,
    /// The key looked up
    pub key: String,
    /// Value of the first occurrence, if present
    pub value: Option<String>,
}

/// Result of running the field tag rule
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether no diagnostics were produced
    pub passed: bool,
    /// Number of fields checked
    pub fields_checked: usize,
    /// Diagnostics, in field order
    pub findings: Vec<Finding>,
}

impl ValidateResult {
    /// Collect per-tag outcomes
    #[must_use]
    pub fn new(tags: Vec<TagValidation>) -> Self {
        let passed = tags.iter().all(|t| t.valid);
        Self { passed, tags }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for t in &self.tags {
            match t.error {
                None => println!("{}       {}", "ok".green(), t.tag),
                Some(err) => println!("{}  {}\n         {err}", "invalid".red(), t.tag),
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl LookupResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.value {
                Some(value) => println!("{value}"),
                None => eprintln!("key {:?} not found", self.key),
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl CheckReport {
    /// Build a report for `fields_checked` fields
    #[must_use]
    pub fn new(fields_checked: usize, findings: Vec<Finding>) -> Self {
        Self {
            passed: findings.is_empty(),
            fields_checked,
            findings,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.findings.is_empty() {
            println!("Checked {} field(s), no problems found.", self.fields_checked);
            return;
        }

        for f in &self.findings {
            let name = f.field.as_deref().unwrap_or("(embedded)");
            println!("  [{}] field #{} {name}", f.diagnostic.code(), f.index + 1);
            println!("          {}\n", f.diagnostic);
        }
        println!(
            "{} problem(s) in {} field(s) checked",
            self.findings.len(),
            self.fields_checked
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
