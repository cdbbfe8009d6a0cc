//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) with specialized
//! rendering for declaration summaries and validation outcomes.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use dtospec_core::{DtoDescriptor, DtoRegistry};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use tracing::trace;


/// Summary of one declared field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    pub name: String,
    pub kind: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<Value>>,
}

/// Summary of one declared DTO shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DtoSummary {
    pub name: String,
    pub fields: Vec<FieldSummary>,
}

impl DtoSummary {
    pub fn from_descriptor(descriptor: &DtoDescriptor) -> Self {
        let fields = descriptor
            .fields()
            .iter()
            .map(|binding| {
                let schema = binding.kind().schema();
                FieldSummary {
                    name: binding.name().to_string(),
                    kind: binding.kind().kind().to_string(),
                    required: schema.required,
                    allowed: schema.enum_values,
                }
            })
            .collect();

        Self {
            name: descriptor.name().to_string(),
            fields,
        }
    }

    /// Summaries of every shape in registration order
    pub fn from_registry(registry: &DtoRegistry) -> Vec<Self> {
        registry
            .descriptors()
            .into_iter()
            .map(Self::from_descriptor)
            .collect()
    }
}

/// Outcome of running one payload through a DTO
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PayloadOutcome {
    pub fn accepted(value: Value) -> Self {
        Self {
            valid: true,
            value: Some(value),
            error: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            value: None,
            error: Some(message.into()),
        }
    }
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format declaration summaries
    fn format_summaries(&self, summaries: &[DtoSummary]) -> Result<String>;

    /// Format payload outcomes, one per payload
    fn format_outcomes(&self, outcomes: &[PayloadOutcome]) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_summaries(&self, summaries: &[DtoSummary]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_summaries_human(summaries)),
            _ => self.format(&summaries),
        }
    }

    fn format_outcomes(&self, outcomes: &[PayloadOutcome]) -> Result<String> {
        match self {
            OutputFormat::Human => format_outcomes_human(outcomes),
            _ => self.format(&outcomes),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");
        self.emit(&formatted)
    }

    /// Write declaration summaries
    pub fn summaries(&mut self, summaries: &[DtoSummary]) -> Result<()> {
        let formatted = self.format.format_summaries(summaries)?;
        self.emit(&formatted)
    }

    /// Write payload outcomes
    pub fn outcomes(&mut self, outcomes: &[PayloadOutcome]) -> Result<()> {
        let formatted = self.format.format_outcomes(outcomes)?;
        self.emit(&formatted)
    }

    fn emit(&mut self, formatted: &str) -> Result<()> {
        if self.format == OutputFormat::Yaml || formatted.ends_with('\n') {
            self.write(formatted)
        } else {
            self.writeln(formatted)
        }
    }
}

/// Human rendering of declaration summaries
fn format_summaries_human(summaries: &[DtoSummary]) -> String {
    let mut out = String::new();
    for summary in summaries {
        out.push_str(&format!("{} ({} field(s))\n", summary.name, summary.fields.len()));
        for field in &summary.fields {
            let presence = if field.required { "required" } else { "optional" };
            out.push_str(&format!("  - {}: {}, {}", field.name, field.kind, presence));
            if let Some(allowed) = &field.allowed {
                let values: Vec<String> = allowed.iter().map(format_value_compact).collect();
                out.push_str(&format!(", only {}", values.join(" | ")));
            }
            out.push('\n');
        }
    }
    out
}

/// Human rendering of payload outcomes
fn format_outcomes_human(outcomes: &[PayloadOutcome]) -> Result<String> {
    let mut out = String::new();
    let numbered = outcomes.len() > 1;

    for (index, outcome) in outcomes.iter().enumerate() {
        let prefix = if numbered {
            format!("[{}] ", index)
        } else {
            String::new()
        };

        match (&outcome.value, &outcome.error) {
            (Some(value), _) => {
                out.push_str(&format!("{}✓ {}\n", prefix, format_value_compact(value)));
            }
            (None, Some(error)) => {
                out.push_str(&format!("{}✗ {}\n", prefix, error));
            }
            (None, None) => {
                out.push_str(&format!("{}{}\n", prefix, serde_json::to_string(outcome)?));
            }
        }
    }
    Ok(out)
}

/// Single-line JSON for a value
fn format_value_compact(value: &Value) -> String {
    value.to_string()
}
