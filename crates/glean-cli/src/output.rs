//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use glean_domain::ExtractionResult;
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an extraction result.
    pub fn format_result(&self, result: &ExtractionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_result_json(result),
            OutputFormat::Table => self.format_result_table(result),
            OutputFormat::Quiet => Ok(result.summary.clone()),
        }
    }

    /// Format the whole result as pretty JSON.
    fn format_result_json(&self, result: &ExtractionResult) -> Result<String> {
        let value = serde_json::json!({
            "schema": result.schema,
            "summary": result.summary,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format the summary followed by a key/value table of the schema.
    fn format_result_table(&self, result: &ExtractionResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.colorize("Summary:", "cyan"));
        output.push('\n');
        if result.summary.is_empty() {
            output.push_str("(none)");
        } else {
            output.push_str(&result.summary);
        }
        output.push_str("\n\n");

        output.push_str(&self.colorize("Extracted Information:", "cyan"));
        output.push('\n');
        if result.schema.is_empty() {
            output.push_str("(none)");
            return Ok(output);
        }

        let mut builder = Builder::default();
        builder.push_record(["Key", "Value"]);
        for (key, value) in &result.schema {
            builder.push_record([key.clone(), render_value(value)]);
        }

        let table = builder
            .build()
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
            .to_string();
        output.push_str(&table);

        Ok(output)
    }

    /// Format an informational message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(message, "blue")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(message, "green")
    }

    /// Format an error message.
    ///
    /// No prefix is added: pipeline notices (e.g. the content-policy
    /// message) must display verbatim.
    pub fn error(&self, message: &str) -> String {
        self.colorize(message, "red")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "cyan" => text.cyan().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a schema value for the table: bare strings stay bare, everything
/// else is compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
