//! Command-line argument definitions.

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Glean: extract structured facts and a simple summary from text or
/// documents via a hosted LLM API.
#[derive(Debug, Parser)]
#[command(name = "glean", version, about)]
pub struct Cli {
    /// API key for the hosted API (held in memory only, never saved)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Completion model override
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one extraction and print (and optionally save) the result
    Extract(ExtractArgs),

    /// Interactive session (the default when no command is given)
    Repl,
}

/// Arguments for the extract command.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Inline text to process
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// PDF or DOCX file to process
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Directory to write summary.txt and schema.json into
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Output format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Summary plus a key/value table
    Table,
    /// Pretty-printed JSON of the whole result
    Json,
    /// Summary only
    Quiet,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Quiet => OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_extract_with_text() {
        let cli = Cli::try_parse_from(["glean", "extract", "--text", "hello"]).unwrap();
        match cli.command {
            Some(Command::Extract(args)) => assert_eq!(args.text.as_deref(), Some("hello")),
            other => panic!("expected Extract, got {:?}", other),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = Cli::try_parse_from([
            "glean", "extract", "--text", "hello", "--file", "doc.pdf",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_command_defaults_to_none() {
        let cli = Cli::try_parse_from(["glean"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "glean", "--no-color", "--format", "json", "--model", "gpt-4o", "repl",
        ])
        .unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert!(matches!(cli.format, Some(FormatArg::Json)));
    }
}
