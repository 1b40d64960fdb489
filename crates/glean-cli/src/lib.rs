//! Glean CLI library.
//!
//! This library provides the host side of the Glean pipeline: argument
//! parsing, configuration, the interactive REPL, output formatting, and
//! artifact downloads.

pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
