//! Glean CLI - extract structured facts and a simple summary from text or
//! documents.

use clap::Parser;
use glean_cli::commands;
use glean_cli::repl;
use glean_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> glean_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config (the credential is never part of it)
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(cli.api_key, cli.model, &config, &formatter).await?;
        }
        Some(Command::Extract(args)) => {
            commands::execute_extract(args, cli.api_key, cli.model, &config, &formatter).await?;
        }
    }

    Ok(())
}
