//! Interactive REPL mode.
//!
//! The REPL is the interaction loop the core does not own: each command is
//! one cycle, every failure is printed and the session stays usable.

use crate::artifacts;
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use glean_domain::{Credential, SessionState};
use glean_ingest::DocumentKind;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(
    initial_key: Option<String>,
    model_override: Option<String>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Glean REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut session = SessionState::new();
    if let Some(key) = initial_key.filter(|k| !k.is_empty()) {
        session.set_credential(Credential::new(key));
    }

    loop {
        let prompt = if session.credential().is_some() {
            "glean> "
        } else {
            "glean (no key)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        let outcome = execute_repl_command(
                            cmd,
                            &mut session,
                            model_override.as_deref(),
                            config,
                            formatter,
                        )
                        .await;
                        if let Err(e) = outcome {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Key(String),
    Text(String),
    File(PathBuf),
    Show,
    Save(PathBuf),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "key" => {
            if rest.is_empty() {
                Err(CliError::InvalidInput("Usage: key <API-KEY>".to_string()))
            } else {
                Ok(ReplCommand::Key(rest.to_string()))
            }
        }
        "text" => {
            if rest.is_empty() {
                Err(CliError::InvalidInput("Usage: text <your text>".to_string()))
            } else {
                Ok(ReplCommand::Text(rest.to_string()))
            }
        }
        "file" => {
            if rest.is_empty() {
                Err(CliError::InvalidInput("Usage: file <path>".to_string()))
            } else {
                Ok(ReplCommand::File(PathBuf::from(rest)))
            }
        }
        "show" => Ok(ReplCommand::Show),
        "save" => {
            if rest.is_empty() {
                Err(CliError::InvalidInput("Usage: save <directory>".to_string()))
            } else {
                Ok(ReplCommand::Save(PathBuf::from(rest)))
            }
        }
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            head
        ))),
    }
}

/// Execute a REPL command against the session.
async fn execute_repl_command(
    cmd: ReplCommand,
    session: &mut SessionState,
    model_override: Option<&str>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        ReplCommand::Key(key) => {
            session.set_credential(Credential::new(key));
            println!("{}", formatter.success("API key set for this session."));
        }
        ReplCommand::Text(text) => {
            process_and_render(session, &text, model_override, config, formatter).await?;
        }
        ReplCommand::File(path) => {
            let kind = DocumentKind::from_path(&path).ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "{}: only .pdf and .docx files are supported",
                    path.display()
                ))
            })?;
            let bytes = fs::read(&path)?;
            let text = glean_ingest::extract(&bytes, kind)?;
            process_and_render(session, &text, model_override, config, formatter).await?;
        }
        ReplCommand::Show => {
            println!("{}", formatter.format_result(session.last_result())?);
        }
        ReplCommand::Save(dir) => {
            let (summary_path, schema_path) =
                artifacts::write_artifacts(session.last_result(), &dir)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Saved {} and {}",
                    summary_path.display(),
                    schema_path.display()
                ))
            );
        }
        ReplCommand::Exit | ReplCommand::Help => unreachable!("handled by the loop"),
    }

    Ok(())
}

/// Run one pipeline cycle and render the result.
async fn process_and_render(
    session: &mut SessionState,
    text: &str,
    model_override: Option<&str>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let credential = session
        .credential()
        .cloned()
        .ok_or(CliError::NoCredential)?;

    let client = commands::build_client(credential, model_override, config);
    let pipeline = commands::build_pipeline(client);

    let result = pipeline.process(session, text).await?;
    println!("{}", formatter.format_result(&result)?);

    Ok(())
}

/// Print REPL help.
fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!("  key <API-KEY>     Set the API key for this session");
    println!("  text <text>       Extract from inline text");
    println!("  file <path>       Extract from a PDF or DOCX file");
    println!("  show              Show the last result again");
    println!("  save <directory>  Write summary.txt and schema.json");
    println!("  help              Show this help");
    println!("  exit              Quit");
}

/// Get the history file path.
fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let dir = home.join(".glean");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("history"))
}
