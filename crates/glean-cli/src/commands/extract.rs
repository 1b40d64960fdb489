//! Extract command implementation.

use crate::artifacts;
use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use glean_domain::{Credential, SessionState};
use glean_ingest::DocumentKind;
use std::fs;

/// Execute the extract command: one full pass through the pipeline.
pub async fn execute_extract(
    args: ExtractArgs,
    api_key: Option<String>,
    model_override: Option<String>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let input = read_input(&args)?;

    let key = api_key
        .filter(|k| !k.is_empty())
        .ok_or(CliError::NoCredential)?;
    let credential = Credential::new(key);

    let mut session = SessionState::new();
    session.set_credential(credential.clone());

    let client = super::build_client(credential, model_override.as_deref(), config);
    let pipeline = super::build_pipeline(client);

    let result = pipeline.process(&mut session, &input).await?;

    println!("{}", formatter.format_result(&result)?);

    if let Some(dir) = args.out_dir {
        let (summary_path, schema_path) = artifacts::write_artifacts(&result, &dir)?;
        println!(
            "{}",
            formatter.success(&format!(
                "Saved {} and {}",
                summary_path.display(),
                schema_path.display()
            ))
        );
    }

    Ok(())
}

/// Resolve the input text from the arguments: inline text, or an uploaded
/// PDF/DOCX run through the text extractor.
fn read_input(args: &ExtractArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let path = args.file.as_ref().ok_or_else(|| {
        CliError::InvalidInput("Must specify either --text or --file".to_string())
    })?;

    let kind = DocumentKind::from_path(path).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "{}: only .pdf and .docx files are supported",
            path.display()
        ))
    })?;

    let bytes = fs::read(path)?;
    Ok(glean_ingest::extract(&bytes, kind)?)
}
