//! Downloadable artifacts: `summary.txt` and `schema.json`.

use crate::error::Result;
use glean_domain::ExtractionResult;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for the raw summary artifact.
pub const SUMMARY_FILENAME: &str = "summary.txt";

/// File name for the pretty-printed schema artifact.
pub const SCHEMA_FILENAME: &str = "schema.json";

/// Write both artifacts into `dir`, creating it if needed.
///
/// `summary.txt` holds the raw summary string; `schema.json` holds the
/// schema as 2-space-indented JSON. Parsing the written `schema.json`
/// yields the in-memory schema exactly.
pub fn write_artifacts(result: &ExtractionResult, dir: &Path) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)?;

    let summary_path = dir.join(SUMMARY_FILENAME);
    fs::write(&summary_path, &result.summary)?;

    let schema_path = dir.join(SCHEMA_FILENAME);
    fs::write(&schema_path, result.schema_pretty()?)?;

    Ok((summary_path, schema_path))
}
