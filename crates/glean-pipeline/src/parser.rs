//! Parse completion content into an `ExtractionResult`

use crate::error::PipelineError;
use glean_domain::ExtractionResult;
use serde_json::Value;

/// Parse the completion content string into a validated result.
///
/// Both top-level keys are checked eagerly: `schema` must be a JSON object
/// and `summary` a string. A response that is not valid JSON is a
/// [`PipelineError::Decode`]; a missing or ill-typed key is a
/// [`PipelineError::MissingField`].
pub fn parse_completion(content: &str) -> Result<ExtractionResult, PipelineError> {
    // json_object mode should return bare JSON, but models occasionally
    // wrap output in markdown code fences anyway.
    let json_str = strip_code_fence(content);

    let value: Value =
        serde_json::from_str(json_str.trim()).map_err(|e| PipelineError::Decode(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| PipelineError::Decode("expected a JSON object at the top level".to_string()))?;

    let schema = object
        .get("schema")
        .and_then(Value::as_object)
        .cloned()
        .ok_or(PipelineError::MissingField("schema"))?;

    let summary = object
        .get("summary")
        .and_then(Value::as_str)
        .ok_or(PipelineError::MissingField("summary"))?
        .to_string();

    Ok(ExtractionResult::new(schema, summary))
}

/// Strip a markdown code-fence wrapper, if present.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let body = trimmed
        .trim_start_matches("```json")
        .trim_start_matches("```");
    body.trim_end_matches("```").trim()
}
