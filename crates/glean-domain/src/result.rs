//! The `{schema, summary}` pair produced by an extraction call

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured output of one extraction call.
///
/// `schema` is a free-form JSON object of extracted key/value facts — the
/// model decides its shape, there is no fixed structural contract. `summary`
/// is a plain-language restatement of the source text.
///
/// # Examples
///
/// ```
/// use glean_domain::ExtractionResult;
///
/// let empty = ExtractionResult::default();
/// assert!(empty.schema.is_empty());
/// assert!(empty.summary.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted key/value facts as an arbitrary JSON object
    pub schema: Map<String, Value>,

    /// Simplified summary of the source text
    pub summary: String,
}

impl ExtractionResult {
    /// Create a result from its parts.
    pub fn new(schema: Map<String, Value>, summary: impl Into<String>) -> Self {
        Self {
            schema,
            summary: summary.into(),
        }
    }

    /// Render the schema as pretty-printed JSON (2-space indentation).
    ///
    /// This is the exact content of a `schema.json` download: parsing it
    /// back yields the in-memory schema unchanged.
    pub fn schema_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ExtractionResult {
        let mut schema = Map::new();
        schema.insert("favorite_color".to_string(), json!("blue"));
        schema.insert("count".to_string(), json!(3));
        ExtractionResult::new(schema, "a short summary")
    }

    #[test]
    fn test_default_is_empty() {
        let result = ExtractionResult::default();
        assert!(result.schema.is_empty());
        assert_eq!(result.summary, "");
    }

    #[test]
    fn test_schema_pretty_round_trip() {
        let result = sample();
        let rendered = result.schema_pretty().unwrap();

        let parsed: Map<String, Value> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, result.schema);
    }

    #[test]
    fn test_schema_pretty_uses_two_space_indent() {
        let result = sample();
        let rendered = result.schema_pretty().unwrap();
        assert!(rendered.contains("\n  \"favorite_color\""));
    }

    #[test]
    fn test_serde_round_trip() {
        let result = sample();
        let json = serde_json::to_string(&result).unwrap();
        let back: ExtractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
