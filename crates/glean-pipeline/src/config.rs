//! Configuration for the pipeline

use serde::{Deserialize, Serialize};

/// Configuration for one [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum input text length (characters) accepted for a completion
    /// call. The moderation service enforces its own limit; this guard only
    /// protects the completion request.
    pub max_input_chars: usize,
}

impl PipelineConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_chars == 0 {
            return Err("max_input_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 200_000,
        }
    }
}
