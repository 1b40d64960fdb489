//! Core pipeline implementation

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::parser::parse_completion;
use crate::prompt::ExtractionPrompt;
use glean_domain::{ChatCompletion, ContentModeration, ExtractionResult, SessionState};
use tracing::{debug, info};

/// Coordinates one interaction cycle over a caller-owned session.
///
/// Two states only, decided by the input at the start of each cycle:
///
/// - **Idle**: input is empty — the cached result is returned unchanged and
///   no network call is made
/// - **Processing**: moderation gate, then one completion call; the cache is
///   overwritten only after the response parses and validates
pub struct Pipeline<C, M>
where
    C: ChatCompletion,
    M: ContentModeration,
{
    chat: C,
    moderation: M,
    config: PipelineConfig,
}

impl<C, M> Pipeline<C, M>
where
    C: ChatCompletion,
    M: ContentModeration,
{
    /// Create a new pipeline over the given API implementations.
    pub fn new(chat: C, moderation: M, config: PipelineConfig) -> Self {
        Self {
            chat,
            moderation,
            config,
        }
    }

    /// Run one interaction cycle.
    ///
    /// Returns the result the host should display: the freshly extracted
    /// result in the Processing state, or a clone of the cached result in
    /// the Idle state. On any error the session cache is left untouched —
    /// the host reports the error and keeps showing the previous result.
    pub async fn process(
        &self,
        session: &mut SessionState,
        input: &str,
    ) -> Result<ExtractionResult, PipelineError> {
        let text = input.trim();

        // Idle: nothing new this cycle.
        if text.is_empty() {
            return Ok(session.last_result().clone());
        }

        // The credential is required before any API call.
        if session.credential().map_or(true, |c| c.is_empty()) {
            return Err(PipelineError::MissingCredential);
        }

        let chars = text.chars().count();
        if chars > self.config.max_input_chars {
            return Err(PipelineError::InputTooLong(chars, self.config.max_input_chars));
        }

        info!(chars, "processing content");

        let flagged = self
            .moderation
            .flagged(text)
            .await
            .map_err(|e| PipelineError::Moderation(e.to_string()))?;

        if flagged {
            return Err(PipelineError::PolicyViolation);
        }

        let prompt = ExtractionPrompt::new(text);
        let content = self
            .chat
            .complete_json(prompt.system(), &prompt.user())
            .await
            .map_err(|e| PipelineError::Completion(e.to_string()))?;

        debug!(chars = content.len(), "completion content received");

        let result = parse_completion(&content)?;
        session.record(result.clone());

        Ok(result)
    }
}
