//! OpenAI-compatible API client
//!
//! Covers the two endpoints the pipeline consumes:
//!
//! - `POST {endpoint}/chat/completions` with a JSON-object response-format
//!   constraint (no sampling parameters are set — host-side defaults govern)
//! - `POST {endpoint}/moderations`, first classification result's `flagged`
//!
//! Calls are made once, with no retries: every failure propagates to the
//! host's single error boundary.

use crate::LlmError;
use glean_domain::{ChatCompletion, ContentModeration, Credential};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default completion model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Request timeout (applies to each call as a whole)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client for an OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    endpoint: String,
    model: String,
    credential: Credential,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

#[derive(Serialize)]
struct ModerationRequest<'a> {
    input: &'a str,
}

#[derive(Deserialize)]
struct ModerationResponse {
    results: Vec<ModerationResult>,
}

#[derive(Deserialize)]
struct ModerationResult {
    flagged: bool,
}

impl OpenAiClient {
    /// Create a client with the default endpoint and model.
    pub fn new(credential: Credential) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("reqwest client with static configuration");

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            credential,
            client,
        }
    }

    /// Override the API endpoint (for compatible gateways or test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the completion model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The configured completion model.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, LlmError> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.credential.expose())
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

impl ChatCompletion for OpenAiClient {
    type Error = LlmError;

    async fn complete_json(&self, system: &str, user: &str) -> Result<String, Self::Error> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self.post_json("chat/completions", &request).await?;

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("Empty choices list".to_string()))?;

        debug!(chars = choice.message.content.len(), "completion received");
        Ok(choice.message.content)
    }
}

impl ContentModeration for OpenAiClient {
    type Error = LlmError;

    async fn flagged(&self, text: &str) -> Result<bool, Self::Error> {
        let request = ModerationRequest { input: text };

        let response = self.post_json("moderations", &request).await?;

        let parsed: ModerationResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let first = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("Empty results list".to_string()))?;

        Ok(first.flagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_client() -> OpenAiClient {
        OpenAiClient::new(Credential::new("sk-test"))
    }

    #[test]
    fn test_client_defaults() {
        let client = test_client();
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(client.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_builder_overrides() {
        let client = test_client()
            .with_endpoint("http://localhost:8080/v1")
            .with_model("gpt-4o");
        assert_eq!(client.endpoint, "http://localhost:8080/v1");
        assert_eq!(client.model(), "gpt-4o");
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "instructions",
                },
                ChatMessage {
                    role: "user",
                    content: "Content: hello",
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "instructions"},
                    {"role": "user", "content": "Content: hello"}
                ],
                "response_format": {"type": "json_object"}
            })
        );
    }

    #[test]
    fn test_moderation_response_parsing() {
        let json = r#"{"id": "modr-1", "model": "omni-moderation-latest",
                       "results": [{"flagged": true, "categories": {}}]}"#;
        let parsed: ModerationResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.results[0].flagged);
    }

    #[test]
    fn test_chat_response_parsing() {
        let json = r#"{"choices": [{"index": 0,
                       "message": {"role": "assistant", "content": "{\"schema\": {}}"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, "{\"schema\": {}}");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        let client = test_client().with_endpoint("http://127.0.0.1:1/v1");
        let err = client.complete_json("s", "u").await.unwrap_err();
        assert!(matches!(err, LlmError::Communication(_)));
    }
}
