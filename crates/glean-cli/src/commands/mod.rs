//! Command implementations.

mod extract;

pub use extract::execute_extract;

use crate::config::Config;
use glean_domain::Credential;
use glean_llm::OpenAiClient;
use glean_pipeline::{Pipeline, PipelineConfig};

/// Build the API client for one session from the credential and config.
pub(crate) fn build_client(
    credential: Credential,
    model_override: Option<&str>,
    config: &Config,
) -> OpenAiClient {
    let model = model_override.unwrap_or(&config.api.model);
    OpenAiClient::new(credential)
        .with_endpoint(config.api.endpoint.clone())
        .with_model(model)
}

/// Build a pipeline over one client (it implements both API seams).
pub(crate) fn build_pipeline(client: OpenAiClient) -> Pipeline<OpenAiClient, OpenAiClient> {
    Pipeline::new(client.clone(), client, PipelineConfig::default())
}
