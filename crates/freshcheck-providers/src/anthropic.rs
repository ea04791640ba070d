//! Anthropic Messages API client
//!
//! Sends a single non-streaming request per image and returns the content
//! blocks of the reply.

use std::sync::Arc;

use async_trait::async_trait;
use freshcheck_images::EncodedImage;
use reqwest::Client;
use tracing::{debug, error};

use crate::{
    client::InferenceClient,
    config::{api_key_from_env, InferenceConfig},
    error::{ProviderError, ProviderResult},
    models::{ErrorEnvelope, MessagesRequest, MessagesResponse, ModelReply},
    prompt::ANALYSIS_PROMPT,
};

/// Inference client backed by the Anthropic Messages API
pub struct AnthropicClient {
    api_key: String,
    client: Arc<Client>,
    config: InferenceConfig,
}

impl AnthropicClient {
    /// Create a client, building an HTTP client that honours the configured timeout
    pub fn new(config: InferenceConfig, api_key: String) -> ProviderResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::Config(format!("failed to build HTTP client: {}", e)))?;

        Self::with_client(Arc::new(client), config, api_key)
    }

    /// Create a client with the API key taken from `ANTHROPIC_API_KEY`
    pub fn from_env(config: InferenceConfig) -> ProviderResult<Self> {
        Self::new(config, api_key_from_env()?)
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(
        client: Arc<Client>,
        config: InferenceConfig,
        api_key: String,
    ) -> ProviderResult<Self> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::Config(
                "Anthropic API key is required".to_string(),
            ));
        }
        config.validate()?;

        Ok(Self {
            api_key,
            client,
            config,
        })
    }

    /// The configuration this client sends requests with
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Turn a non-success response body into a readable message
    fn upstream_message(status: reqwest::StatusCode, body: &str) -> String {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => format!(
                "{} ({}): {}",
                status, envelope.error.error_type, envelope.error.message
            ),
            Err(_) => format!("{}", status),
        }
    }
}

#[async_trait]
impl InferenceClient for AnthropicClient {
    fn id(&self) -> &str {
        "anthropic"
    }

    async fn infer(&self, image: &EncodedImage) -> ProviderResult<ModelReply> {
        let request = MessagesRequest::for_image(
            self.config.model.clone(),
            self.config.max_tokens,
            image,
            ANALYSIS_PROMPT,
        );

        debug!(
            "Sending analysis request to Anthropic: model={}, media_type={}, payload={} bytes",
            self.config.model,
            image.media_type,
            image.payload_len()
        );

        let response = self
            .client
            .post(self.config.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.config.api_version)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Anthropic API request failed: {}", e);
                ProviderError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Anthropic response body: {}", e);
            ProviderError::from(e)
        })?;

        if !status.is_success() {
            error!("Anthropic API error ({}): {}", status, body);
            return Err(ProviderError::status(
                status.as_u16(),
                Self::upstream_message(status, &body),
            ));
        }

        let envelope: MessagesResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Anthropic response is not a valid envelope: {}", e);
            ProviderError::envelope(format!("unexpected response envelope: {}", e))
        })?;

        if let Some(usage) = envelope.usage {
            debug!(
                "Anthropic usage: input={} output={} stop_reason={:?}",
                usage.input_tokens, usage.output_tokens, envelope.stop_reason
            );
        }

        let blocks = envelope
            .content
            .ok_or_else(|| ProviderError::envelope("response has no content array"))?;

        Ok(ModelReply::from(blocks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_empty_key() {
        match AnthropicClient::new(InferenceConfig::default(), "  ".to_string()) {
            Err(e) => assert!(e.to_string().contains("API key is required")),
            Ok(_) => panic!("Expected error for empty API key"),
        }
    }

    #[test]
    fn test_client_creation_invalid_config() {
        let config = InferenceConfig {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(AnthropicClient::new(config, "sk-ant-test".to_string()).is_err());
    }

    #[test]
    fn test_client_id() {
        let client =
            AnthropicClient::new(InferenceConfig::default(), "sk-ant-test".to_string()).unwrap();
        assert_eq!(client.id(), "anthropic");
    }

    #[test]
    fn test_upstream_message_uses_error_envelope() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        let message =
            AnthropicClient::upstream_message(reqwest::StatusCode::SERVICE_UNAVAILABLE, body);
        assert!(message.contains("overloaded_error"));
        assert!(message.contains("Overloaded"));
    }

    #[test]
    fn test_upstream_message_without_envelope() {
        let message = AnthropicClient::upstream_message(reqwest::StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(message, "502 Bad Gateway");
    }
}
