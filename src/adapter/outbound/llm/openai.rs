//! OpenAI-compatible chat completions client.
//!
//! Provides an implementation of the [`ChatModel`] trait for any endpoint
//! speaking the `/v1/chat/completions` protocol, such as the Hugging Face
//! inference router. The model is chosen per call, so one client serves
//! every candidate in the fallback list.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::llm::LlmConfig;
use crate::port::outbound::llm::{ChatMessage, ChatModel, ModelReply};

/// Longest error payload carried into a [`ModelReply`].
const MAX_ERROR_LEN: usize = 240;

/// Chat completions API client.
#[derive(Debug)]
pub struct ChatCompletions {
    /// HTTP client for API requests.
    client: Client,
    /// Full URL of the completions endpoint.
    endpoint: String,
    /// Bearer token for authentication.
    api_key: String,
    /// Maximum tokens to generate in the response.
    max_tokens: u32,
    /// Sampling temperature (0.0 to 2.0).
    temperature: f64,
    /// Nucleus sampling mass.
    top_p: f64,
}

impl ChatCompletions {
    /// Create a client with explicit configuration.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        max_tokens: u32,
        temperature: f64,
        top_p: f64,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            max_tokens,
            temperature,
            top_p,
        }
    }

    /// Create a client from configuration, reading the API key from the
    /// environment variable named by `api_key_env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if the variable is unset or
    /// blank, or a transport error if the HTTP client cannot be built.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingCredential {
                var: config.api_key_env.clone(),
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            client,
            ..Self::new(
                config.endpoint.clone(),
                api_key,
                config.max_tokens,
                config.temperature,
                config.top_p,
            )
        })
    }
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
}

#[derive(Deserialize)]
struct Response {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Completion text of a successful response body.
///
/// A body that does not match the completions envelope yields an empty
/// string, which the orchestrator treats as a content failure.
fn completion_text(body: &str) -> String {
    serde_json::from_str::<Response>(body)
        .ok()
        .and_then(|response| response.choices.into_iter().next())
        .and_then(|choice| choice.message.content)
        .unwrap_or_default()
}

/// Error detail of a failed response body.
///
/// Understands `{"error": "..."}` and `{"error": {"message": "..."}}`;
/// anything else is passed through, truncated.
fn error_detail(body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| match value.get("error") {
            Some(Value::String(message)) => Some(message.clone()),
            Some(Value::Object(error)) => error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        })
        .unwrap_or_else(|| body.trim().to_string());
    detail.chars().take(MAX_ERROR_LEN).collect()
}

#[async_trait]
impl ChatModel for ChatCompletions {
    fn name(&self) -> &'static str {
        "chat-completions"
    }

    async fn call(&self, candidate: &str, messages: &[ChatMessage]) -> Result<ModelReply> {
        let request = Request {
            model: candidate,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let reply = if status.is_success() {
            ModelReply::new(status.as_u16(), completion_text(&body))
        } else {
            ModelReply::new(status.as_u16(), error_detail(&body))
        };
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Request/Response Serialization Tests ====================

    #[test]
    fn test_request_serialization() {
        let messages = vec![ChatMessage::system("rules"), ChatMessage::user("names please")];
        let request = Request {
            model: "meta-llama/Llama-3.1-8B-Instruct",
            messages: &messages,
            max_tokens: 800,
            temperature: 0.8,
            top_p: 0.95,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "meta-llama/Llama-3.1-8B-Instruct");
        assert_eq!(json["max_tokens"], 800);
        assert_eq!(json["temperature"], 0.8);
        assert_eq!(json["top_p"], 0.95);
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "names please");
    }

    #[test]
    fn test_completion_text_takes_first_choice() {
        let body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "[{\"name\": \"Ольга\"}]"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        }"#;
        assert_eq!(completion_text(body), r#"[{"name": "Ольга"}]"#);
    }

    #[test]
    fn test_completion_text_tolerates_malformed_envelopes() {
        assert_eq!(completion_text(r#"{"choices": []}"#), "");
        assert_eq!(completion_text(r#"{"choices": [{"message": {"content": null}}]}"#), "");
        assert_eq!(completion_text(r#"{"object": "chat.completion"}"#), "");
        assert_eq!(completion_text("<html>gateway</html>"), "");
    }

    // ==================== Error Payload Tests ====================

    #[test]
    fn test_error_detail_string_and_object_forms() {
        assert_eq!(
            error_detail(r#"{"error": "Model is currently loading"}"#),
            "Model is currently loading"
        );
        assert_eq!(
            error_detail(r#"{"error": {"message": "Invalid credentials", "type": "auth"}}"#),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_error_detail_truncates_raw_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(error_detail(&body).chars().count(), MAX_ERROR_LEN);
        assert_eq!(error_detail("  Service Unavailable \n"), "Service Unavailable");
    }

    // ==================== Client Construction Tests ====================

    #[test]
    fn test_client_name() {
        let client = ChatCompletions::new("http://localhost/v1/chat/completions", "key", 100, 0.1, 1.0);
        assert_eq!(client.name(), "chat-completions");
        assert_eq!(client.max_tokens, 100);
    }

    #[test]
    fn test_from_config_missing_key() {
        let config = LlmConfig {
            api_key_env: "NAMENEST_TEST_UNSET_TOKEN".into(),
            ..LlmConfig::default()
        };
        std::env::remove_var(&config.api_key_env);

        let err = ChatCompletions::from_config(&config).unwrap_err();
        assert!(
            err.to_string().contains("NAMENEST_TEST_UNSET_TOKEN"),
            "Error should mention missing env var: {err}"
        );
    }
}

/// Integration tests that require real API access.
/// Run with: `cargo test --features integration-tests -- --ignored`
#[cfg(all(test, feature = "integration-tests"))]
mod integration_tests {
    use std::time::Duration;

    use super::*;

    fn create_test_client() -> Option<ChatCompletions> {
        match ChatCompletions::from_config(&LlmConfig::default()) {
            Ok(client) => Some(client),
            Err(e) => {
                eprintln!("Skipping chat completions integration test: {e}");
                None
            }
        }
    }

    #[tokio::test]
    #[ignore = "requires HF_API_TOKEN and network access"]
    async fn test_simple_completion() {
        let Some(client) = create_test_client() else {
            return;
        };
        let candidate = LlmConfig::default().candidates[0].clone();

        let reply = tokio::time::timeout(
            Duration::from_secs(60),
            client.call(&candidate, &[ChatMessage::user("Say 'hello' and nothing else.")]),
        )
        .await
        .expect("Request timed out")
        .expect("API call failed");

        if reply.is_success() {
            assert!(reply.body.to_lowercase().contains("hello"), "{}", reply.body);
        }
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_invalid_api_key_is_unauthorized() {
        let config = LlmConfig::default();
        let client = ChatCompletions::new(config.endpoint, "invalid-key-12345", 16, 0.1, 1.0);

        let reply = client
            .call(&config.candidates[0], &[ChatMessage::user("test")])
            .await
            .expect("API call failed");
        assert!(reply.is_unauthorized(), "got HTTP {}", reply.status);
    }
}
