//! Chat-completion endpoint configuration.

use serde::{Deserialize, Serialize};

/// Endpoint, model candidates and sampling settings.
///
/// The API key is never read from the file. It is taken from the
/// environment variable named by `api_key_env` when the client is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Full URL of the OpenAI-compatible completions endpoint.
    pub endpoint: String,

    /// Model identifiers, tried in order.
    pub candidates: Vec<String>,

    /// Maximum tokens in the response.
    pub max_tokens: u32,

    /// Sampling temperature for generation.
    pub temperature: f64,

    /// Nucleus sampling mass.
    pub top_p: f64,

    /// Environment variable holding the bearer token.
    pub api_key_env: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://router.huggingface.co/v1/chat/completions".into(),
            candidates: vec![
                "meta-llama/Llama-3.1-8B-Instruct".into(),
                "mistralai/Mistral-7B-Instruct-v0.3".into(),
                "Qwen/Qwen2.5-7B-Instruct".into(),
            ],
            max_tokens: 800,
            temperature: 0.8,
            top_p: 0.95,
            api_key_env: "HF_API_TOKEN".into(),
            timeout_secs: 60,
        }
    }
}
