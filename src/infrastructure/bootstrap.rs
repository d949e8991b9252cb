//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::llm::ChatCompletions;
use crate::application::generation::Generator;
use crate::domain::vocabulary::Vocabulary;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::llm::ChatModel;

/// Build the chat-completion client from configuration.
///
/// # Errors
///
/// Fails if the API key variable is unset or the HTTP client cannot be built.
#[allow(clippy::result_large_err)]
pub fn build_chat_model(config: &Config) -> Result<Arc<dyn ChatModel>> {
    let client: Arc<dyn ChatModel> = Arc::new(ChatCompletions::from_config(&config.llm)?);
    info!(
        provider = client.name(),
        endpoint = %config.llm.endpoint,
        candidates = config.llm.candidates.len(),
        "LLM client initialized"
    );
    Ok(client)
}

/// Wire a [`Generator`] around an existing model.
#[must_use]
pub fn build_generator_with(
    config: &Config,
    model: Arc<dyn ChatModel>,
    vocabulary: Arc<Vocabulary>,
) -> Generator {
    Generator::new(
        model,
        config.llm.candidates.clone(),
        config.generation.policy(),
        vocabulary,
    )
}

/// Wire a [`Generator`] backed by the configured endpoint.
///
/// # Errors
///
/// See [`build_chat_model`].
#[allow(clippy::result_large_err)]
pub fn build_generator(config: &Config, vocabulary: Arc<Vocabulary>) -> Result<Generator> {
    let model = build_chat_model(config)?;
    Ok(build_generator_with(config, model, vocabulary))
}
