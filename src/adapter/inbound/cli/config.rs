//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

fn source(path: Option<&Path>) -> String {
    path.map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string())
}

/// Execute `config show`.
pub fn execute_show(config: &Config) -> Result<()> {
    if output::is_json() {
        output::json_output(serde_json::to_value(config)?);
        return Ok(());
    }

    output::raw(&config.to_toml()?);
    Ok(())
}

/// Execute `config validate`.
///
/// Loading already validated the file; this reports the result and whether
/// the API key variable is present.
pub fn execute_validate(config: &Config, path: Option<&Path>) -> Result<()> {
    let key_present = std::env::var(&config.llm.api_key_env)
        .map(|key| !key.trim().is_empty())
        .unwrap_or(false);

    if output::is_json() {
        output::json_output(json!({
            "valid": true,
            "source": source(path),
            "candidates": config.llm.candidates,
            "api_key_env": config.llm.api_key_env,
            "api_key_present": key_present,
        }));
        return Ok(());
    }

    output::success(&format!("Configuration is valid ({})", source(path)));
    output::field("Endpoint", &config.llm.endpoint);
    output::field("Candidates", config.llm.candidates.join(", "));
    if key_present {
        output::field("API key", format!("{} is set", config.llm.api_key_env));
    } else {
        output::hint(&format!(
            "set {} before running generate",
            config.llm.api_key_env
        ));
    }
    Ok(())
}
