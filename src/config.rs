use serde::Deserialize;
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Model identifier used when `SUMMARIZER_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "t5-small";

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the fundreport CLI.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Provider used to run the summarization steps of the chain.
    pub summarizer_provider: SummarizerProvider,
    /// Model identifier passed to the provider.
    pub summarizer_model: String,
    /// Optional override for the Ollama base URL.
    pub ollama_url: Option<String>,
}

/// Supported summarization backends for the prompt chain.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerProvider {
    /// Deterministic local extractive summarizer, no model runtime required.
    Extractive,
    /// Local Ollama runtime.
    Ollama,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            summarizer_provider: load_env_optional("SUMMARIZER_PROVIDER")
                .map(|value| {
                    value.parse().map_err(|()| {
                        ConfigError::InvalidValue("SUMMARIZER_PROVIDER".to_string())
                    })
                })
                .transpose()?
                .unwrap_or(SummarizerProvider::Extractive),
            summarizer_model: load_env_optional("SUMMARIZER_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            ollama_url: load_env_optional("OLLAMA_URL"),
        })
    }
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl std::str::FromStr for SummarizerProvider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extractive" => Ok(Self::Extractive),
            "ollama" => Ok(Self::Ollama),
            _ => Err(()),
        }
    }
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        provider = ?config.summarizer_provider,
        model = %config.summarizer_model,
        ollama_url = ?config.ollama_url,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parses_case_insensitively() {
        assert!(matches!(
            "Ollama".parse::<SummarizerProvider>(),
            Ok(SummarizerProvider::Ollama)
        ));
        assert!(matches!(
            "extractive".parse::<SummarizerProvider>(),
            Ok(SummarizerProvider::Extractive)
        ));
        assert!("t5".parse::<SummarizerProvider>().is_err());
    }
}
