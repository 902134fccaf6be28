use crate::error::ConfigError;
use crate::llm::{DEFAULT_ANTHROPIC_VERSION, ModelRef};
use crate::prompt::GenerationParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ML_MODEL: &str =
    "aws-bedrock//anthropic/claude-3-5-sonnet-20240620-v1:0/us-west-2";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub endpoint: EndpointConfig,
}

/// Model selection and generation parameters shared by every prompt node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_ml_model")]
    pub ml_model: String,
    #[serde(default = "default_anthropic_version")]
    pub anthropic_version: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub temperature: f64,
}

fn default_ml_model() -> String {
    DEFAULT_ML_MODEL.into()
}

fn default_anthropic_version() -> String {
    DEFAULT_ANTHROPIC_VERSION.into()
}

fn default_max_tokens() -> u32 {
    GenerationParams::default().max_tokens
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            ml_model: default_ml_model(),
            anthropic_version: default_anthropic_version(),
            max_tokens: default_max_tokens(),
            temperature: GenerationParams::default().temperature,
        }
    }
}

impl ModelConfig {
    pub fn model_ref(&self) -> Result<ModelRef, ConfigError> {
        self.ml_model.parse()
    }

    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Overrides `https://bedrock-runtime.<region>.amazonaws.com`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.model_ref()?;

        if !(0.0..=1.0).contains(&self.model.temperature) {
            return Err(ConfigError::Validation(format!(
                "model.temperature must be within 0.0..=1.0, got {}",
                self.model.temperature
            )));
        }
        if self.model.max_tokens == 0 {
            return Err(ConfigError::Validation(
                "model.max_tokens must be positive".into(),
            ));
        }
        if self.model.anthropic_version.trim().is_empty() {
            return Err(ConfigError::Validation(
                "model.anthropic_version must not be empty".into(),
            ));
        }
        if self.endpoint.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "endpoint.timeout_secs must be positive".into(),
            ));
        }
        if let Some(base_url) = &self.endpoint.base_url {
            url::Url::parse(base_url).map_err(|e| {
                ConfigError::Validation(format!("endpoint.base_url {base_url:?}: {e}"))
            })?;
        }
        Ok(())
    }
}
