//! Model strategy configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the model directory.
pub const MODEL_PATH_ENV: &str = "MOODCODE_MODEL_PATH";

/// Default model directory relative to the working directory.
pub const DEFAULT_MODEL_DIR: &str = "./models/emotion";

/// Configuration for the model-backed strategy.
///
/// # Example
///
/// ```
/// use moodcode_model::ModelConfig;
///
/// let config = ModelConfig::default();
/// assert_eq!(config.max_input_chars, 512);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Explicit model directory. When unset, `MOODCODE_MODEL_PATH` is
    /// consulted, then `./models/emotion`.
    #[serde(default)]
    pub model_dir: Option<PathBuf>,

    /// Input is truncated to this many characters before tokenization.
    pub max_input_chars: usize,

    /// Hard cap on token sequence length fed to the net.
    pub max_tokens: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            max_input_chars: 512,
            max_tokens: 256,
        }
    }
}

impl ModelConfig {
    /// Configuration pointing at an explicit model directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: Some(dir.into()),
            ..Default::default()
        }
    }

    /// Resolve the model directory.
    ///
    /// Priority: explicit config, then the `MOODCODE_MODEL_PATH` environment
    /// variable, then [`DEFAULT_MODEL_DIR`].
    pub fn resolve_model_dir(&self) -> PathBuf {
        if let Some(dir) = &self.model_dir {
            return dir.clone();
        }
        if let Ok(path) = std::env::var(MODEL_PATH_ENV) {
            if !path.trim().is_empty() {
                tracing::info!(%path, "using model path from {MODEL_PATH_ENV}");
                return PathBuf::from(path);
            }
        }
        PathBuf::from(DEFAULT_MODEL_DIR)
    }

    /// Validate the configuration, returning an error description if
    /// invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_chars == 0 {
            return Err("max_input_chars must be positive".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be positive".to_string());
        }
        Ok(())
    }
}
