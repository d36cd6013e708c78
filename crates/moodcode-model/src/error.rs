//! Model crate error types.
//!
//! Everything here stays inside the strategy boundary: load failures turn
//! into a recorded "unavailable" state and inference failures into a
//! per-call strategy error, so the classifier chain keeps progressing.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading or running the emotion net.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model directory does not exist or lacks required files.
    #[error("model artifacts not found at {path}: {message}")]
    ArtifactsNotFound {
        /// Directory that was probed.
        path: PathBuf,
        /// Which artifact was missing.
        message: String,
    },

    /// tokenizer.json failed to load or encode.
    #[error("tokenizer error: {message}")]
    Tokenizer { message: String },

    /// config.json missing fields or unparsable.
    #[error("model config error: {message}")]
    Config { message: String },

    /// Weight tensors missing, misshapen, or failing an op.
    #[error("weights error: {message}")]
    Weights { message: String },

    /// A forward-pass fault.
    #[error("inference error: {message}")]
    Inference { message: String },
}

impl ModelError {
    pub fn tokenizer(message: impl Into<String>) -> Self {
        Self::Tokenizer {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn weights(message: impl Into<String>) -> Self {
        Self::Weights {
            message: message.into(),
        }
    }

    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }
}

/// Result alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = ModelError::ArtifactsNotFound {
            path: PathBuf::from("/tmp/nope"),
            message: "tokenizer.json missing".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("/tmp/nope"));
        assert!(text.contains("tokenizer.json"));
    }
}
