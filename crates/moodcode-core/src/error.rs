//! Strategy error types.
//!
//! Errors here are local to a single strategy and are absorbed by the
//! classifier chain. Nothing in this module ever reaches a caller of
//! `ClassifierChain::classify`, which is total by design.

use thiserror::Error;

/// Why a strategy produced no usable result for this call.
#[derive(Debug, Clone, Error)]
pub enum StrategyError {
    /// The strategy's backing capability could not be initialized or is
    /// missing. Recorded once per process for the model strategy.
    #[error("strategy '{strategy}' unavailable: {reason}")]
    Unavailable {
        /// The reporting strategy's name.
        strategy: &'static str,
        /// Human-readable cause, for logs only.
        reason: String,
    },

    /// The strategy was available but this particular call failed.
    #[error("strategy '{strategy}' failed: {message}")]
    Inference {
        /// The reporting strategy's name.
        strategy: &'static str,
        /// Human-readable cause, for logs only.
        message: String,
    },
}

impl StrategyError {
    pub fn unavailable(strategy: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            strategy,
            reason: reason.into(),
        }
    }

    pub fn inference(strategy: &'static str, message: impl Into<String>) -> Self {
        Self::Inference {
            strategy,
            message: message.into(),
        }
    }

    /// The name of the strategy that reported the error.
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Unavailable { strategy, .. } | Self::Inference { strategy, .. } => strategy,
        }
    }
}

/// Result alias for strategy operations.
pub type StrategyResult<T> = Result<T, StrategyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_strategy_name() {
        let err = StrategyError::unavailable("model", "weights missing");
        assert!(err.to_string().contains("model"));
        assert!(err.to_string().contains("weights missing"));
        assert_eq!(err.strategy(), "model");
    }

    #[test]
    fn test_inference_variant() {
        let err = StrategyError::inference("sentiment", "empty valence table");
        assert!(matches!(err, StrategyError::Inference { .. }));
        assert_eq!(err.strategy(), "sentiment");
    }
}
