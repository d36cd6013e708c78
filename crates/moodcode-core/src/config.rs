//! Classifier configuration types.
//!
//! Defaults reproduce the reference deployment exactly; the thresholds are
//! compatibility constants, not tuned values, and changing them changes
//! observable classification behavior.

use serde::{Deserialize, Serialize};

use crate::types::LabelSet;

/// Thresholds for the heuristic sentiment strategy's decision policy.
///
/// Applied in order, first match wins:
///
/// 1. `polarity > positive_polarity` → happy
/// 2. `polarity < negative_polarity` → sad
/// 3. `subjectivity > subjectivity_floor && |polarity| < polarity_deadband` → angry
/// 4. otherwise → neutral
///
/// # Example
///
/// ```
/// use moodcode_core::HeuristicConfig;
///
/// let config = HeuristicConfig::default();
/// assert_eq!(config.positive_polarity, 0.4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Polarity above this is happy.
    pub positive_polarity: f32,

    /// Polarity below this is sad.
    pub negative_polarity: f32,

    /// Minimum subjectivity for the angry rule.
    pub subjectivity_floor: f32,

    /// Maximum |polarity| for the angry rule.
    pub polarity_deadband: f32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            positive_polarity: 0.4,
            negative_polarity: -0.3,
            subjectivity_floor: 0.7,
            polarity_deadband: 0.1,
        }
    }
}

impl HeuristicConfig {
    /// Validate threshold ranges, returning an error description if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.positive_polarity) {
            return Err(format!(
                "positive_polarity must be in [0, 1], got {}",
                self.positive_polarity
            ));
        }
        if !(-1.0..=0.0).contains(&self.negative_polarity) {
            return Err(format!(
                "negative_polarity must be in [-1, 0], got {}",
                self.negative_polarity
            ));
        }
        if !(0.0..=1.0).contains(&self.subjectivity_floor) {
            return Err(format!(
                "subjectivity_floor must be in [0, 1], got {}",
                self.subjectivity_floor
            ));
        }
        if !(0.0..=1.0).contains(&self.polarity_deadband) {
            return Err(format!(
                "polarity_deadband must be in [0, 1], got {}",
                self.polarity_deadband
            ));
        }
        Ok(())
    }
}

/// Top-level configuration for a classifier chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Labels this deployment surfaces; out-of-set results fold to neutral.
    pub labels: LabelSet,

    /// Heuristic sentiment thresholds.
    pub heuristic: HeuristicConfig,
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset matching the minimal four-label front-ends.
    pub fn core_four_preset() -> Self {
        Self {
            labels: LabelSet::core_four(),
            ..Default::default()
        }
    }

    /// Validate the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.heuristic.validate()?;
        if self.labels.is_empty() {
            return Err("label set must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmotionLabel;

    #[test]
    fn test_default_thresholds() {
        let config = HeuristicConfig::default();
        assert_eq!(config.positive_polarity, 0.4);
        assert_eq!(config.negative_polarity, -0.3);
        assert_eq!(config.subjectivity_floor, 0.7);
        assert_eq!(config.polarity_deadband, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = HeuristicConfig {
            positive_polarity: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = HeuristicConfig {
            negative_polarity: 0.3,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_chain_config_default_validates() {
        assert!(ChainConfig::default().validate().is_ok());
    }

    #[test]
    fn test_core_four_preset() {
        let config = ChainConfig::core_four_preset();
        assert!(!config.labels.contains(EmotionLabel::Fear));
        assert!(config.labels.contains(EmotionLabel::Neutral));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = ChainConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ChainConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.heuristic, config.heuristic);
    }
}
