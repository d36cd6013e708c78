//! The closed emotion label enumeration.
//!
//! Every classification result is one of these six labels. The declaration
//! order is the canonical order: when two labels score equally in the
//! lexicon strategy, the earlier one wins.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A coarse emotion category detected from text.
///
/// The variant order is load-bearing: [`EmotionLabel::ALL`] iterates in this
/// order and tie-breaks in the lexicon strategy resolve to the earliest
/// variant.
///
/// # Example
///
/// ```
/// use moodcode_core::EmotionLabel;
///
/// assert_eq!(EmotionLabel::Happy.as_str(), "happy");
/// assert_eq!("surprise".parse::<EmotionLabel>().unwrap(), EmotionLabel::Surprise);
/// assert_eq!(EmotionLabel::default(), EmotionLabel::Neutral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    /// Positive, upbeat affect.
    Happy,
    /// Negative, low-energy affect.
    Sad,
    /// Negative, high-energy affect.
    Angry,
    /// Anxiety, dread, nervousness.
    Fear,
    /// Astonishment, either valence.
    Surprise,
    /// No detectable affect. The universal fallback.
    #[default]
    Neutral,
}

impl EmotionLabel {
    /// All labels in canonical order.
    pub const ALL: [EmotionLabel; 6] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Fear,
        EmotionLabel::Surprise,
        EmotionLabel::Neutral,
    ];

    /// The wire/display form of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Neutral => "neutral",
        }
    }

    /// Returns a human-readable description of this label.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Happy => "Positive, upbeat affect",
            Self::Sad => "Negative, low-energy affect",
            Self::Angry => "Negative, high-energy affect",
            Self::Fear => "Anxiety, dread, or nervousness",
            Self::Surprise => "Astonishment of either valence",
            Self::Neutral => "No detectable affect",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "sad" => Ok(Self::Sad),
            "angry" => Ok(Self::Angry),
            "fear" => Ok(Self::Fear),
            "surprise" => Ok(Self::Surprise),
            "neutral" => Ok(Self::Neutral),
            other => Err(format!("unknown emotion label: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(EmotionLabel::default(), EmotionLabel::Neutral);
    }

    #[test]
    fn test_all_covers_every_variant_once() {
        for label in EmotionLabel::ALL {
            assert_eq!(
                EmotionLabel::ALL.iter().filter(|l| **l == label).count(),
                1
            );
        }
        assert_eq!(EmotionLabel::ALL.len(), 6);
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(EmotionLabel::ALL[0], EmotionLabel::Happy);
        assert_eq!(EmotionLabel::ALL[1], EmotionLabel::Sad);
        assert_eq!(EmotionLabel::ALL[2], EmotionLabel::Angry);
        assert_eq!(EmotionLabel::ALL[3], EmotionLabel::Fear);
        assert_eq!(EmotionLabel::ALL[4], EmotionLabel::Surprise);
        assert_eq!(EmotionLabel::ALL[5], EmotionLabel::Neutral);
    }

    #[test]
    fn test_round_trip_as_str_from_str() {
        for label in EmotionLabel::ALL {
            assert_eq!(label.as_str().parse::<EmotionLabel>().unwrap(), label);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("HAPPY".parse::<EmotionLabel>().unwrap(), EmotionLabel::Happy);
        assert_eq!(" Fear ".parse::<EmotionLabel>().unwrap(), EmotionLabel::Fear);
    }

    #[test]
    fn test_from_str_unknown_is_err() {
        assert!("joyful".parse::<EmotionLabel>().is_err());
        assert!("".parse::<EmotionLabel>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&EmotionLabel::Surprise).unwrap();
        assert_eq!(json, "\"surprise\"");
        let back: EmotionLabel = serde_json::from_str("\"angry\"").unwrap();
        assert_eq!(back, EmotionLabel::Angry);
    }
}
