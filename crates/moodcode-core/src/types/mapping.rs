//! Normalization of raw model output labels.
//!
//! Classification models ship their own label vocabularies ("joy", "LABEL_2",
//! "sadness"). The mapping here is an explicit finite table from those raw
//! strings to the canonical enumeration, with `Neutral` as the defined
//! default for anything unmapped. Keeping it a table makes the normalization
//! auditable and testable on its own.

use std::collections::HashMap;

use super::label::EmotionLabel;

/// Finite lookup table from raw classifier output strings to canonical
/// labels.
///
/// Lookups are case-insensitive and trim whitespace. Unmapped strings
/// resolve to [`EmotionLabel::Neutral`].
///
/// # Example
///
/// ```
/// use moodcode_core::{EmotionLabel, RawLabelMapping};
///
/// let mapping = RawLabelMapping::default();
/// assert_eq!(mapping.resolve("joy"), EmotionLabel::Happy);
/// assert_eq!(mapping.resolve("LOVE"), EmotionLabel::Happy);
/// assert_eq!(mapping.resolve("bewilderment"), EmotionLabel::Neutral);
/// ```
#[derive(Debug, Clone)]
pub struct RawLabelMapping {
    entries: HashMap<String, EmotionLabel>,
}

impl RawLabelMapping {
    /// An empty mapping; every lookup resolves to `Neutral`.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a raw string for a canonical label, replacing any previous
    /// entry. The key is stored case-folded.
    pub fn insert(&mut self, raw: &str, label: EmotionLabel) {
        self.entries.insert(raw.to_lowercase(), label);
    }

    /// Resolve a raw model label to the canonical enumeration.
    pub fn resolve(&self, raw: &str) -> EmotionLabel {
        self.entries
            .get(raw.trim().to_lowercase().as_str())
            .copied()
            .unwrap_or(EmotionLabel::Neutral)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RawLabelMapping {
    /// The vocabulary of the emotion models this project is paired with,
    /// plus common synonyms.
    fn default() -> Self {
        let mut mapping = Self::empty();
        for raw in ["happy", "happiness", "joy", "love"] {
            mapping.insert(raw, EmotionLabel::Happy);
        }
        for raw in ["sad", "sadness"] {
            mapping.insert(raw, EmotionLabel::Sad);
        }
        for raw in ["angry", "anger"] {
            mapping.insert(raw, EmotionLabel::Angry);
        }
        mapping.insert("fear", EmotionLabel::Fear);
        mapping.insert("surprise", EmotionLabel::Surprise);
        mapping.insert("neutral", EmotionLabel::Neutral);
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_exhaustive() {
        let mapping = RawLabelMapping::default();
        let cases = [
            ("happy", EmotionLabel::Happy),
            ("happiness", EmotionLabel::Happy),
            ("joy", EmotionLabel::Happy),
            ("love", EmotionLabel::Happy),
            ("sad", EmotionLabel::Sad),
            ("sadness", EmotionLabel::Sad),
            ("angry", EmotionLabel::Angry),
            ("anger", EmotionLabel::Angry),
            ("fear", EmotionLabel::Fear),
            ("surprise", EmotionLabel::Surprise),
            ("neutral", EmotionLabel::Neutral),
        ];
        assert_eq!(mapping.len(), cases.len());
        for (raw, expected) in cases {
            assert_eq!(mapping.resolve(raw), expected, "raw label {raw}");
        }
    }

    #[test]
    fn test_unmapped_resolves_to_neutral() {
        let mapping = RawLabelMapping::default();
        assert_eq!(mapping.resolve("disgust"), EmotionLabel::Neutral);
        assert_eq!(mapping.resolve("LABEL_3"), EmotionLabel::Neutral);
        assert_eq!(mapping.resolve(""), EmotionLabel::Neutral);
    }

    #[test]
    fn test_resolve_is_case_insensitive_and_trims() {
        let mapping = RawLabelMapping::default();
        assert_eq!(mapping.resolve("Joy"), EmotionLabel::Happy);
        assert_eq!(mapping.resolve("  ANGER  "), EmotionLabel::Angry);
    }

    #[test]
    fn test_insert_overrides() {
        let mut mapping = RawLabelMapping::default();
        mapping.insert("love", EmotionLabel::Surprise);
        assert_eq!(mapping.resolve("love"), EmotionLabel::Surprise);
    }

    #[test]
    fn test_empty_mapping_is_all_neutral() {
        let mapping = RawLabelMapping::empty();
        assert_eq!(mapping.resolve("joy"), EmotionLabel::Neutral);
        assert!(mapping.is_empty());
    }
}
