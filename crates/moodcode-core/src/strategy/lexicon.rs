//! Keyword-lexicon classification, the guaranteed last resort.
//!
//! Matching is deliberately crude: keyword stems are counted as substring
//! occurrences in the case-folded input, not as whole tokens, so "sadly"
//! matches the stem "sad". The label with the highest total count wins and
//! ties resolve to the earliest label in canonical order. This strategy has
//! no external dependency and must never fail.

use async_trait::async_trait;

use super::EmotionStrategy;
use crate::error::StrategyResult;
use crate::types::EmotionLabel;

/// Keyword stems per label, kept in canonical label order.
///
/// # Example
///
/// ```
/// use moodcode_core::{EmotionLabel, KeywordLexicon};
///
/// let lexicon = KeywordLexicon::default();
/// assert_eq!(lexicon.classify("what a fantastic day"), EmotionLabel::Happy);
/// assert_eq!(lexicon.classify("stock report attached"), EmotionLabel::Neutral);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordLexicon {
    /// One entry per label, canonical order. The order is the tie-break.
    entries: Vec<(EmotionLabel, Vec<String>)>,
}

impl KeywordLexicon {
    /// An empty lexicon: every label scores zero, everything classifies as
    /// neutral.
    pub fn empty() -> Self {
        Self {
            entries: EmotionLabel::ALL
                .into_iter()
                .map(|label| (label, Vec::new()))
                .collect(),
        }
    }

    /// Add a keyword stem for a label. Stems are stored case-folded.
    pub fn add_keyword(&mut self, label: EmotionLabel, stem: &str) {
        if let Some((_, stems)) = self.entries.iter_mut().find(|(l, _)| *l == label) {
            let stem = stem.to_lowercase();
            if !stem.is_empty() && !stems.contains(&stem) {
                stems.push(stem);
            }
        }
    }

    /// Number of stems registered for `label`.
    pub fn keyword_count(&self, label: EmotionLabel) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, stems)| stems.len())
            .unwrap_or(0)
    }

    /// Score every label against `text`: the sum of non-overlapping
    /// substring occurrences of each of its stems in the case-folded input.
    pub fn score(&self, text: &str) -> Vec<(EmotionLabel, usize)> {
        let folded = text.to_lowercase();
        self.entries
            .iter()
            .map(|(label, stems)| {
                let count = stems
                    .iter()
                    .map(|stem| folded.matches(stem.as_str()).count())
                    .sum();
                (*label, count)
            })
            .collect()
    }

    /// Classify `text`: highest total count wins, ties resolve to the
    /// earlier label, all-zero resolves to neutral.
    pub fn classify(&self, text: &str) -> EmotionLabel {
        let mut best = (EmotionLabel::Neutral, 0usize);
        for (label, count) in self.score(text) {
            // Strictly greater keeps the first-defined label on ties.
            if count > best.1 {
                best = (label, count);
            }
        }
        if best.1 == 0 {
            EmotionLabel::Neutral
        } else {
            best.0
        }
    }
}

impl Default for KeywordLexicon {
    /// The compact stem lists of the reference deployment.
    fn default() -> Self {
        let mut lexicon = Self::empty();
        let defaults: [(EmotionLabel, &[&str]); 6] = [
            (
                EmotionLabel::Happy,
                &[
                    "happy", "joy", "glad", "excited", "elated", "amazing", "great", "fantastic",
                    "love", "yay",
                ],
            ),
            (
                EmotionLabel::Sad,
                &["sad", "down", "unhappy", "depressed", "sorrow", "tears"],
            ),
            (
                EmotionLabel::Angry,
                &["angry", "mad", "furious", "irritated", "annoyed", "hate"],
            ),
            (
                EmotionLabel::Fear,
                &["scared", "afraid", "fear", "terrified", "anxious", "nervous"],
            ),
            (
                EmotionLabel::Surprise,
                &["surprised", "shocked", "wow", "unexpected"],
            ),
            (
                EmotionLabel::Neutral,
                &["okay", "fine", "neutral", "normal"],
            ),
        ];
        for (label, stems) in defaults {
            for stem in stems {
                lexicon.add_keyword(label, stem);
            }
        }
        lexicon
    }
}

/// The terminal strategy of every chain. Wraps a [`KeywordLexicon`] and is
/// always available.
#[derive(Debug, Clone, Default)]
pub struct LexiconStrategy {
    lexicon: KeywordLexicon,
}

impl LexiconStrategy {
    pub fn new(lexicon: KeywordLexicon) -> Self {
        Self { lexicon }
    }

    /// Direct synchronous classification; the chain calls this for the
    /// terminal step so the result cannot be lost to an error path.
    pub fn classify_text(&self, text: &str) -> EmotionLabel {
        self.lexicon.classify(text)
    }

    pub fn lexicon(&self) -> &KeywordLexicon {
        &self.lexicon
    }
}

#[async_trait]
impl EmotionStrategy for LexiconStrategy {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    async fn try_classify(&self, text: &str) -> StrategyResult<Option<EmotionLabel>> {
        Ok(Some(self.classify_text(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_is_neutral() {
        let lexicon = KeywordLexicon::default();
        assert_eq!(
            lexicon.classify("the quarterly report is attached"),
            EmotionLabel::Neutral
        );
    }

    #[test]
    fn test_multiple_hits_outweigh_single() {
        let lexicon = KeywordLexicon::default();
        // "happy" and "glad" both hit; no other label scores above one.
        assert_eq!(
            lexicon.classify("I am so happy and glad"),
            EmotionLabel::Happy
        );
    }

    #[test]
    fn test_substring_matching_not_tokenized() {
        let lexicon = KeywordLexicon::default();
        // "sadly" contains the stem "sad".
        assert_eq!(lexicon.classify("sadly it broke"), EmotionLabel::Sad);
    }

    #[test]
    fn test_case_folding() {
        let lexicon = KeywordLexicon::default();
        assert_eq!(lexicon.classify("FURIOUS about this"), EmotionLabel::Angry);
    }

    #[test]
    fn test_tie_resolves_to_earlier_label() {
        let lexicon = KeywordLexicon::default();
        // "wow" scores surprise, "tears" scores sad, one hit each; sad is
        // earlier in canonical order.
        let scores = lexicon.score("wow, tears");
        let sad = scores.iter().find(|(l, _)| *l == EmotionLabel::Sad).unwrap();
        let surprise = scores
            .iter()
            .find(|(l, _)| *l == EmotionLabel::Surprise)
            .unwrap();
        assert_eq!(sad.1, 1);
        assert_eq!(surprise.1, 1);
        assert_eq!(lexicon.classify("wow, tears"), EmotionLabel::Sad);
    }

    #[test]
    fn test_repeated_stem_counts_each_occurrence() {
        let lexicon = KeywordLexicon::default();
        // Two "wow" hits beat one "tears" hit.
        assert_eq!(lexicon.classify("wow wow, tears"), EmotionLabel::Surprise);
    }

    #[test]
    fn test_custom_keyword() {
        let mut lexicon = KeywordLexicon::empty();
        lexicon.add_keyword(EmotionLabel::Fear, "spider");
        assert_eq!(lexicon.classify("a spider! a spider!"), EmotionLabel::Fear);
        assert_eq!(lexicon.keyword_count(EmotionLabel::Fear), 1);
    }

    #[test]
    fn test_empty_lexicon_is_neutral() {
        let lexicon = KeywordLexicon::empty();
        assert_eq!(lexicon.classify("happy sad angry"), EmotionLabel::Neutral);
    }

    #[tokio::test]
    async fn test_strategy_always_returns_some() {
        let strategy = LexiconStrategy::default();
        let result = strategy.try_classify("whatever text").await.unwrap();
        assert!(result.is_some());
    }
}
