//! Heuristic sentiment classification.
//!
//! Maps a polarity/subjectivity pair to a label through fixed thresholds.
//! This is a heuristic, not a semantic classifier: subjective text with
//! near-zero polarity is read as anger, which conflates heated-but-balanced
//! text with genuinely angry text. That imprecision is preserved behavior,
//! pinned by tests, because downstream deployments depend on it.
//!
//! The polarity/subjectivity computation sits behind the
//! [`SentimentAnalyzer`] trait so tests can substitute exact values; the
//! default analyzer is a word-valence lexicon.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::EmotionStrategy;
use crate::config::HeuristicConfig;
use crate::error::{StrategyError, StrategyResult};
use crate::types::EmotionLabel;

/// Scalar sentiment readings for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentAssessment {
    /// Net sentiment in `[-1, 1]`; positive is pleasant.
    pub polarity: f32,

    /// Proportion of emotionally loaded content in `[0, 1]`.
    pub subjectivity: f32,
}

impl SentimentAssessment {
    /// Create an assessment, clamping both components to their ranges.
    pub fn new(polarity: f32, subjectivity: f32) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    /// A fully neutral reading.
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

impl Default for SentimentAssessment {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Produces polarity/subjectivity readings for text.
///
/// An analyzer that cannot operate (missing data, failed load) returns
/// [`StrategyError::Unavailable`]; the chain then skips the heuristic
/// strategy for that call.
pub trait SentimentAnalyzer: Send + Sync {
    fn assess(&self, text: &str) -> StrategyResult<SentimentAssessment>;
}

/// Word-valence lexicon, the default [`SentimentAnalyzer`].
///
/// Tokenizes on non-alphabetic characters, case-folds, and looks up each
/// word's valence in `[-1, 1]`. Polarity is the mean valence over matched
/// words; subjectivity is the matched-word proportion.
///
/// # Example
///
/// ```
/// use moodcode_core::{SentimentAnalyzer, ValenceLexicon};
///
/// let lexicon = ValenceLexicon::default();
/// let reading = lexicon.assess("what a wonderful day").unwrap();
/// assert!(reading.polarity > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ValenceLexicon {
    words: HashMap<String, f32>,
}

impl ValenceLexicon {
    /// An empty lexicon. Reports itself unavailable from `assess`.
    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Add a positively valenced word; `intensity` is clamped to `[0, 1]`.
    pub fn add_positive(&mut self, word: &str, intensity: f32) {
        self.words
            .insert(word.to_lowercase(), intensity.clamp(0.0, 1.0));
    }

    /// Add a negatively valenced word; `intensity` is clamped to `[0, 1]`
    /// and stored as a negative valence.
    pub fn add_negative(&mut self, word: &str, intensity: f32) {
        self.words
            .insert(word.to_lowercase(), -intensity.clamp(0.0, 1.0));
    }

    /// The valence of a word, if registered.
    pub fn valence(&self, word: &str) -> Option<f32> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn compute(&self, text: &str) -> SentimentAssessment {
        let mut valence_sum = 0.0f32;
        let mut word_count = 0usize;
        let mut matched = 0usize;

        for word in text.split(|c: char| !c.is_alphabetic()) {
            if word.is_empty() {
                continue;
            }
            word_count += 1;
            if let Some(valence) = self.valence(word) {
                matched += 1;
                valence_sum += valence;
            }
        }

        if word_count == 0 || matched == 0 {
            return SentimentAssessment::neutral();
        }

        let polarity = valence_sum / matched as f32;
        let subjectivity = matched as f32 / word_count as f32;
        SentimentAssessment::new(polarity, subjectivity)
    }
}

impl SentimentAnalyzer for ValenceLexicon {
    fn assess(&self, text: &str) -> StrategyResult<SentimentAssessment> {
        if self.words.is_empty() {
            return Err(StrategyError::unavailable(
                "sentiment",
                "valence lexicon is empty",
            ));
        }
        Ok(self.compute(text))
    }
}

impl Default for ValenceLexicon {
    /// Common emotional vocabulary in three intensity tiers per valence.
    fn default() -> Self {
        let mut lexicon = Self::empty();

        for word in [
            "amazing",
            "fantastic",
            "wonderful",
            "excellent",
            "brilliant",
            "superb",
            "outstanding",
            "perfect",
            "elated",
            "thrilled",
        ] {
            lexicon.add_positive(word, 0.9);
        }

        for word in [
            "happy", "glad", "great", "love", "joy", "excited", "pleased", "delighted", "good",
            "nice", "fun", "lovely",
        ] {
            lexicon.add_positive(word, 0.6);
        }

        for word in ["okay", "fine", "decent", "calm", "content", "hopeful"] {
            lexicon.add_positive(word, 0.3);
        }

        for word in [
            "terrible",
            "awful",
            "horrible",
            "dreadful",
            "devastated",
            "heartbroken",
            "furious",
            "hate",
        ] {
            lexicon.add_negative(word, 0.9);
        }

        for word in [
            "sad",
            "unhappy",
            "depressed",
            "miserable",
            "gloomy",
            "angry",
            "mad",
            "scared",
            "afraid",
            "terrified",
            "bad",
        ] {
            lexicon.add_negative(word, 0.6);
        }

        for word in [
            "annoyed", "irritated", "nervous", "anxious", "worried", "tired", "boring", "dull",
        ] {
            lexicon.add_negative(word, 0.3);
        }

        lexicon
    }
}

/// The heuristic sentiment strategy: analyzer reading plus threshold policy.
///
/// Whenever the analyzer is available this strategy yields a label (possibly
/// neutral), so strategies after it in a chain only run when the analyzer is
/// unavailable.
pub struct HeuristicSentimentStrategy {
    analyzer: Arc<dyn SentimentAnalyzer>,
    config: HeuristicConfig,
}

impl HeuristicSentimentStrategy {
    /// Strategy with the default [`ValenceLexicon`] analyzer.
    pub fn new(config: HeuristicConfig) -> Self {
        Self {
            analyzer: Arc::new(ValenceLexicon::default()),
            config,
        }
    }

    /// Strategy with an injected analyzer, for alternate lexicons or test
    /// stubs.
    pub fn with_analyzer(config: HeuristicConfig, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self { analyzer, config }
    }

    /// The threshold decision policy. First match wins.
    pub fn decide(&self, reading: SentimentAssessment) -> EmotionLabel {
        if reading.polarity > self.config.positive_polarity {
            return EmotionLabel::Happy;
        }
        if reading.polarity < self.config.negative_polarity {
            return EmotionLabel::Sad;
        }
        if reading.subjectivity > self.config.subjectivity_floor
            && reading.polarity.abs() < self.config.polarity_deadband
        {
            return EmotionLabel::Angry;
        }
        EmotionLabel::Neutral
    }
}

#[async_trait]
impl EmotionStrategy for HeuristicSentimentStrategy {
    fn name(&self) -> &'static str {
        "sentiment"
    }

    async fn try_classify(&self, text: &str) -> StrategyResult<Option<EmotionLabel>> {
        let reading = self.analyzer.assess(text)?;
        tracing::debug!(
            polarity = reading.polarity,
            subjectivity = reading.subjectivity,
            "sentiment reading"
        );
        Ok(Some(self.decide(reading)))
    }
}
