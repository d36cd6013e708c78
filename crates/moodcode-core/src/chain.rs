//! Ordered fallback classification.
//!
//! The chain tries each injected strategy in order and returns the first
//! label produced. Strategies that are unavailable or fault are skipped with
//! a debug log. The terminal keyword lexicon is held as a concrete value,
//! not a trait object, so the final step cannot fail and `classify` is
//! total: it always returns a valid label.

use std::sync::Arc;

use crate::config::ChainConfig;
use crate::strategy::{EmotionStrategy, KeywordLexicon, LexiconStrategy};
use crate::types::{EmotionLabel, LabelSet};

/// The ordered fallback classifier.
///
/// Construct with [`ClassifierChain::builder`]; strategies run in insertion
/// order, before the built-in lexicon terminal.
///
/// # Determinism
///
/// For fixed strategy availability and fixed text, repeated calls return
/// the same label. The chain holds no mutable state; the only one-time
/// mutation in the system is the model strategy's internal availability
/// probe, which is guarded by its own lock.
///
/// # Example
///
/// ```
/// use moodcode_core::{ClassifierChain, EmotionLabel};
///
/// # async fn example() {
/// let chain = ClassifierChain::builder().build();
/// assert_eq!(chain.classify("").await, EmotionLabel::Neutral);
/// assert_eq!(chain.classify("so happy and glad").await, EmotionLabel::Happy);
/// # }
/// ```
pub struct ClassifierChain {
    strategies: Vec<Arc<dyn EmotionStrategy>>,
    terminal: LexiconStrategy,
    labels: LabelSet,
}

impl ClassifierChain {
    pub fn builder() -> ClassifierChainBuilder {
        ClassifierChainBuilder::new()
    }

    /// Classify `text` into exactly one label. Total: never errors, never
    /// panics, empty or all-whitespace input short-circuits to neutral.
    pub async fn classify(&self, text: &str) -> EmotionLabel {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("degenerate input, returning neutral");
            return EmotionLabel::Neutral;
        }

        for strategy in &self.strategies {
            match strategy.try_classify(trimmed).await {
                Ok(Some(label)) => {
                    tracing::debug!(strategy = strategy.name(), %label, "strategy produced label");
                    return self.labels.fold(label);
                }
                Ok(None) => {
                    tracing::debug!(strategy = strategy.name(), "no signal, falling through");
                }
                Err(err) => {
                    tracing::debug!(strategy = strategy.name(), %err, "skipped, falling through");
                }
            }
        }

        let label = self.terminal.classify_text(trimmed);
        tracing::debug!(%label, "lexicon terminal produced label");
        self.labels.fold(label)
    }

    /// Names of the injected strategies in invocation order, excluding the
    /// terminal lexicon.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// The label set this chain folds results into.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }
}

/// Builder for [`ClassifierChain`]. Strategies are optional; a bare build
/// yields a lexicon-only chain, which is still total.
pub struct ClassifierChainBuilder {
    strategies: Vec<Arc<dyn EmotionStrategy>>,
    lexicon: KeywordLexicon,
    labels: LabelSet,
}

impl ClassifierChainBuilder {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            lexicon: KeywordLexicon::default(),
            labels: LabelSet::full(),
        }
    }

    /// Append a strategy; invocation order is insertion order.
    pub fn strategy(mut self, strategy: Arc<dyn EmotionStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Replace the terminal lexicon.
    pub fn lexicon(mut self, lexicon: KeywordLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Restrict the labels the chain may return.
    pub fn labels(mut self, labels: LabelSet) -> Self {
        self.labels = labels;
        self
    }

    /// Apply the label set from a [`ChainConfig`].
    pub fn config(mut self, config: &ChainConfig) -> Self {
        self.labels = config.labels.clone();
        self
    }

    pub fn build(self) -> ClassifierChain {
        ClassifierChain {
            strategies: self.strategies,
            terminal: LexiconStrategy::new(self.lexicon),
            labels: self.labels,
        }
    }
}

impl Default for ClassifierChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_input_short_circuits() {
        let chain = ClassifierChain::builder().build();
        assert_eq!(chain.classify("").await, EmotionLabel::Neutral);
        assert_eq!(chain.classify("   \t\n").await, EmotionLabel::Neutral);
    }

    #[tokio::test]
    async fn test_bare_chain_falls_to_lexicon() {
        let chain = ClassifierChain::builder().build();
        assert_eq!(chain.classify("I hate this").await, EmotionLabel::Angry);
    }

    #[tokio::test]
    async fn test_label_folding_applies_to_terminal() {
        let chain = ClassifierChain::builder()
            .labels(LabelSet::core_four())
            .build();
        // "terrified" hits fear, which the four-label set folds away.
        assert_eq!(chain.classify("I am terrified").await, EmotionLabel::Neutral);
    }

    #[test]
    fn test_builder_reports_strategy_names() {
        let chain = ClassifierChain::builder()
            .strategy(Arc::new(LexiconStrategy::default()))
            .build();
        assert_eq!(chain.strategy_names(), vec!["lexicon"]);
    }
}
