//! Classification strategies.
//!
//! A strategy is one candidate method for deriving an [`EmotionLabel`] from
//! text. Strategies are independent: each may be unavailable (its backing
//! capability failed to initialize) or yield no signal for a given input,
//! and the chain in [`crate::chain`] falls through to the next one.
//!
//! Implementations in this crate:
//!
//! - [`HeuristicSentimentStrategy`]: polarity/subjectivity thresholds
//! - [`LexiconStrategy`]: keyword substring counting, never unavailable
//!
//! The model-backed strategy lives in the `moodcode-model` crate and
//! implements the same trait.

mod lexicon;
mod sentiment;

use async_trait::async_trait;

use crate::error::StrategyResult;
use crate::types::EmotionLabel;

pub use lexicon::{KeywordLexicon, LexiconStrategy};
pub use sentiment::{
    HeuristicSentimentStrategy, SentimentAnalyzer, SentimentAssessment, ValenceLexicon,
};

/// One candidate method for classifying text into an emotion label.
///
/// # Contract
///
/// - `Ok(Some(label))`: the strategy is confident; the chain stops here.
/// - `Ok(None)`: the strategy ran but found no signal; the chain continues.
/// - `Err(_)`: the strategy is unavailable or faulted; the chain continues.
///   Implementations must convert every internal fault into an error rather
///   than panic.
///
/// # Thread Safety
///
/// `Send + Sync` so a chain can be shared across async tasks.
#[async_trait]
pub trait EmotionStrategy: Send + Sync {
    /// Short stable name used in logs.
    fn name(&self) -> &'static str;

    /// Attempt to classify `text`. Never panics; faults become errors.
    async fn try_classify(&self, text: &str) -> StrategyResult<Option<EmotionLabel>>;
}
