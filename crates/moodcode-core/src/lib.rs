//! Emotion classification core for moodcode.
//!
//! Maps a short piece of free-form text to one label from a closed emotion
//! enumeration using an ordered chain of fallback strategies: a model-backed
//! classifier (see the `moodcode-model` crate), a lexical sentiment
//! heuristic, and a keyword lexicon that can never fail. The chain is total:
//! `classify` always returns a label, and strategy faults degrade into
//! fall-through, never into errors.
//!
//! # Modules
//!
//! - [`types`]: the label enumeration, configurable label subsets, and the
//!   raw model-label normalization table
//! - [`strategy`]: the strategy trait plus the sentiment and lexicon
//!   implementations
//! - [`chain`]: the ordered fallback orchestration
//! - [`config`]: serde configuration with validated defaults
//! - [`error`]: strategy-local error types, absorbed by the chain
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use moodcode_core::{ClassifierChain, EmotionLabel, HeuristicConfig, HeuristicSentimentStrategy};
//!
//! # async fn example() {
//! let chain = ClassifierChain::builder()
//!     .strategy(Arc::new(HeuristicSentimentStrategy::new(HeuristicConfig::default())))
//!     .build();
//!
//! let label = chain.classify("this is absolutely wonderful").await;
//! assert_eq!(label, EmotionLabel::Happy);
//! # }
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod strategy;
pub mod types;

pub use chain::{ClassifierChain, ClassifierChainBuilder};
pub use config::{ChainConfig, HeuristicConfig};
pub use error::{StrategyError, StrategyResult};
pub use strategy::{
    EmotionStrategy, HeuristicSentimentStrategy, KeywordLexicon, LexiconStrategy,
    SentimentAnalyzer, SentimentAssessment, ValenceLexicon,
};
pub use types::{EmotionLabel, LabelSet, RawLabelMapping};
