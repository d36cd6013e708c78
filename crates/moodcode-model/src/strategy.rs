//! The model-backed classification strategy.
//!
//! Wraps [`EmotionNet`] behind a guarded one-time availability probe. The
//! probe runs on the first classification call; concurrent callers block on
//! the state lock until it settles. A failed probe is recorded and never
//! retried for the lifetime of the strategy, so a missing model costs one
//! filesystem check per process, not one per call.
//!
//! Nothing escapes this strategy as a panic or hard failure: load problems
//! surface as `StrategyError::Unavailable` and per-call faults as
//! `StrategyError::Inference`, both of which the chain absorbs.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use moodcode_core::{EmotionLabel, EmotionStrategy, RawLabelMapping, StrategyError, StrategyResult};

use crate::config::ModelConfig;
use crate::net::EmotionNet;

/// Probe state machine. `Unavailable` is terminal.
enum LoadState {
    Unprobed,
    Ready(Arc<EmotionNet>),
    Unavailable(String),
}

/// Emotion strategy backed by the candle net.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use moodcode_core::ClassifierChain;
/// use moodcode_model::{ModelConfig, ModelStrategy};
///
/// # async fn example() {
/// let chain = ClassifierChain::builder()
///     .strategy(Arc::new(ModelStrategy::new(ModelConfig::default())))
///     .build();
/// let label = chain.classify("I can't believe it worked!").await;
/// # let _ = label;
/// # }
/// ```
pub struct ModelStrategy {
    state: RwLock<LoadState>,
    config: ModelConfig,
    mapping: RawLabelMapping,
}

impl ModelStrategy {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            state: RwLock::new(LoadState::Unprobed),
            config,
            mapping: RawLabelMapping::default(),
        }
    }

    /// Replace the raw-label normalization table.
    pub fn with_mapping(mut self, mapping: RawLabelMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Force the availability probe now and report the outcome. Useful at
    /// startup so the first classification does not pay the load cost.
    pub async fn probe(&self) -> bool {
        self.net().await.is_ok()
    }

    /// Human-readable probe state, for diagnostics.
    pub async fn status(&self) -> String {
        match &*self.state.read().await {
            LoadState::Unprobed => "not probed".to_string(),
            LoadState::Ready(_) => "ready".to_string(),
            LoadState::Unavailable(reason) => format!("unavailable: {reason}"),
        }
    }

    /// Get the loaded net, probing at most once.
    async fn net(&self) -> StrategyResult<Arc<EmotionNet>> {
        {
            let state = self.state.read().await;
            match &*state {
                LoadState::Ready(net) => return Ok(net.clone()),
                LoadState::Unavailable(reason) => {
                    return Err(StrategyError::unavailable("model", reason.clone()))
                }
                LoadState::Unprobed => {}
            }
        }

        let mut state = self.state.write().await;
        // Another caller may have settled the probe while this one waited
        // for the write lock.
        match &*state {
            LoadState::Ready(net) => return Ok(net.clone()),
            LoadState::Unavailable(reason) => {
                return Err(StrategyError::unavailable("model", reason.clone()))
            }
            LoadState::Unprobed => {}
        }

        let model_dir = self.config.resolve_model_dir();
        let max_tokens = self.config.max_tokens;
        tracing::info!("probing emotion net at {}", model_dir.display());

        let loaded = tokio::task::spawn_blocking(move || EmotionNet::load(&model_dir, max_tokens))
            .await
            .map_err(|e| format!("load task failed: {e}"))
            .and_then(|r| r.map_err(|e| e.to_string()));

        match loaded {
            Ok(net) => {
                let net = Arc::new(net);
                *state = LoadState::Ready(net.clone());
                Ok(net)
            }
            Err(reason) => {
                tracing::warn!(%reason, "emotion net unavailable, recording probe failure");
                *state = LoadState::Unavailable(reason.clone());
                Err(StrategyError::unavailable("model", reason))
            }
        }
    }
}

/// Cut `text` at a character boundary after at most `max_chars` characters.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[async_trait]
impl EmotionStrategy for ModelStrategy {
    fn name(&self) -> &'static str {
        "model"
    }

    async fn try_classify(&self, text: &str) -> StrategyResult<Option<EmotionLabel>> {
        let net = self.net().await?;
        let snippet = truncate_chars(text, self.config.max_input_chars);

        match net.predict(snippet) {
            Ok(prediction) => {
                let label = self.mapping.resolve(&prediction.label);
                tracing::debug!(
                    raw = %prediction.label,
                    confidence = prediction.confidence,
                    %label,
                    "model prediction"
                );
                Ok(Some(label))
            }
            Err(err) => Err(StrategyError::inference("model", err.to_string())),
        }
    }
}
