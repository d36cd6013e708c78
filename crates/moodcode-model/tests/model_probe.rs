//! Probe and degradation behavior of the model strategy.
//!
//! None of these tests require model artifacts. The full-inference test at
//! the bottom runs only when a real model directory is present.

use std::path::PathBuf;
use std::sync::Arc;

use moodcode_core::{ClassifierChain, EmotionLabel, EmotionStrategy, StrategyError};
use moodcode_model::{EmotionNet, ModelConfig, ModelStrategy};

fn missing_dir_config() -> ModelConfig {
    ModelConfig::with_dir("/nonexistent/moodcode-model-test")
}

#[tokio::test]
async fn test_missing_artifacts_report_unavailable() {
    let strategy = ModelStrategy::new(missing_dir_config());

    let err = strategy.try_classify("some text").await.unwrap_err();
    assert!(matches!(err, StrategyError::Unavailable { .. }));
    assert_eq!(err.strategy(), "model");
}

#[tokio::test]
async fn test_failed_probe_is_recorded_not_retried() {
    let strategy = ModelStrategy::new(missing_dir_config());

    assert_eq!(strategy.status().await, "not probed");
    assert!(!strategy.probe().await);
    assert!(strategy.status().await.starts_with("unavailable"));

    // Still unavailable on subsequent calls, from the recorded state.
    let err = strategy.try_classify("more text").await.unwrap_err();
    assert!(matches!(err, StrategyError::Unavailable { .. }));
}

#[tokio::test]
async fn test_concurrent_first_calls_settle_to_one_probe() {
    let strategy = Arc::new(ModelStrategy::new(missing_dir_config()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let strategy = strategy.clone();
            tokio::spawn(async move { strategy.try_classify("race").await })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap();
        assert!(matches!(result, Err(StrategyError::Unavailable { .. })));
    }
    assert!(strategy.status().await.starts_with("unavailable"));
}

#[tokio::test]
async fn test_chain_stays_total_without_model() {
    let chain = ClassifierChain::builder()
        .strategy(Arc::new(ModelStrategy::new(missing_dir_config())))
        .build();

    assert_eq!(chain.classify("").await, EmotionLabel::Neutral);
    assert_eq!(chain.classify("sadly it broke").await, EmotionLabel::Sad);
}

#[tokio::test]
async fn test_partial_artifacts_report_unavailable() {
    // Directory exists but holds none of the required files.
    let dir = tempfile::tempdir().unwrap();
    let strategy = ModelStrategy::new(ModelConfig::with_dir(dir.path()));

    let err = strategy.try_classify("text").await.unwrap_err();
    assert!(matches!(err, StrategyError::Unavailable { .. }));
}

/// Full load and inference against real artifacts. Skipped when no model
/// directory is installed.
#[tokio::test]
async fn test_inference_with_installed_model() {
    let model_dir = PathBuf::from("models/emotion");
    if !model_dir.exists() {
        eprintln!(
            "skipping: model directory not found at {}",
            model_dir.display()
        );
        return;
    }

    let net = match EmotionNet::load(&model_dir, 256) {
        Ok(net) => net,
        Err(e) => {
            eprintln!("skipping: failed to load model: {e}");
            return;
        }
    };

    let prediction = net.predict("I love this so much!").unwrap();
    assert!(!prediction.label.is_empty());
    assert!(prediction.confidence > 0.0 && prediction.confidence <= 1.0);

    let strategy = ModelStrategy::new(ModelConfig::with_dir(&model_dir));
    let label = strategy.try_classify("I love this so much!").await.unwrap();
    assert!(label.is_some());
}
