//! The emotion net: a compact embedding-bag text classifier.
//!
//! Artifacts live in one directory:
//!
//! - `tokenizer.json` — HuggingFace tokenizer
//! - `config.json` — carries `id2label`, the net's raw label vocabulary
//! - `model.safetensors` — `embeddings.weight` (vocab x hidden),
//!   `classifier.weight` (labels x hidden), `classifier.bias` (labels)
//!
//! Inference is tokenize, embedding lookup, mean pooling, linear head,
//! softmax. CPU tensors throughout; the net is small enough that a GPU
//! would be wasted on it.

use std::collections::HashMap;
use std::path::Path;

use candle_core::{DType, Device, Tensor};
use serde::Deserialize;
use tokenizers::Tokenizer;

use crate::error::{ModelError, ModelResult};

/// Tensor names expected in `model.safetensors`.
const EMBEDDINGS_TENSOR: &str = "embeddings.weight";
const CLASSIFIER_WEIGHT_TENSOR: &str = "classifier.weight";
const CLASSIFIER_BIAS_TENSOR: &str = "classifier.bias";

/// The slice of `config.json` the net needs.
#[derive(Debug, Deserialize)]
struct NetConfigJson {
    id2label: HashMap<String, String>,
}

/// A raw prediction: the net's own label string plus its softmax weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    pub label: String,
    pub confidence: f32,
}

/// Loaded emotion classification net.
pub struct EmotionNet {
    tokenizer: Tokenizer,
    embeddings: Tensor,
    classifier_weight: Tensor,
    classifier_bias: Tensor,
    /// Index to raw label string, from `config.json` `id2label`.
    label_vocabulary: Vec<String>,
    max_tokens: usize,
}

impl EmotionNet {
    /// Load all artifacts from `model_dir`.
    ///
    /// Validates tensor shapes against each other and against the label
    /// vocabulary, so `predict` can index without further checks.
    pub fn load(model_dir: &Path, max_tokens: usize) -> ModelResult<Self> {
        if !model_dir.is_dir() {
            return Err(ModelError::ArtifactsNotFound {
                path: model_dir.to_path_buf(),
                message: "directory does not exist".to_string(),
            });
        }

        let tokenizer_path = model_dir.join("tokenizer.json");
        if !tokenizer_path.exists() {
            return Err(ModelError::ArtifactsNotFound {
                path: model_dir.to_path_buf(),
                message: "tokenizer.json missing".to_string(),
            });
        }
        let tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(|e| {
            ModelError::tokenizer(format!(
                "failed to load {}: {e}",
                tokenizer_path.display()
            ))
        })?;

        let label_vocabulary = load_label_vocabulary(model_dir)?;

        let weights_path = model_dir.join("model.safetensors");
        if !weights_path.exists() {
            return Err(ModelError::ArtifactsNotFound {
                path: model_dir.to_path_buf(),
                message: "model.safetensors missing".to_string(),
            });
        }
        let tensors =
            candle_core::safetensors::load(&weights_path, &Device::Cpu).map_err(|e| {
                ModelError::weights(format!("failed to read {}: {e}", weights_path.display()))
            })?;

        let embeddings = take_tensor(&tensors, EMBEDDINGS_TENSOR)?;
        let classifier_weight = take_tensor(&tensors, CLASSIFIER_WEIGHT_TENSOR)?;
        let classifier_bias = take_tensor(&tensors, CLASSIFIER_BIAS_TENSOR)?;

        let (_vocab, hidden) = embeddings
            .dims2()
            .map_err(|e| ModelError::weights(format!("{EMBEDDINGS_TENSOR} is not rank 2: {e}")))?;
        let (num_labels, head_hidden) = classifier_weight.dims2().map_err(|e| {
            ModelError::weights(format!("{CLASSIFIER_WEIGHT_TENSOR} is not rank 2: {e}"))
        })?;
        let bias_len = classifier_bias.dims1().map_err(|e| {
            ModelError::weights(format!("{CLASSIFIER_BIAS_TENSOR} is not rank 1: {e}"))
        })?;

        if head_hidden != hidden {
            return Err(ModelError::weights(format!(
                "hidden size mismatch: embeddings {hidden}, classifier {head_hidden}"
            )));
        }
        if bias_len != num_labels {
            return Err(ModelError::weights(format!(
                "classifier bias length {bias_len} does not match {num_labels} labels"
            )));
        }
        if label_vocabulary.len() != num_labels {
            return Err(ModelError::config(format!(
                "id2label has {} entries but classifier emits {num_labels} logits",
                label_vocabulary.len()
            )));
        }

        tracing::info!(
            labels = num_labels,
            hidden,
            "emotion net loaded from {}",
            model_dir.display()
        );

        Ok(Self {
            tokenizer,
            embeddings,
            classifier_weight,
            classifier_bias,
            label_vocabulary,
            max_tokens,
        })
    }

    /// The net's raw label vocabulary in logit order.
    pub fn label_vocabulary(&self) -> &[String] {
        &self.label_vocabulary
    }

    /// Run the forward pass and return the top-ranked raw label.
    pub fn predict(&self, text: &str) -> ModelResult<RawPrediction> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| ModelError::tokenizer(format!("encoding failed: {e}")))?;

        let mut ids: Vec<u32> = encoding.get_ids().to_vec();
        if ids.len() > self.max_tokens {
            ids.truncate(self.max_tokens);
        }
        if ids.is_empty() {
            return Err(ModelError::inference("tokenizer produced no tokens"));
        }

        let id_tensor = Tensor::from_slice(&ids, ids.len(), &Device::Cpu)
            .map_err(|e| ModelError::inference(format!("id tensor: {e}")))?;

        let token_vectors = self
            .embeddings
            .index_select(&id_tensor, 0)
            .map_err(|e| ModelError::inference(format!("embedding lookup: {e}")))?;

        let pooled = token_vectors
            .mean(0)
            .map_err(|e| ModelError::inference(format!("mean pooling: {e}")))?;

        let logits = self
            .classifier_weight
            .matmul(
                &pooled
                    .unsqueeze(1)
                    .map_err(|e| ModelError::inference(format!("unsqueeze: {e}")))?,
            )
            .map_err(|e| ModelError::inference(format!("linear head: {e}")))?
            .squeeze(1)
            .map_err(|e| ModelError::inference(format!("squeeze: {e}")))?;
        let logits = logits
            .broadcast_add(&self.classifier_bias)
            .map_err(|e| ModelError::inference(format!("bias add: {e}")))?;

        let probs = candle_nn::ops::softmax(&logits, 0)
            .map_err(|e| ModelError::inference(format!("softmax: {e}")))?
            .to_vec1::<f32>()
            .map_err(|e| ModelError::inference(format!("probs to host: {e}")))?;

        let (index, confidence) = argmax(&probs)
            .ok_or_else(|| ModelError::inference("empty probability vector"))?;

        let label = self
            .label_vocabulary
            .get(index)
            .cloned()
            .ok_or_else(|| ModelError::inference(format!("logit index {index} has no label")))?;

        Ok(RawPrediction { label, confidence })
    }
}

/// Parse `config.json` and build the index-ordered label vocabulary.
fn load_label_vocabulary(model_dir: &Path) -> ModelResult<Vec<String>> {
    let config_path = model_dir.join("config.json");
    let data = std::fs::read_to_string(&config_path).map_err(|e| {
        ModelError::config(format!("failed to read {}: {e}", config_path.display()))
    })?;
    let parsed: NetConfigJson = serde_json::from_str(&data)
        .map_err(|e| ModelError::config(format!("failed to parse config.json: {e}")))?;

    if parsed.id2label.is_empty() {
        return Err(ModelError::config("id2label is empty"));
    }

    let mut vocabulary = vec![String::new(); parsed.id2label.len()];
    for (id_str, label) in parsed.id2label {
        let id: usize = id_str
            .parse()
            .map_err(|e| ModelError::config(format!("bad label id '{id_str}': {e}")))?;
        let slot = vocabulary
            .get_mut(id)
            .ok_or_else(|| ModelError::config(format!("label id {id} out of range")))?;
        *slot = label;
    }
    Ok(vocabulary)
}

fn take_tensor(tensors: &HashMap<String, Tensor>, name: &str) -> ModelResult<Tensor> {
    let tensor = tensors
        .get(name)
        .ok_or_else(|| ModelError::weights(format!("tensor '{name}' missing")))?;
    tensor
        .to_dtype(DType::F32)
        .map_err(|e| ModelError::weights(format!("tensor '{name}' to f32: {e}")))
}

/// Index and value of the largest probability. NaN entries never win.
fn argmax(probs: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &value) in probs.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((index, value)),
        }
    }
    best
}
