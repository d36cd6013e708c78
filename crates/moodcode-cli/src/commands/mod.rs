//! CLI command implementations.

pub mod classify;
pub mod generate;

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;

use moodcode_core::{ChainConfig, ClassifierChain, HeuristicSentimentStrategy};
use moodcode_model::{ModelConfig, ModelStrategy};

/// Input and chain options shared by the commands.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text to classify. Reads stdin when omitted.
    pub text: Option<String>,

    /// Model directory (default: $MOODCODE_MODEL_PATH, then ./models/emotion).
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Skip the model strategy entirely.
    #[arg(long)]
    pub no_model: bool,

    /// Restrict output to the basic happy/sad/angry/neutral set.
    #[arg(long)]
    pub basic_labels: bool,
}

impl InputArgs {
    /// The text to classify: the positional argument, or stdin to EOF.
    pub fn resolve_text(&self) -> anyhow::Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read text from stdin")?;
        Ok(buffer)
    }

    /// Assemble the classifier chain: model (unless disabled), sentiment
    /// heuristic, lexicon terminal.
    pub fn build_chain(&self) -> ClassifierChain {
        let config = if self.basic_labels {
            ChainConfig::core_four_preset()
        } else {
            ChainConfig::default()
        };

        let mut builder = ClassifierChain::builder().config(&config);

        if !self.no_model {
            let model_config = match &self.model_dir {
                Some(dir) => ModelConfig::with_dir(dir),
                None => ModelConfig::default(),
            };
            builder = builder.strategy(Arc::new(ModelStrategy::new(model_config)));
        }

        builder
            .strategy(Arc::new(HeuristicSentimentStrategy::new(config.heuristic)))
            .build()
    }
}
