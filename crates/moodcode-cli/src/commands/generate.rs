//! `moodcode generate` - classify text and emit the matching code snippet.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::Args;

use moodcode_core::EmotionLabel;

use super::InputArgs;
use crate::templates::{self, CodeTemplate};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Topic noted in the generated header.
    #[arg(long)]
    pub topic: Option<String>,

    /// Write the snippet to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let text = args.input.resolve_text()?;
    let chain = args.input.build_chain();

    let label = chain.classify(&text).await;
    let template = templates::lookup(label);
    let snippet = render_snippet(label, template, args.topic.as_deref());

    tracing::info!(%label, title = template.title, "generated snippet");
    eprintln!("Detected emotion: {label}");
    eprintln!("Template: {}", template.title);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &snippet)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Saved snippet to {}", path.display());
        }
        None => print!("{snippet}"),
    }
    Ok(())
}

/// Prepend the generation header to a template body.
fn render_snippet(label: EmotionLabel, template: CodeTemplate, topic: Option<&str>) -> String {
    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let mut header = String::new();
    if let Some(topic) = topic {
        header.push_str(&format!("// Generated for topic: {topic}\n"));
    }
    header.push_str(&format!("// Emotion: {label}\n"));
    header.push_str(&format!("// Generated at {timestamp}\n\n"));
    header + template.code
}
