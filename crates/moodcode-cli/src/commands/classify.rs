//! `moodcode classify` - print the detected emotion label.

use clap::Args;

use super::InputArgs;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit a JSON object instead of the bare label.
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ClassifyArgs) -> anyhow::Result<()> {
    let text = args.input.resolve_text()?;
    let chain = args.input.build_chain();

    let label = chain.classify(&text).await;
    tracing::info!(%label, "classification complete");

    if args.json {
        let payload = serde_json::json!({
            "label": label,
            "description": label.description(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{label}");
    }
    Ok(())
}
