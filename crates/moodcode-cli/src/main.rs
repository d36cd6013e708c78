//! moodcode CLI
//!
//! Detects an emotion from free-form text and emits a matching code
//! snippet.
//!
//! # Commands
//!
//! - `classify`: print the detected emotion label
//! - `generate`: classify, then render the emotion's code template with a
//!   generation header, to stdout or a file
//! - `templates`: list the label-to-snippet table
//!
//! The classifier runs an ordered fallback chain: the candle model strategy
//! when its artifacts are installed, then the sentiment heuristic, then the
//! keyword lexicon. Classification is total; the commands never fail
//! because a strategy is missing.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod templates;

/// moodcode - emotion-driven code snippet generator
#[derive(Parser)]
#[command(name = "moodcode")]
#[command(version)]
#[command(about = "Detect an emotion from text and emit a matching code snippet")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the detected emotion label for a text
    Classify(commands::classify::ClassifyArgs),
    /// Classify a text and emit the matching code snippet
    Generate(commands::generate::GenerateArgs),
    /// List the emotion labels and their snippet templates
    Templates,
}

fn list_templates() {
    for (label, template) in templates::all() {
        println!("{:<10} {}", label.to_string(), template.title);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Classify(args) => commands::classify::run(args).await,
        Commands::Generate(args) => commands::generate::run(args).await,
        Commands::Templates => {
            list_templates();
            Ok(())
        }
    }
}
