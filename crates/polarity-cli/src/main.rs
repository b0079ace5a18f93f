use anyhow::Context;
use clap::Parser;
use polarity_cli::cli::{Cli, Commands};
use polarity_cli::render;
use polarity_engine::SentimentEngine;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    polarity_engine::describe_metrics();

    let config = cli
        .engine
        .load_config()
        .context("Failed to load engine configuration")?;
    let engine = SentimentEngine::from_config(&config).context("Failed to build engine")?;

    match cli.command {
        Commands::Score { text, json } => {
            let text = text_or_stdin(text)?;
            let analysis = engine.analyze(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{}", render::score(analysis.score));
            }
        }

        Commands::Inspect { text, json } => {
            let text = text_or_stdin(text)?;
            let analysis = engine.analyze(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{}", render::inspect(&analysis));
            }
        }

        Commands::Conversation { file } => {
            let content = match file {
                Some(path) => read_file(&path)?,
                None => read_stdin()?,
            };
            let messages: Vec<&str> = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();

            info!(messages = messages.len(), "Scoring conversation");
            let score = engine.conversation_score(&messages)?;
            println!("{}", render::score(score));
        }
    }

    Ok(())
}

fn text_or_stdin(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => read_stdin(),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    debug!("Reading input from stdin");
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "polarity=debug,polarity_cli=debug,polarity_engine=debug"
    } else {
        "polarity=warn,polarity_cli=warn,polarity_engine=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
