use clap::{Args, Parser, Subcommand};
use polarity_core::Result;
use polarity_engine::{EngineConfig, TableSet};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "polarity")]
#[command(author, version, about = "Lexicon-based sentiment scoring")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the final score of a message
    Score {
        /// Text to score; read from stdin when omitted
        text: Option<String>,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show normalization, clauses and vectors for a message
    Inspect {
        /// Text to inspect; read from stdin when omitted
        text: Option<String>,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a conversation, one message per line
    Conversation {
        /// Conversation file; read from stdin when omitted
        file: Option<PathBuf>,
    },
}

/// Engine settings; flags override values from `--config`
#[derive(Args, Debug, Default)]
pub struct EngineArgs {
    /// YAML engine configuration
    #[arg(short, long, global = true, env = "POLARITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Model version (1.0, 2.0, 3.0)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Wordset (standard, extended, custom)
    #[arg(short, long, global = true)]
    pub wordset: Option<String>,

    /// Positive word file for the custom wordset
    #[arg(long, global = true)]
    pub positive: Option<PathBuf>,

    /// Negative word file for the custom wordset
    #[arg(long, global = true)]
    pub negative: Option<PathBuf>,

    /// Directory holding the bundled wordsets
    #[arg(long, global = true, env = "POLARITY_ASSETS")]
    pub assets_dir: Option<PathBuf>,

    /// Table set override (classic, calibrated)
    #[arg(long, global = true, value_parser = parse_tables)]
    pub tables: Option<TableSet>,
}

impl EngineArgs {
    /// Load the configuration file, if any, and apply flag overrides
    pub fn load_config(&self) -> Result<EngineConfig> {
        let config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::default(),
        };
        Ok(self.apply(config))
    }

    pub fn apply(&self, mut config: EngineConfig) -> EngineConfig {
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(wordset) = &self.wordset {
            config.wordset = wordset.clone();
        }
        if let Some(positive) = &self.positive {
            config.positive_words = Some(positive.clone());
        }
        if let Some(negative) = &self.negative {
            config.negative_words = Some(negative.clone());
        }
        if let Some(assets_dir) = &self.assets_dir {
            config.assets_dir = assets_dir.clone();
        }
        if let Some(tables) = self.tables {
            config.tables = Some(tables);
        }
        config
    }
}

fn parse_tables(s: &str) -> std::result::Result<TableSet, String> {
    s.parse().map_err(|e: polarity_core::Error| e.to_string())
}
