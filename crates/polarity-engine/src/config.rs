//! Engine configuration
//!
//! A single configuration value selects the model, the lexicon, the table set
//! and every scoring policy, so the variants of the scoring algorithm are
//! expressed as data instead of separate engine types.

use crate::composer::ComposerKind;
use crate::lexicon::{LexiconPaths, Wordset};
use crate::model::Model;
use crate::momentum::MomentumParams;
use crate::scorer::NeutralFallback;
use crate::segment::PunctuationPolicy;
use crate::tables::TableSet;
use polarity_core::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// How the clause vectors of one sentence become scalars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceReduction {
    /// Fold the clause vectors with the composer; one scalar per sentence
    #[default]
    Combine,
    /// One scalar per clause, all fed to the momentum aggregator
    PerClause,
}

/// Scoring policies that distinguish the engine variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Sentence terminator handling
    #[serde(default)]
    pub punctuation: PunctuationPolicy,

    /// Zero-sentiment fallback rule
    #[serde(default)]
    pub neutral_fallback: NeutralFallback,

    /// Per-sentence reduction
    #[serde(default)]
    pub reduction: SentenceReduction,
}

/// Configuration for a sentiment engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Model version ("1.0", "2.0" or "3.0")
    #[serde(default = "default_model", deserialize_with = "deserialize_version")]
    pub model: String,

    /// Wordset ("standard", "extended" or "custom")
    #[serde(default = "default_wordset")]
    pub wordset: String,

    /// Positive word file for the custom wordset
    #[serde(default)]
    pub positive_words: Option<PathBuf>,

    /// Negative word file for the custom wordset
    #[serde(default)]
    pub negative_words: Option<PathBuf>,

    /// Directory holding the bundled wordsets
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Table set override; the model's own set when absent
    #[serde(default)]
    pub tables: Option<TableSet>,

    /// Vector composer
    #[serde(default)]
    pub composer: ComposerKind,

    /// Scoring policies
    #[serde(default)]
    pub policy: ScoringPolicy,

    /// Momentum aggregation weights
    #[serde(default)]
    pub momentum: MomentumParams,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            wordset: default_wordset(),
            positive_words: None,
            negative_words: None,
            assets_dir: default_assets_dir(),
            tables: None,
            composer: ComposerKind::default(),
            policy: ScoringPolicy::default(),
            momentum: MomentumParams::default(),
        }
    }
}

impl EngineConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Parsed model version
    pub fn model(&self) -> Result<Model> {
        self.model.parse()
    }

    /// Parsed wordset
    pub fn wordset(&self) -> Result<Wordset> {
        self.wordset.parse()
    }

    /// Active table set: the override, or the model's default
    pub fn table_set(&self) -> Result<TableSet> {
        match self.tables {
            Some(tables) => Ok(tables),
            None => Ok(self.model()?.default_tables()),
        }
    }

    /// Word file locations for the configured wordset
    pub fn lexicon_paths(&self) -> Result<LexiconPaths> {
        LexiconPaths::resolve(
            self.wordset()?,
            &self.assets_dir,
            self.positive_words.as_deref(),
            self.negative_words.as_deref(),
        )
    }

    /// Check every field that does not require touching the filesystem
    pub fn validate(&self) -> Result<()> {
        self.model()?;
        self.wordset()?;
        self.lexicon_paths()?;
        self.momentum.validate()
    }
}

fn default_model() -> String {
    Model::default().as_str().to_string()
}

fn default_wordset() -> String {
    Wordset::Standard.as_str().to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("./assets")
}

/// Accept `model: "2.0"` as well as the bare YAML number `model: 2.0`
fn deserialize_version<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        Text(String),
        Number(f64),
    }

    Ok(match Version::deserialize(deserializer)? {
        Version::Text(text) => text,
        Version::Number(number) => format!("{number:.1}"),
    })
}
