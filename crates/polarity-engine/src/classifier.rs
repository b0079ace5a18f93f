//! Classifier trait and common types

use async_trait::async_trait;
use polarity_core::Result;
use serde::Serialize;
use std::fmt;

/// Trait for all classifiers
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<ClassificationResult>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Get the tier (performance category)
    fn tier(&self) -> ClassifierTier;
}

/// Sentiment label derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label a score; anything within `neutral_band` of zero is neutral
    pub fn from_score(score: f64, neutral_band: f64) -> Self {
        if score > neutral_band {
            Self::Positive
        } else if score < -neutral_band {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Classification label
    pub label: SentimentLabel,

    /// Signed sentiment score
    pub score: f64,

    /// Additional metadata
    pub metadata: ClassificationMetadata,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Create a new classification result
    pub fn new(label: SentimentLabel, score: f64) -> Self {
        Self {
            label,
            score,
            metadata: ClassificationMetadata::default(),
            latency_us: 0,
        }
    }

    /// Check if the score's strength reaches `threshold`, in either direction
    pub fn exceeds_threshold(&self, threshold: f64) -> bool {
        self.score.abs() >= threshold
    }
}

/// Metadata about classification
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassificationMetadata {
    /// Model version
    pub model: Option<String>,

    /// Active lexical table set
    pub tables: Option<String>,

    /// Scalars fed to the aggregator, in order
    pub sentence_scores: Vec<f64>,

    /// Number of clauses scored
    pub clause_count: usize,

    /// Additional key-value pairs
    pub extra: Vec<(String, String)>,
}

/// Classifier performance tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClassifierTier {
    /// Ultra-fast (<2ms) - lexicon lookups, simple rules
    A,
    /// Fast (<5ms)
    B,
    /// Moderate (<10ms)
    C,
}

impl ClassifierTier {
    /// Get the latency budget for this tier in microseconds
    pub fn latency_budget_us(&self) -> u64 {
        match self {
            Self::A => 2_000,
            Self::B => 5_000,
            Self::C => 10_000,
        }
    }
}
