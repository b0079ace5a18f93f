//! Lexicon-based sentiment classifier (Tier A)
//!
//! Adapts a shared [`SentimentEngine`] to the [`Classifier`] trait.

use crate::classifier::{
    ClassificationMetadata, ClassificationResult, Classifier, ClassifierTier, SentimentLabel,
};
use crate::engine::SentimentEngine;
use crate::telemetry;
use polarity_core::{Error, Result};
use std::sync::Arc;
use std::time::Instant;

/// Default half-width of the band around zero labelled neutral
pub const DEFAULT_NEUTRAL_BAND: f64 = 0.05;

pub struct SentimentClassifier {
    name: String,
    engine: Arc<SentimentEngine>,
    neutral_band: f64,
}

impl SentimentClassifier {
    pub fn new(engine: Arc<SentimentEngine>) -> Self {
        Self::with_name("sentiment", engine)
    }

    pub fn with_name(name: impl Into<String>, engine: Arc<SentimentEngine>) -> Self {
        Self {
            name: name.into(),
            engine,
            neutral_band: DEFAULT_NEUTRAL_BAND,
        }
    }

    /// Set the neutral band; must be finite and non-negative
    pub fn with_neutral_band(mut self, band: f64) -> Result<Self> {
        if !band.is_finite() || band < 0.0 {
            return Err(Error::config(format!(
                "neutral band must be a non-negative number, got {band}"
            )));
        }
        self.neutral_band = band;
        Ok(self)
    }

    pub fn engine(&self) -> &SentimentEngine {
        &self.engine
    }

    pub fn neutral_band(&self) -> f64 {
        self.neutral_band
    }
}

#[async_trait::async_trait]
impl Classifier for SentimentClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let start = Instant::now();

        let analysis = self.engine.analyze(text);
        let label = SentimentLabel::from_score(analysis.score, self.neutral_band);
        let latency_us = start.elapsed().as_micros() as u64;
        metrics::histogram!(telemetry::CLASSIFY_LATENCY_US).record(latency_us as f64);

        Ok(ClassificationResult {
            label,
            score: analysis.score,
            metadata: ClassificationMetadata {
                model: Some(self.engine.model().to_string()),
                tables: Some(
                    self.engine
                        .table_set()
                        .map_or_else(|| "custom".to_string(), |set| set.to_string()),
                ),
                clause_count: analysis.clause_count(),
                sentence_scores: analysis.scores,
                extra: vec![(
                    "composer".to_string(),
                    self.engine.composer().name().to_string(),
                )],
            },
            latency_us,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> ClassifierTier {
        ClassifierTier::A
    }
}
