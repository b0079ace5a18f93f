//! Sentiment engine: normalization through momentum aggregation
//!
//! Text flows through the normalizer and segmenter; every clause is scored
//! into a vector, each sentence is reduced to one or more scalars, and the
//! resulting sequence is folded by the momentum aggregator.

use crate::composer::VectorComposer;
use crate::config::{EngineConfig, ScoringPolicy, SentenceReduction};
use crate::lexicon::Lexicon;
use crate::model::{Capability, Model};
use crate::momentum::{aggregate, MomentumParams, ScoreTrajectory};
use crate::normalize::Normalizer;
use crate::scorer::{ClauseBreakdown, ClauseScorer};
use crate::segment::{Clause, Segmenter, Sentence};
use crate::tables::{LexicalTables, TableSet};
use crate::telemetry;
use polarity_core::{Result, SentimentVector};
use serde::Serialize;
use tracing::{debug, info};

/// Scoring detail for one clause
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClauseAnalysis {
    pub text: String,
    pub breakdown: ClauseBreakdown,
    pub vector: SentimentVector,
    pub scalar: f64,
}

/// Scoring detail for one sentence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceAnalysis {
    pub text: String,
    pub clauses: Vec<ClauseAnalysis>,

    /// Folded vector, present when the sentence had several clauses and
    /// was reduced with the composer
    pub combined: Option<SentimentVector>,

    /// Scalars this sentence contributes to the aggregate
    pub scores: Vec<f64>,
}

/// Full breakdown of one evaluated message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub text: String,
    pub normalized: String,
    pub sentences: Vec<SentenceAnalysis>,

    /// Scalar sequence fed to the momentum aggregator
    pub scores: Vec<f64>,

    /// Final aggregated score
    pub score: f64,
}

impl Analysis {
    pub fn clause_count(&self) -> usize {
        self.sentences.iter().map(|s| s.clauses.len()).sum()
    }
}

/// Lexicon-based sentiment engine.
///
/// Immutable after construction and safe to share between threads.
#[derive(Debug)]
pub struct SentimentEngine {
    model: Model,
    /// `None` once custom tables replace the built-in set
    table_set: Option<TableSet>,
    tables: LexicalTables,
    lexicon: Lexicon,
    normalizer: Normalizer,
    composer: Box<dyn VectorComposer>,
    policy: ScoringPolicy,
    momentum: MomentumParams,
}

impl SentimentEngine {
    /// Build an engine, loading the configured wordset from disk
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let lexicon = Lexicon::from_paths(&config.lexicon_paths()?)?;
        Self::new(config, lexicon)
    }

    /// Build an engine around an already loaded lexicon.
    ///
    /// Wordset settings are ignored; model, tables and policies still come
    /// from `config`.
    pub fn new(config: &EngineConfig, lexicon: Lexicon) -> Result<Self> {
        let model = config.model()?;
        let table_set = config.table_set()?;
        config.momentum.validate()?;

        info!(
            model = %model,
            tables = %table_set,
            composer = ?config.composer,
            "Initialized sentiment engine"
        );

        Ok(Self {
            model,
            table_set: Some(table_set),
            tables: table_set.tables(),
            lexicon,
            normalizer: Normalizer::new()?,
            composer: config.composer.build(),
            policy: config.policy,
            momentum: config.momentum,
        })
    }

    /// Replace the lexical tables
    pub fn with_tables(mut self, tables: LexicalTables) -> Self {
        self.table_set = None;
        self.tables = tables;
        self
    }

    /// Replace the vector composer
    pub fn with_composer(mut self, composer: Box<dyn VectorComposer>) -> Self {
        self.composer = composer;
        self
    }

    pub fn model(&self) -> Model {
        self.model
    }

    /// Built-in table set in use, if the tables were not replaced
    pub fn table_set(&self) -> Option<TableSet> {
        self.table_set
    }

    pub fn tables(&self) -> &LexicalTables {
        &self.tables
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn composer(&self) -> &dyn VectorComposer {
        self.composer.as_ref()
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    pub fn momentum(&self) -> MomentumParams {
        self.momentum
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.model.supports(capability)
    }

    /// Fail with `ModelNotSupported` unless the active model offers `capability`
    pub fn require(&self, capability: Capability) -> Result<()> {
        self.model.require(capability)
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    pub fn segmenter(&self) -> Segmenter<'_> {
        Segmenter::new(&self.tables, self.policy.punctuation)
    }

    pub fn scorer(&self) -> ClauseScorer<'_> {
        ClauseScorer::new(&self.lexicon, &self.tables, self.policy.neutral_fallback)
    }

    /// Score a single, already normalized clause
    pub fn score_clause(&self, clause: &Clause<'_>) -> SentimentVector {
        self.scorer().score(clause)
    }

    /// Final bounded score of a message
    pub fn evaluate(&self, text: &str) -> f64 {
        self.analyze(text).score
    }

    /// Evaluate a message and return every intermediate result
    pub fn analyze(&self, text: &str) -> Analysis {
        let normalized = self.normalize(text);
        let scorer = self.scorer();

        let sentences: Vec<SentenceAnalysis> = self
            .segmenter()
            .sentences(&normalized)
            .map(|sentence| self.analyze_sentence(&scorer, &sentence))
            .collect();

        let scores: Vec<f64> = sentences
            .iter()
            .flat_map(|s| s.scores.iter().copied())
            .collect();
        let score = aggregate(scores.iter().copied(), self.momentum);

        let analysis = Analysis {
            text: text.to_string(),
            normalized,
            sentences,
            scores,
            score,
        };

        metrics::counter!(telemetry::MESSAGES_TOTAL, "model" => self.model.as_str()).increment(1);
        metrics::histogram!(telemetry::CLAUSES_PER_MESSAGE).record(analysis.clause_count() as f64);
        debug!(
            sentences = analysis.sentences.len(),
            clauses = analysis.clause_count(),
            score = analysis.score,
            "Evaluated message"
        );

        analysis
    }

    /// Advance a caller-owned trajectory with this message's scores.
    ///
    /// A message without scoreable text leaves the trajectory untouched.
    pub fn evaluate_continuing(
        &self,
        text: &str,
        trajectory: Option<ScoreTrajectory>,
    ) -> Option<ScoreTrajectory> {
        let analysis = self.analyze(text);
        ScoreTrajectory::extend(trajectory, analysis.scores, self.momentum)
    }

    /// Momentum-weighted score of a whole conversation, one score per message.
    ///
    /// Messages with no scoreable sentence are skipped. Requires model 2.0+.
    pub fn conversation_score<I, S>(&self, messages: I) -> Result<f64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.require(Capability::ConversationScore)?;

        let scores: Vec<f64> = messages
            .into_iter()
            .map(|message| self.analyze(message.as_ref()))
            .filter(|analysis| !analysis.scores.is_empty())
            .map(|analysis| analysis.score)
            .collect();

        debug!(messages = scores.len(), "Scoring conversation");
        Ok(aggregate(scores, self.momentum))
    }

    fn analyze_sentence(&self, scorer: &ClauseScorer<'_>, sentence: &Sentence<'_>) -> SentenceAnalysis {
        let clauses: Vec<ClauseAnalysis> = sentence
            .clauses
            .iter()
            .map(|clause| {
                let breakdown = scorer.breakdown(clause);
                let vector = breakdown.vector();
                ClauseAnalysis {
                    text: clause.to_string(),
                    breakdown,
                    vector,
                    scalar: self.composer.to_scalar(&vector),
                }
            })
            .collect();

        let (combined, scores) = match self.policy.reduction {
            SentenceReduction::PerClause => (None, clauses.iter().map(|c| c.scalar).collect()),
            SentenceReduction::Combine => {
                let mut vectors = clauses.iter().map(|c| c.vector);
                match vectors.next() {
                    None => (None, Vec::new()),
                    Some(first) if clauses.len() == 1 => {
                        (None, vec![self.composer.to_scalar(&first)])
                    }
                    Some(first) => {
                        let folded =
                            vectors.fold(first, |acc, next| self.composer.combine(&acc, &next));
                        (Some(folded), vec![self.composer.to_scalar(&folded)])
                    }
                }
            }
        };

        debug!(
            sentence = sentence.text,
            clauses = clauses.len(),
            ?scores,
            "Scored sentence"
        );

        SentenceAnalysis {
            text: sentence.text.to_string(),
            clauses,
            combined,
            scores,
        }
    }
}
