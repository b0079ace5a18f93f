//! Polarity Engine
//!
//! Lexicon-based sentiment scoring with clause-level composition.
//!
//! Text is processed in stages:
//! - Normalization: lowercasing, contraction expansion, phrase fusion
//! - Segmentation: sentences on terminal punctuation, clauses on conjunctions
//! - Clause scoring: lexicon counts, negation parity, multiplier walk
//! - Composition: clause vectors folded per sentence, projected to scalars
//! - Aggregation: momentum-weighted reduction of the scalar sequence
//!
//! Every stage is synchronous and allocation-light; an engine is built once
//! and shared across threads.

pub mod classifier;
pub mod composer;
pub mod config;
pub mod engine;
pub mod lexicon;
pub mod model;
pub mod momentum;
pub mod normalize;
pub mod scorer;
pub mod segment;
pub mod sentiment;
pub mod tables;
pub mod telemetry;

pub use classifier::{
    ClassificationMetadata, ClassificationResult, Classifier, ClassifierTier, SentimentLabel,
};
pub use composer::{ArctanComposer, ComposerKind, NativeComposer, VectorComposer};
pub use config::{EngineConfig, ScoringPolicy, SentenceReduction};
pub use engine::{Analysis, ClauseAnalysis, SentenceAnalysis, SentimentEngine};
pub use lexicon::{Lexicon, LexiconPaths, Wordset};
pub use model::{Capability, Model};
pub use momentum::{aggregate, MomentumParams, ScoreTrajectory};
pub use normalize::Normalizer;
pub use scorer::{ClauseBreakdown, ClauseScorer, NeutralFallback};
pub use segment::{Clause, PunctuationPolicy, Segmenter, Sentence};
pub use sentiment::SentimentClassifier;
pub use tables::{LexicalTables, TableSet};
pub use telemetry::describe_metrics;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassificationResult, Classifier, SentimentLabel};
    pub use crate::composer::VectorComposer;
    pub use crate::config::EngineConfig;
    pub use crate::engine::SentimentEngine;
    pub use crate::lexicon::Lexicon;
    pub use crate::model::{Capability, Model};
    pub use crate::momentum::{MomentumParams, ScoreTrajectory};
    pub use crate::sentiment::SentimentClassifier;
    pub use crate::tables::{LexicalTables, TableSet};
    pub use polarity_core::{Polarity, SentimentVector};
}
