//! Error types for Polarity

use std::path::PathBuf;

/// Result type alias using Polarity's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Model versions that unlock gated capabilities
pub const UPGRADE_MODELS: &[&str] = &["2.0", "3.0"];

/// Core error type for Polarity operations
///
/// Every variant is raised while an engine is being built or when a gated
/// capability is requested. Scoring itself is infallible.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wordset name outside `standard`, `extended`, `custom`
    #[error("invalid wordset: {0}. Choose from 'standard', 'extended', or 'custom'")]
    InvalidWordset(String),

    /// Custom wordset requested without both word files
    #[error("custom wordset requires file paths for both positive and negative words")]
    MissingCustomFiles,

    /// Model version outside the supported set
    #[error("invalid model: {0}. Choose from [\"1.0\", \"2.0\", \"3.0\"]")]
    InvalidModel(String),

    /// Capability invoked under a model that does not provide it
    #[error(
        "the current model ({current}) does not support the requested functionality: {feature}. \
         Please upgrade your model to {}",
        UPGRADE_MODELS.join(" or ")
    )]
    ModelNotSupported {
        current: String,
        feature: String,
    },

    /// Lexicon file missing or unreadable
    #[error("unable to read lexicon file at {}: {source}", path.display())]
    LexiconLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// YAML configuration parse errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a model-not-supported error for a feature
    pub fn model_not_supported(current: impl Into<String>, feature: impl Into<String>) -> Self {
        Self::ModelNotSupported {
            current: current.into(),
            feature: feature.into(),
        }
    }

    /// Create a lexicon load error for the given path
    pub fn lexicon_load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LexiconLoad {
            path: path.into(),
            source,
        }
    }
}
