//! Model versions and capability gating

use crate::tables::TableSet;
use polarity_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Scoring model version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Model {
    V1,
    #[default]
    V2,
    V3,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::V1, Model::V2, Model::V3];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "1.0",
            Self::V2 => "2.0",
            Self::V3 => "3.0",
        }
    }

    /// Table set used unless configuration overrides it
    pub fn default_tables(self) -> TableSet {
        match self {
            Self::V1 => TableSet::Classic,
            Self::V2 | Self::V3 => TableSet::Calibrated,
        }
    }

    pub fn supports(self, capability: Capability) -> bool {
        self >= capability.min_model()
    }

    /// Fail with `ModelNotSupported` unless this model offers `capability`
    pub fn require(self, capability: Capability) -> Result<()> {
        if self.supports(capability) {
            Ok(())
        } else {
            Err(Error::model_not_supported(self.as_str(), capability.label()))
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1.0" => Ok(Self::V1),
            "2.0" => Ok(Self::V2),
            "3.0" => Ok(Self::V3),
            other => Err(Error::InvalidModel(other.to_string())),
        }
    }
}

/// Optional features gated on the model version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    SarcasmDetection,
    EmotionDetection,
    ConversationScore,
}

impl Capability {
    pub fn label(self) -> &'static str {
        match self {
            Self::SarcasmDetection => "Sarcasm Detection",
            Self::EmotionDetection => "Emotion Detection",
            Self::ConversationScore => "Conversation Score",
        }
    }

    pub fn min_model(self) -> Model {
        match self {
            Self::SarcasmDetection | Self::EmotionDetection | Self::ConversationScore => Model::V2,
        }
    }
}
