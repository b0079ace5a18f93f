//! Core types for Polarity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign contributed by a clause's negations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Sentiment direction is flipped
    Negative,
    /// Sentiment is collapsed to neutral
    Neutral,
    /// Sentiment direction is kept
    Positive,
}

impl Polarity {
    /// Numeric sign in {-1, 0, 1}
    pub fn sign(self) -> i32 {
        match self {
            Self::Negative => -1,
            Self::Neutral => 0,
            Self::Positive => 1,
        }
    }

    /// Sign as a float factor
    pub fn factor(self) -> f64 {
        f64::from(self.sign())
    }

    /// Polarity carrying the sign of `value`
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl TryFrom<i32> for Polarity {
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Negative),
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Positive),
            other => Err(other),
        }
    }
}

/// Three-component representation of a clause's sentiment
///
/// - `magnitude`: signed lexicon strength (positive minus negative hits)
/// - `polarity`: sign derived from the clause's negations
/// - `intensity`: product of the clause's multiplier factors
///
/// Vectors are plain values and are never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentVector {
    pub magnitude: f64,
    pub polarity: Polarity,
    pub intensity: f64,
}

impl SentimentVector {
    /// Create a new sentiment vector
    pub fn new(magnitude: f64, polarity: Polarity, intensity: f64) -> Self {
        Self {
            magnitude,
            polarity,
            intensity,
        }
    }

    /// Vector of a clause with no lexical signal at all
    pub fn neutral() -> Self {
        Self::new(0.0, Polarity::Positive, 1.0)
    }

    /// Signed strength before multipliers (`magnitude * polarity`)
    pub fn strength(&self) -> f64 {
        self.magnitude * self.polarity.factor()
    }

    /// Unsquashed score (`magnitude * polarity * intensity`)
    ///
    /// A vector with no strength scores zero whatever its intensity.
    pub fn raw(&self) -> f64 {
        let strength = self.strength();
        if strength == 0.0 {
            return 0.0;
        }
        strength * self.intensity
    }
}

impl Default for SentimentVector {
    fn default() -> Self {
        Self::neutral()
    }
}

impl fmt::Display for SentimentVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SentimentVector: [magnitude: {}, polarity: {}, intensity: {:.4}]",
            self.magnitude,
            self.polarity.sign(),
            self.intensity
        )
    }
}
