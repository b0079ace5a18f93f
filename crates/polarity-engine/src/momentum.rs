//! Momentum-weighted aggregation of score sequences
//!
//! For scores `s0, s1, ...` the running value starts at `s0` with zero
//! momentum, then for every later score:
//!
//! ```text
//! change   = s - prev
//! momentum = beta * momentum + (1 - beta) * change
//! prev     = alpha * s + (1 - alpha) * (prev + momentum)
//! ```
//!
//! Later scores weigh more while abrupt reversals are smoothed, so the whole
//! trajectory shapes the result rather than only the last value.

use polarity_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Weights of the momentum recurrence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentumParams {
    /// Immediate weight of the incoming score
    #[serde(default = "default_weight")]
    pub alpha: f64,

    /// Persistence of the momentum term
    #[serde(default = "default_weight")]
    pub beta: f64,
}

impl MomentumParams {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Both weights must lie in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::config(format!(
                    "momentum {name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for MomentumParams {
    fn default() -> Self {
        Self::new(default_weight(), default_weight())
    }
}

fn default_weight() -> f64 {
    0.5
}

/// Running state of one aggregation pass.
///
/// Callers that want smoothing across several messages keep the trajectory
/// and feed it back in; nothing is retained by the engine between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTrajectory {
    pub previous_score: f64,
    pub momentum: f64,
}

impl ScoreTrajectory {
    /// Start a trajectory at its first score
    pub fn start(first: f64) -> Self {
        Self {
            previous_score: first,
            momentum: 0.0,
        }
    }

    /// Fold one more score into the trajectory and return the adjusted score
    pub fn advance(&mut self, score: f64, params: MomentumParams) -> f64 {
        let change = score - self.previous_score;
        self.momentum = params.beta * self.momentum + (1.0 - params.beta) * change;
        self.previous_score =
            params.alpha * score + (1.0 - params.alpha) * (self.previous_score + self.momentum);
        self.previous_score
    }

    /// Extend an optional trajectory with a sequence of scores.
    ///
    /// `None` plus an empty sequence stays `None`.
    pub fn extend<I>(trajectory: Option<Self>, scores: I, params: MomentumParams) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        scores
            .into_iter()
            .fold(trajectory, |state, score| match state {
                None => Some(Self::start(score)),
                Some(mut t) => {
                    t.advance(score, params);
                    Some(t)
                }
            })
    }

    /// Current score of the trajectory
    pub fn score(&self) -> f64 {
        self.previous_score
    }
}

/// Aggregate an ordered sequence of scores; an empty sequence yields 0
pub fn aggregate<I>(scores: I, params: MomentumParams) -> f64
where
    I: IntoIterator<Item = f64>,
{
    ScoreTrajectory::extend(None, scores, params).map_or(0.0, |t| t.score())
}
