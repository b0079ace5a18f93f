//! Vector composition and scalar projection
//!
//! A [`VectorComposer`] merges the vectors of two clauses of one sentence and
//! projects a vector onto a bounded scalar score. Callers must not assume the
//! merge is commutative or associative; clause vectors are always folded in
//! reading order.

use polarity_core::{Polarity, SentimentVector};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// Scale of the arctangent squashing function
pub const ARCTAN_SCALE: f64 = 0.745;

/// Scale used by the native vector module's `v2s`
pub const NATIVE_SCALE: f64 = 0.636;

/// Clamp `value` into the open interval `(-bound, bound)`
fn clamp_inside(value: f64, bound: f64) -> f64 {
    let bound = bound.abs();
    let limit = if bound > 0.0 {
        f64::from_bits(bound.to_bits() - 1)
    } else {
        0.0
    };
    value.clamp(-limit, limit)
}

/// Strategy for merging clause vectors and projecting them to scalars
pub trait VectorComposer: fmt::Debug + Send + Sync {
    /// Merge `a` (earlier clause) with `b` (later clause)
    fn combine(&self, a: &SentimentVector, b: &SentimentVector) -> SentimentVector;

    /// Project a vector onto a bounded scalar score
    fn to_scalar(&self, v: &SentimentVector) -> f64;

    /// Exclusive bound on the magnitude of `to_scalar`
    fn bound(&self) -> f64;

    /// Composer name for diagnostics
    fn name(&self) -> &str;
}

/// Composer selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComposerKind {
    #[default]
    Arctan,
    Native,
}

impl ComposerKind {
    pub fn build(self) -> Box<dyn VectorComposer> {
        match self {
            Self::Arctan => Box::new(ArctanComposer::default()),
            Self::Native => Box::new(NativeComposer),
        }
    }
}

/// Additive composer with `scale * atan(m * p * i)` projection.
///
/// `combine` adds the two vectors' unsquashed scores. The result carries the
/// summed signed strength as a non-negative magnitude, the sign of the sum as
/// polarity, and whatever intensity makes `m * p * i` equal that sum. Clauses
/// leaning the same way reinforce each other; opposing clauses cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArctanComposer {
    scale: f64,
}

impl ArctanComposer {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Default for ArctanComposer {
    fn default() -> Self {
        Self::new(ARCTAN_SCALE)
    }
}

impl VectorComposer for ArctanComposer {
    fn combine(&self, a: &SentimentVector, b: &SentimentVector) -> SentimentVector {
        let raw = a.raw() + b.raw();
        if raw == 0.0 {
            return SentimentVector::neutral();
        }

        let strength = (a.strength() + b.strength()).abs();
        let magnitude = if strength > 0.0 { strength } else { raw.abs() };

        SentimentVector::new(magnitude, Polarity::of(raw), raw.abs() / magnitude)
    }

    fn to_scalar(&self, v: &SentimentVector) -> f64 {
        clamp_inside(self.scale * v.raw().atan(), self.bound())
    }

    fn bound(&self) -> f64 {
        self.scale * FRAC_PI_2
    }

    fn name(&self) -> &str {
        "arctan"
    }
}

/// Composer reproducing the native vector module.
///
/// Projection uses a `0.636` scale and treats a zero-magnitude vector with a
/// non-unit intensity as carrying `|1 - intensity|` of strength. Merging
/// follows the module's case table: matching polarities add magnitudes,
/// mixed polarities always come out negative, and the intensity of the
/// vector whose intensity strays furthest from 1 wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeComposer;

impl NativeComposer {
    fn effective_intensity(v: &SentimentVector) -> f64 {
        (v.intensity - 1.0).abs()
    }
}

impl VectorComposer for NativeComposer {
    fn combine(&self, a: &SentimentVector, b: &SentimentVector) -> SentimentVector {
        let a_dominates = Self::effective_intensity(a) > Self::effective_intensity(b);
        let dominant = if a_dominates { a } else { b };
        let product = a.strength() * b.strength();
        let both_silent = a.magnitude == 0.0 && b.magnitude == 0.0;

        // Silent or mixed inputs fall back to the dominant intensity,
        // truncated the way the module's integer magnitude truncates it.
        let fallback_magnitude = if both_silent {
            0.0
        } else {
            dominant.intensity.trunc()
        };

        if a.polarity.sign() * b.polarity.sign() == 1 {
            let mut magnitude = a.magnitude + b.magnitude;
            let polarity = if product > 0.0 {
                a.polarity
            } else if product < 0.0 {
                Polarity::Negative
            } else {
                magnitude = fallback_magnitude;
                dominant.polarity
            };
            SentimentVector::new(magnitude, polarity, dominant.intensity)
        } else {
            let magnitude = if product > 0.0 {
                a.magnitude.abs() + b.magnitude.abs()
            } else {
                fallback_magnitude
            };
            SentimentVector::new(magnitude, Polarity::Negative, dominant.intensity)
        }
    }

    fn to_scalar(&self, v: &SentimentVector) -> f64 {
        let base = if v.magnitude == 0.0 && v.intensity != 1.0 {
            (1.0 - v.intensity).abs()
        } else {
            v.magnitude
        };
        let scalar = NATIVE_SCALE * (base * v.polarity.factor() * v.intensity).atan();
        clamp_inside(scalar, self.bound())
    }

    fn bound(&self) -> f64 {
        NATIVE_SCALE * FRAC_PI_2
    }

    fn name(&self) -> &str {
        "native"
    }
}
