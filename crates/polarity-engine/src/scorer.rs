//! Clause-level sentiment scoring
//!
//! A clause is reduced to a [`SentimentVector`]: the signed lexicon count,
//! a polarity decided by how many negations the clause holds, and the product
//! of every quantifier and diminisher factor found in it.

use crate::lexicon::Lexicon;
use crate::segment::Clause;
use crate::tables::LexicalTables;
use polarity_core::{Polarity, SentimentVector};
use serde::{Deserialize, Serialize};

/// Behaviour for clauses whose positive and negative counts cancel out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutralFallback {
    /// Keep a zero base sentiment
    #[default]
    Off,
    /// Substitute `quantifier_multiplier - diminisher_multiplier`
    MultiplierDifference,
}

/// Ceiling on an accumulated multiplier product
///
/// Long runs of amplifiers saturate here instead of overflowing to infinity.
pub const MULTIPLIER_CEILING: f64 = 1e6;

/// Factor contributed by a multiplier token.
///
/// After a negation the factor is mirrored around 1 (`2 - value`), turning an
/// amplifier into a comparable dampener and vice versa. The mirrored factor
/// is floored at zero so intensity can never go negative.
pub fn apply_multiplier(value: f64, preceded_by_negation: bool) -> f64 {
    if preceded_by_negation {
        (2.0 - value).max(0.0)
    } else {
        value
    }
}

fn saturate(product: f64) -> f64 {
    product.min(MULTIPLIER_CEILING)
}

/// Polarity for a base sentiment under `negation_count` negations.
///
/// An even count keeps the sign. An odd count flips a positive clause,
/// collapses a negative one to neutral, and marks a neutral one negative.
pub fn negation_polarity(base_sentiment: f64, negation_count: usize) -> Polarity {
    if negation_count % 2 == 0 {
        return Polarity::Positive;
    }

    if base_sentiment < 0.0 {
        Polarity::Neutral
    } else {
        Polarity::Negative
    }
}

/// Every intermediate quantity computed for one clause
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClauseBreakdown {
    pub positive_count: usize,
    pub negative_count: usize,
    pub negation_count: usize,
    pub quantifier_multiplier: f64,
    pub diminisher_multiplier: f64,
    pub base_sentiment: f64,
    pub fallback_applied: bool,
    pub polarity: Polarity,
}

impl ClauseBreakdown {
    pub fn intensity(&self) -> f64 {
        self.quantifier_multiplier * self.diminisher_multiplier
    }

    pub fn vector(&self) -> SentimentVector {
        SentimentVector::new(self.base_sentiment, self.polarity, self.intensity())
    }
}

/// Scores clauses against a lexicon and a table set
#[derive(Debug, Clone, Copy)]
pub struct ClauseScorer<'e> {
    lexicon: &'e Lexicon,
    tables: &'e LexicalTables,
    fallback: NeutralFallback,
}

impl<'e> ClauseScorer<'e> {
    pub fn new(lexicon: &'e Lexicon, tables: &'e LexicalTables, fallback: NeutralFallback) -> Self {
        Self {
            lexicon,
            tables,
            fallback,
        }
    }

    /// Compute the full breakdown for a clause
    pub fn breakdown(&self, clause: &Clause<'_>) -> ClauseBreakdown {
        let tokens = clause.tokens();

        let positive_count = tokens.iter().filter(|t| self.lexicon.is_positive(t)).count();
        let negative_count = tokens.iter().filter(|t| self.lexicon.is_negative(t)).count();
        let negation_count = tokens.iter().filter(|t| self.tables.is_negation(t)).count();

        let mut quantifier_multiplier = 1.0;
        let mut diminisher_multiplier = 1.0;
        let mut previous: Option<&str> = None;

        for &token in tokens {
            let negated = previous.is_some_and(|p| self.tables.is_negation(p));

            if let Some(q) = self.tables.quantifier(token) {
                quantifier_multiplier =
                    saturate(quantifier_multiplier * apply_multiplier(q, negated));
            }
            if let Some(d) = self.tables.diminisher(token) {
                diminisher_multiplier =
                    saturate(diminisher_multiplier * apply_multiplier(d, negated));
            }

            previous = Some(token);
        }

        let mut base_sentiment = positive_count as f64 - negative_count as f64;
        let mut fallback_applied = false;
        if base_sentiment == 0.0 && self.fallback == NeutralFallback::MultiplierDifference {
            base_sentiment = quantifier_multiplier - diminisher_multiplier;
            fallback_applied = true;
        }

        ClauseBreakdown {
            positive_count,
            negative_count,
            negation_count,
            quantifier_multiplier,
            diminisher_multiplier,
            base_sentiment,
            fallback_applied,
            polarity: negation_polarity(base_sentiment, negation_count),
        }
    }

    /// Score a clause into a sentiment vector
    pub fn score(&self, clause: &Clause<'_>) -> SentimentVector {
        self.breakdown(clause).vector()
    }
}

/// Score a single clause without holding a scorer
pub fn score(
    clause: &Clause<'_>,
    lexicon: &Lexicon,
    tables: &LexicalTables,
    fallback: NeutralFallback,
) -> SentimentVector {
    ClauseScorer::new(lexicon, tables, fallback).score(clause)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::new(["happy", "love", "good"], ["sad", "bad"])
    }

    fn tables() -> LexicalTables {
        LexicalTables::new()
            .with_negations(["not", "never", "dont"])
            .with_quantifiers([("very", 1.5), ("at-all", 1.25)])
            .with_diminishers([("slightly", 0.5)])
    }

    fn breakdown(text: &str, fallback: NeutralFallback) -> ClauseBreakdown {
        let lexicon = lexicon();
        let tables = tables();
        ClauseScorer::new(&lexicon, &tables, fallback).breakdown(&Clause::from_text(text))
    }

    #[test]
    fn test_counts_every_occurrence() {
        let b = breakdown("happy happy sad love", NeutralFallback::Off);
        assert_eq!(b.positive_count, 3);
        assert_eq!(b.negative_count, 1);
        assert_eq!(b.base_sentiment, 2.0);
        assert_eq!(b.polarity, Polarity::Positive);
    }

    #[test]
    fn test_silent_clause_is_neutral() {
        let b = breakdown("the weather today", NeutralFallback::Off);
        assert_eq!(b.vector(), SentimentVector::neutral());
    }

    #[test]
    fn test_negation_flips_following_quantifier() {
        let plain = breakdown("very good", NeutralFallback::Off);
        assert_eq!(plain.quantifier_multiplier, 1.5);

        let negated = breakdown("not very good", NeutralFallback::Off);
        assert_eq!(negated.quantifier_multiplier, 0.5);
        assert_eq!(negated.polarity, Polarity::Negative);
    }

    #[test]
    fn test_negation_flips_following_diminisher() {
        let negated = breakdown("never slightly happy", NeutralFallback::Off);
        assert_eq!(negated.diminisher_multiplier, 1.5);
    }

    #[test]
    fn test_only_adjacent_negation_flips() {
        let b = breakdown("not happy at-all", NeutralFallback::Off);
        assert_eq!(b.quantifier_multiplier, 1.25);
        assert_eq!(b.polarity, Polarity::Negative);
    }

    #[test]
    fn test_multipliers_accumulate() {
        let b = breakdown("very very slightly good", NeutralFallback::Off);
        assert_eq!(b.quantifier_multiplier, 2.25);
        assert_eq!(b.diminisher_multiplier, 0.5);
        assert_eq!(b.intensity(), 1.125);
    }

    #[test]
    fn test_polarity_table() {
        assert_eq!(negation_polarity(1.0, 0), Polarity::Positive);
        assert_eq!(negation_polarity(-1.0, 0), Polarity::Positive);
        assert_eq!(negation_polarity(0.0, 2), Polarity::Positive);
        assert_eq!(negation_polarity(2.0, 1), Polarity::Negative);
        assert_eq!(negation_polarity(-2.0, 3), Polarity::Neutral);
        assert_eq!(negation_polarity(0.0, 1), Polarity::Negative);
    }

    #[test]
    fn test_negated_negative_collapses_to_neutral() {
        let b = breakdown("dont say bad", NeutralFallback::Off);
        assert_eq!(b.polarity, Polarity::Neutral);
        assert_eq!(b.vector().raw(), 0.0);
    }

    #[test]
    fn test_neutral_fallback_uses_multiplier_difference() {
        let off = breakdown("very nice", NeutralFallback::Off);
        assert_eq!(off.base_sentiment, 0.0);
        assert!(!off.fallback_applied);

        let on = breakdown("very nice", NeutralFallback::MultiplierDifference);
        assert_eq!(on.base_sentiment, 0.5);
        assert!(on.fallback_applied);
        assert_eq!(on.polarity, Polarity::Positive);
    }

    #[test]
    fn test_fallback_skipped_when_lexicon_hits() {
        let b = breakdown("very happy", NeutralFallback::MultiplierDifference);
        assert_eq!(b.base_sentiment, 1.0);
        assert!(!b.fallback_applied);
    }

    #[test]
    fn test_long_amplifier_run_saturates() {
        let text = "very ".repeat(3000);
        let b = breakdown(&text, NeutralFallback::Off);
        assert_eq!(b.quantifier_multiplier, MULTIPLIER_CEILING);
        assert_eq!(b.vector().raw(), 0.0);

        let negated = "never slightly ".repeat(3000) + "happy";
        let b = breakdown(&negated, NeutralFallback::MultiplierDifference);
        assert_eq!(b.diminisher_multiplier, MULTIPLIER_CEILING);
        assert!(b.vector().raw().is_finite());
    }

    #[test]
    fn test_apply_multiplier_flip_identity() {
        for value in [0.3, 0.75, 1.0, 1.25, 1.63] {
            assert_eq!(apply_multiplier(value, true), 2.0 - apply_multiplier(value, false));
        }
        assert_eq!(apply_multiplier(2.5, true), 0.0);
    }
}
