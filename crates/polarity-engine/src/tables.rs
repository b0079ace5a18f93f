//! Static lexical tables: negations, multipliers and conjunctions
//!
//! Two table sets ship with the engine. `Classic` carries the hand-tuned
//! multipliers of the first scoring model; `Calibrated` carries weights fitted
//! against labelled movie reviews. Multi-word entries are stored in their
//! fused form (`a-lot`, `due-to`) because that is what the normalizer emits.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "dont", "wont", "cant", "shouldnt",
    "wouldnt", "wasnt", "isnt", "havent",
];

const CLASSIC_QUANTIFIERS: &[(&str, f64)] = &[
    ("really", 1.2),
    ("at-all", 1.25),
    ("absolutely", 1.3),
    ("totally", 1.27),
    ("very", 1.12),
    ("entirely", 1.35),
    ("quite", 1.15),
    ("extremely", 1.32),
    ("highly", 1.4),
    ("definitely", 1.45),
    ("too", 1.25),
    ("completely", 1.45),
    ("a-lot", 1.34),
    ("more", 1.16),
    ("much", 1.19),
];

const CLASSIC_DIMINISHERS: &[(&str, f64)] = &[
    ("somewhat", 0.81),
    ("kind-of", 0.74),
    ("a-bit", 0.7),
    ("slightly", 0.65),
    ("partially", 0.67),
    ("mildly", 0.71),
    ("a-little", 0.75),
    ("fairly", 0.83),
    ("moderately", 0.88),
    ("sort-of", 0.8),
    ("not-really", 0.63),
];

const CALIBRATED_QUANTIFIERS: &[(&str, f64)] = &[
    ("very", 1.41),
    ("extremely", 1.51),
    ("really", 1.53),
    ("too", 1.57),
    ("more", 1.48),
    ("totally", 1.59),
    ("much", 1.52),
    ("quite", 1.43),
    ("absolutely", 1.57),
    ("entirely", 1.52),
    ("completely", 1.63),
    ("highly", 1.26),
    ("definitely", 1.33),
    ("a-lot", 1.55),
    ("at-all", 1.35),
];

const CALIBRATED_DIMINISHERS: &[(&str, f64)] = &[
    ("sometimes", 0.39),
    ("mildly", 0.84),
    ("somewhat", 0.45),
    ("slightly", 0.49),
    ("partially", 0.51),
    ("fairly", 0.52),
    ("moderately", 0.63),
    ("sort-of", 0.75),
    ("kind-of", 0.57),
    ("a-bit", 0.8),
    ("a-little", 0.5),
    ("not-really", 0.3),
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "because", "since", "so", "therefore", "due-to", "although", "while",
    "nor", "either", "neither", "unless", "until", "when", "if", "as", "in-case",
    "provided-that", "even-though", "so-that",
];

/// Named table set selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableSet {
    /// Hand-tuned multipliers of the first model
    Classic,
    /// Review-calibrated multipliers
    Calibrated,
}

impl TableSet {
    /// Build the tables for this set
    pub fn tables(self) -> LexicalTables {
        match self {
            Self::Classic => LexicalTables::classic(),
            Self::Calibrated => LexicalTables::calibrated(),
        }
    }

    /// Name used in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Calibrated => "calibrated",
        }
    }
}

impl fmt::Display for TableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableSet {
    type Err = polarity_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "calibrated" => Ok(Self::Calibrated),
            other => Err(polarity_core::Error::config(format!(
                "unknown table set '{other}', expected 'classic' or 'calibrated'"
            ))),
        }
    }
}

/// Immutable lookup tables consulted by the segmenter and clause scorer
#[derive(Debug, Clone, Default)]
pub struct LexicalTables {
    negations: HashSet<String>,
    quantifiers: HashMap<String, f64>,
    diminishers: HashMap<String, f64>,
    conjunctions: HashSet<String>,
}

impl LexicalTables {
    /// Empty tables, to be filled with the `with_*` builders
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables of the first scoring model
    pub fn classic() -> Self {
        Self::new()
            .with_negations(NEGATIONS.iter().copied())
            .with_quantifiers(CLASSIC_QUANTIFIERS.iter().copied())
            .with_diminishers(CLASSIC_DIMINISHERS.iter().copied())
            .with_conjunctions(CONJUNCTIONS.iter().copied().chain(["thus"]))
    }

    /// Review-calibrated tables
    pub fn calibrated() -> Self {
        Self::new()
            .with_negations(NEGATIONS.iter().copied())
            .with_quantifiers(CALIBRATED_QUANTIFIERS.iter().copied())
            .with_diminishers(CALIBRATED_DIMINISHERS.iter().copied())
            .with_conjunctions(CONJUNCTIONS.iter().copied())
    }

    /// Add negation tokens
    pub fn with_negations<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.negations.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Add quantifier entries
    pub fn with_quantifiers<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.quantifiers
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    /// Add diminisher entries
    pub fn with_diminishers<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.diminishers
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    /// Add conjunction tokens
    pub fn with_conjunctions<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conjunctions.extend(tokens.into_iter().map(Into::into));
        self
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }

    pub fn is_conjunction(&self, token: &str) -> bool {
        self.conjunctions.contains(token)
    }

    pub fn quantifier(&self, token: &str) -> Option<f64> {
        self.quantifiers.get(token).copied()
    }

    pub fn diminisher(&self, token: &str) -> Option<f64> {
        self.diminishers.get(token).copied()
    }

    /// All quantifier entries, in no particular order
    pub fn quantifiers(&self) -> impl Iterator<Item = (&str, f64)> {
        self.quantifiers.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// All diminisher entries, in no particular order
    pub fn diminishers(&self) -> impl Iterator<Item = (&str, f64)> {
        self.diminishers.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
