//! Text normalization ahead of segmentation
//!
//! Lowercases, expands contractions, strips apostrophes, collapses whitespace
//! and fuses known two-word phrases into single hyphenated tokens so that
//! token-level table lookups can see them. Sentence terminators are left in
//! place for the segmenter.

use aho_corasick::{AhoCorasick, MatchKind};
use polarity_core::{Error, Result};
use regex::{Captures, Regex};

const CONTRACTIONS: &[(&str, &str)] = &[
    ("wasn't", "wasnt"),
    ("can't", "cant"),
    ("don't", "dont"),
    ("didn't", "didnt"),
    ("isn't", "isnt"),
    ("won't", "wont"),
    ("haven't", "havent"),
    ("shouldn't", "shouldnt"),
    ("wouldn't", "wouldnt"),
    ("couldn't", "couldnt"),
    ("you're", "youre"),
    ("i'm", "im"),
    ("he's", "hes"),
    ("she's", "shes"),
    ("it's", "its"),
    ("they're", "theyre"),
];

/// Two-word phrases fused into one token. `like an` precedes `like a` so the
/// longer phrase wins where both could start at the same position.
const FUSED_PHRASES: &[&str] = &[
    // quantifiers and diminishers
    "a lot",
    "at all",
    "a little",
    "not really",
    "kind of",
    "sort of",
    "a bit",
    // conjunctions
    "due to",
    "so that",
    "even though",
    "provided that",
    "in case",
    // fillers
    "like an",
    "like a",
];

/// Reusable text normalizer
#[derive(Debug, Clone)]
pub struct Normalizer {
    contractions: AhoCorasick,
    expansions: Vec<&'static str>,
    phrases: Regex,
}

impl Normalizer {
    /// Build the contraction matcher and phrase pattern
    pub fn new() -> Result<Self> {
        let (patterns, expansions): (Vec<&str>, Vec<&str>) = CONTRACTIONS.iter().copied().unzip();

        let contractions = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| Error::config(format!("Failed to build contraction matcher: {e}")))?;

        let alternation = FUSED_PHRASES
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let phrases = Regex::new(&format!(r"\b(?:{alternation})\b"))
            .map_err(|e| Error::config(format!("Failed to build phrase pattern: {e}")))?;

        Ok(Self {
            contractions,
            expansions,
            phrases,
        })
    }

    /// Normalize `text`. Total: every input, including the empty string,
    /// yields a normalized string.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");

        // Single left-to-right pass; expansions are never re-matched.
        let expanded = self.contractions.replace_all(&lowered, self.expansions.as_slice());

        let stripped: String = expanded.chars().filter(|c| *c != '\'').collect();
        let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

        self.phrases
            .replace_all(&collapsed, |caps: &Captures| caps[0].replace(' ', "-"))
            .into_owned()
    }
}
