//! Sentence and clause segmentation of normalized text
//!
//! Sentences end at `.`, `?` or `!`. Within a sentence, a clause boundary is
//! placed immediately after every conjunction token, so the conjunction stays
//! the last token of the clause it closes.

use crate::tables::LexicalTables;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens to a sentence terminator after splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationPolicy {
    /// Drop the terminator
    #[default]
    Discard,
    /// Reattach the terminator to the sentence text
    Retain,
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

/// Ordered tokens between two clause boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Clause<'a> {
    pub fn new(tokens: Vec<&'a str>) -> Self {
        Self { tokens }
    }

    /// Tokenize on whitespace without looking for conjunctions
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.split_whitespace().collect())
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Clause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// One sentence and its clauses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub clauses: Vec<Clause<'a>>,
}

/// Split normalized text into trimmed, non-empty sentences
pub fn split_sentences(
    text: &str,
    punctuation: PunctuationPolicy,
) -> impl Iterator<Item = &str> + '_ {
    text.split_inclusive(is_terminator).filter_map(move |piece| {
        let body = piece.trim_end_matches(is_terminator).trim();
        if body.is_empty() {
            return None;
        }
        match punctuation {
            PunctuationPolicy::Discard => Some(body),
            PunctuationPolicy::Retain => Some(piece.trim()),
        }
    })
}

/// Partition a sentence into clauses at conjunction boundaries
pub fn split_clauses<'a>(sentence: &'a str, tables: &LexicalTables) -> Vec<Clause<'a>> {
    let tokens: Vec<&str> = sentence.split_whitespace().collect();
    let mut clauses = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        if tables.is_conjunction(token) {
            clauses.push(Clause::new(tokens[start..=i].to_vec()));
            start = i + 1;
        }
    }

    // A trailing conjunction leaves an empty span; it is not a clause.
    if start < tokens.len() {
        clauses.push(Clause::new(tokens[start..].to_vec()));
    }

    clauses
}

/// Segmenter bound to a set of lexical tables
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'t> {
    tables: &'t LexicalTables,
    punctuation: PunctuationPolicy,
}

impl<'t> Segmenter<'t> {
    pub fn new(tables: &'t LexicalTables, punctuation: PunctuationPolicy) -> Self {
        Self {
            tables,
            punctuation,
        }
    }

    /// Lazily yield the sentences of `text` with their clauses
    pub fn sentences<'a>(&self, text: &'a str) -> impl Iterator<Item = Sentence<'a>> + 'a
    where
        't: 'a,
    {
        let tables: &'a LexicalTables = self.tables;
        split_sentences(text, self.punctuation).map(move |sentence| Sentence {
            text: sentence,
            clauses: split_clauses(sentence, tables),
        })
    }

    /// Lazily yield every clause of `text`, in order
    pub fn segment<'a>(&self, text: &'a str) -> impl Iterator<Item = Clause<'a>> + 'a
    where
        't: 'a,
    {
        self.sentences(text).flat_map(|sentence| sentence.clauses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> LexicalTables {
        LexicalTables::new().with_conjunctions(["and", "but"])
    }

    fn texts(clauses: &[Clause<'_>]) -> Vec<String> {
        clauses.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_split_sentences_discards_terminators() {
        let sentences: Vec<_> =
            split_sentences("i am happy. are you? yes!", PunctuationPolicy::Discard).collect();
        assert_eq!(sentences, vec!["i am happy", "are you", "yes"]);
    }

    #[test]
    fn test_split_sentences_retains_terminators() {
        let sentences: Vec<_> =
            split_sentences("i am happy. are you? yes", PunctuationPolicy::Retain).collect();
        assert_eq!(sentences, vec!["i am happy.", "are you?", "yes"]);
    }

    #[test]
    fn test_split_sentences_drops_empty_sentences() {
        let sentences: Vec<_> =
            split_sentences("wait... what?! ", PunctuationPolicy::Discard).collect();
        assert_eq!(sentences, vec!["wait", "what"]);
        assert_eq!(split_sentences("", PunctuationPolicy::Discard).count(), 0);
        assert_eq!(split_sentences(" . ? ", PunctuationPolicy::Retain).count(), 0);
    }

    #[test]
    fn test_conjunction_closes_preceding_clause() {
        let clauses = split_clauses("i am happy and i love it", &tables());
        assert_eq!(texts(&clauses), vec!["i am happy and", "i love it"]);
    }

    #[test]
    fn test_no_conjunction_yields_whole_sentence() {
        let clauses = split_clauses("i love it", &tables());
        assert_eq!(texts(&clauses), vec!["i love it"]);
    }

    #[test]
    fn test_multiple_and_trailing_conjunctions() {
        let clauses = split_clauses("good but bad and ugly and", &tables());
        assert_eq!(texts(&clauses), vec!["good but", "bad and", "ugly and"]);

        let clauses = split_clauses("and", &tables());
        assert_eq!(texts(&clauses), vec!["and"]);
    }

    #[test]
    fn test_segment_flattens_sentences() {
        let tables = tables();
        let segmenter = Segmenter::new(&tables, PunctuationPolicy::Discard);

        let sentences: Vec<_> = segmenter.sentences("good and bad. fine").collect();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "good and bad");
        assert_eq!(sentences[0].clauses.len(), 2);

        let clauses: Vec<_> = segmenter.segment("good and bad. fine").collect();
        assert_eq!(texts(&clauses), vec!["good and", "bad", "fine"]);
    }
}
