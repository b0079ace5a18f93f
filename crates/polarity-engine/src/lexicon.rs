//! Positive/negative word lexicon and wordset resolution

use polarity_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Word list family to load a lexicon from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wordset {
    Standard,
    Extended,
    Custom,
}

impl Wordset {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Wordset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wordset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            "custom" => Ok(Self::Custom),
            other => Err(Error::InvalidWordset(other.to_string())),
        }
    }
}

/// Resolved locations of the two word files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconPaths {
    pub positive: PathBuf,
    pub negative: PathBuf,
}

impl LexiconPaths {
    /// Resolve word file paths for a wordset.
    ///
    /// Bundled wordsets live under `<assets_dir>/<wordset>/`. The custom
    /// wordset requires both explicit paths.
    pub fn resolve(
        wordset: Wordset,
        assets_dir: &Path,
        positive: Option<&Path>,
        negative: Option<&Path>,
    ) -> Result<Self> {
        match wordset {
            Wordset::Custom => match (positive, negative) {
                (Some(positive), Some(negative)) => Ok(Self {
                    positive: positive.to_path_buf(),
                    negative: negative.to_path_buf(),
                }),
                _ => Err(Error::MissingCustomFiles),
            },
            bundled => {
                let dir = assets_dir.join(bundled.as_str());
                Ok(Self {
                    positive: dir.join("positive_words.txt"),
                    negative: dir.join("negative_words.txt"),
                })
            }
        }
    }
}

/// Positive and negative word sets, immutable once built
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from in-memory word lists
    pub fn new<P, N, S, T>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// Load both word files
    pub fn from_paths(paths: &LexiconPaths) -> Result<Self> {
        let positive = load_words(&paths.positive)?;
        let negative = load_words(&paths.negative)?;

        info!(
            positive = positive.len(),
            negative = negative.len(),
            "Loaded lexicon"
        );

        Ok(Self { positive, negative })
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    /// Number of (positive, negative) entries
    pub fn counts(&self) -> (usize, usize) {
        (self.positive.len(), self.negative.len())
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Read a word file: one token per line, trailing whitespace trimmed,
/// blank lines skipped.
pub fn load_words(path: impl AsRef<Path>) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::lexicon_load(path, e))?;

    let words: HashSet<String> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        warn!(path = %path.display(), "Word file is empty");
    } else {
        debug!(path = %path.display(), count = words.len(), "Read word file");
    }
    Ok(words)
}
