// Stop-word lists: process-wide, read-only sets of function words.
//
// The minimal list is the default and backs the free `compare` and
// `is_stop_word` functions. The extended list adds the English Stopwords-ISO
// list from the `stop-words` crate for callers that want heavier filtering.
// Both are built on first use and never mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};

/// The default English stop words: articles, pronouns, conjunctions,
/// auxiliaries and question words.
pub const MINIMAL_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "this", "but", "they",
    "have", "had", "what", "when", "where", "who", "which", "why", "how",
];

static MINIMAL: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| MINIMAL_STOP_WORDS.iter().copied().collect());

static EXTENDED: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let mut words: HashSet<String> = get(LANGUAGE::English)
        .iter()
        .map(|word| word.to_lowercase())
        .collect();
    words.extend(MINIMAL_STOP_WORDS.iter().map(|word| word.to_string()));
    words
});

/// Which stop-word set a comparison filters against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordList {
    /// The fixed built-in list (default)
    #[default]
    Minimal,
    /// Stopwords-ISO English plus the built-in list
    Extended,
}

impl StopWordList {
    /// Membership test for a token that is already lower-cased.
    pub fn contains(self, key: &str) -> bool {
        match self {
            Self::Minimal => MINIMAL.contains(key),
            Self::Extended => EXTENDED.contains(key),
        }
    }

    /// Case-insensitive membership test for arbitrary input.
    pub fn is_stop_word(self, word: &str) -> bool {
        self.contains(&word.to_lowercase())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for StopWordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StopWordList {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "extended" => Ok(Self::Extended),
            other => anyhow::bail!("unknown stop-word list '{other}' (expected minimal or extended)"),
        }
    }
}
