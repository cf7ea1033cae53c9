// Per-text statistics shown next to a comparison.
//
// Word counts here are raw whitespace-separated chunks, matching what a
// reader would count by eye, while common occurrences are counted over
// tokens so punctuation does not hide a match.

use serde::Serialize;

use crate::compare::tokenize::tokens;
use crate::compare::ComparisonResult;

/// Word statistics for one side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    /// Whitespace-separated chunks in the text
    pub word_count: usize,
    /// Token occurrences in the text that are common words
    pub common_occurrences: usize,
    /// `word_count` minus the number of distinct common words
    pub unique_words: usize,
    /// Share of the text's words that are common, to one decimal place
    /// (0 for an empty text, at most 100)
    pub match_percent: f64,
}

impl TextStats {
    pub fn measure(text: &str, result: &ComparisonResult) -> Self {
        let word_count = text.split_whitespace().count();
        let common_occurrences = tokens(text)
            .filter(|token| result.is_common(&token.key))
            .count();
        Self {
            word_count,
            common_occurrences,
            unique_words: word_count.saturating_sub(result.count),
            match_percent: match_percent(common_occurrences, word_count),
        }
    }
}

/// `common / words * 100` rounded to one decimal place.
///
/// A chunk like `hello-hello` holds two tokens, so occurrences can outnumber
/// chunks; the result is capped at 100.
fn match_percent(common: usize, words: usize) -> f64 {
    if words == 0 {
        return 0.0;
    }
    let percent = (common as f64 / words as f64 * 100.0).min(100.0);
    (percent * 10.0).round() / 10.0
}

/// Statistics for both texts plus the headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    pub text1: TextStats,
    pub text2: TextStats,
    pub common_count: usize,
    pub similarity: u8,
}

impl ComparisonStats {
    pub fn measure(text1: &str, text2: &str, result: &ComparisonResult) -> Self {
        Self {
            text1: TextStats::measure(text1, result),
            text2: TextStats::measure(text2, result),
            common_count: result.count,
            similarity: result.similarity,
        }
    }
}
