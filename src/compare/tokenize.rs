// Tokenizer: splits free text into lower-cased comparison keys.
//
// A token is a maximal match of Unicode `\w`: letters, combining marks,
// decimal digits, and connector punctuation such as `_`. Whitespace,
// punctuation and hyphens are all boundaries, so `hello-world` yields two
// tokens while `test_case` stays whole. Runs made only of ASCII digits are
// numbers, not words, and are dropped.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word-run pattern is valid"));

/// A single word extracted from a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lower-cased comparison key
    pub key: String,
    /// Byte range of the word as written in the source text
    pub span: Range<usize>,
}

/// Iterate the tokens of `text` in order, keeping their source spans.
///
/// The spans always fall on char boundaries and never overlap, which is
/// what the highlighter relies on.
pub fn tokens(text: &str) -> impl Iterator<Item = Token> + '_ {
    WORD_RUN
        .find_iter(text)
        .filter(|run| !is_number(run.as_str()))
        .map(|run| Token {
            key: run.as_str().to_lowercase(),
            span: run.range(),
        })
}

/// Tokenize `text` into its ordered sequence of lower-cased keys.
pub fn tokenize(text: &str) -> Vec<String> {
    tokens(text).map(|token| token.key).collect()
}

fn is_number(run: &str) -> bool {
    run.bytes().all(|b| b.is_ascii_digit())
}
