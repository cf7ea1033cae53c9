// Locating common words inside the original text.
//
// Display layers get byte spans rather than a rewritten string so they can
// apply whatever styling they like without re-tokenizing.

use serde::Serialize;

use crate::compare::tokenize::tokens;
use crate::compare::ComparisonResult;

/// A common word as it appears in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// The lower-cased common word this span matched
    pub token: String,
}

impl Span {
    /// The span's text as written in `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Every occurrence of a common word in `text`, in order.
pub fn common_spans(text: &str, result: &ComparisonResult) -> Vec<Span> {
    tokens(text)
        .filter(|token| result.is_common(&token.key))
        .map(|token| Span {
            start: token.span.start,
            end: token.span.end,
            token: token.key,
        })
        .collect()
}

/// Split `text` into alternating plain and highlighted pieces.
///
/// The pieces concatenate back to exactly `text`; the flag is true for
/// pieces covered by a span.
pub fn segments<'a>(text: &'a str, spans: &[Span]) -> Vec<(&'a str, bool)> {
    let mut pieces = Vec::with_capacity(spans.len() * 2 + 1);
    let mut pos = 0;
    for span in spans {
        if span.start > pos {
            pieces.push((&text[pos..span.start], false));
        }
        pieces.push((span.text(text), true));
        pos = span.end;
    }
    if pos < text.len() {
        pieces.push((&text[pos..], false));
    }
    pieces
}
