// Wordshare: shared-word detection and similarity scoring for two texts
//
// This is the library root. The comparison core lives in `compare` and is
// pure; the other modules support callers that display or report results.

pub mod compare;
pub mod config;
pub mod highlight;
pub mod output;
pub mod stats;

pub use compare::{compare, is_stop_word, Comparator, ComparisonResult, StopWordList};
