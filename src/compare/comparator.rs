// Multiset Jaccard comparison of two texts.
//
// Both texts are tokenized and counted, stop words included. Stop words are
// then skipped when accumulating the score, so they never reach the common
// word set, the intersection, or the union:
//
//   similarity = round(100 * sum(min(c1, c2)) / sum(max(c1, c2)))
//
// Identical raw inputs short-circuit to a 100% result without building the
// second frequency map. That includes inputs with no countable words, which
// the general path would score 0%.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::frequency::count_tokens;
use super::stopwords::StopWordList;
use super::tokenize::tokenize;

/// Outcome of comparing two texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Distinct non-stop-word tokens present in both texts, sorted
    pub common_words: BTreeSet<String>,
    /// Jaccard similarity as a whole percentage, 0 to 100
    pub similarity: u8,
    /// Always `common_words.len()`
    pub count: usize,
    /// Multiset intersection size (stop words excluded)
    pub intersection: usize,
    /// Multiset union size (stop words excluded)
    pub union: usize,
}

impl ComparisonResult {
    /// Whether a lower-cased token is one of the shared words.
    pub fn is_common(&self, key: &str) -> bool {
        self.common_words.contains(key)
    }
}

/// Compares texts against a fixed stop-word list.
///
/// Holds no state between calls: each comparison builds its own frequency
/// maps, so a single comparator can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparator {
    stop_words: StopWordList,
}

impl Comparator {
    pub fn new(stop_words: StopWordList) -> Self {
        Self { stop_words }
    }

    pub fn stop_words(&self) -> StopWordList {
        self.stop_words
    }

    /// Case-insensitive stop-word test against this comparator's list.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.is_stop_word(word)
    }

    /// Find the words two texts share and score their overlap.
    ///
    /// Total over all inputs: empty, punctuation-only, and stop-word-only
    /// texts produce an empty common set rather than an error.
    pub fn compare(&self, text1: &str, text2: &str) -> ComparisonResult {
        if text1 == text2 {
            return self.compare_identical(text1);
        }

        let freq1 = count_tokens(tokenize(text1));
        let freq2 = count_tokens(tokenize(text2));

        let mut common_words = BTreeSet::new();
        let mut intersection = 0;
        let mut union = 0;

        for (word, &count1) in &freq1 {
            if self.stop_words.contains(word) {
                continue;
            }
            let count2 = freq2.get(word).copied().unwrap_or(0);
            intersection += count1.min(count2);
            union += count1.max(count2);
            if count2 > 0 {
                common_words.insert(word.clone());
            }
        }

        // Words only text2 has; text1-only words were counted above.
        for (word, &count2) in &freq2 {
            if !self.stop_words.contains(word) && !freq1.contains_key(word) {
                union += count2;
            }
        }

        let similarity = jaccard_percent(intersection, union);

        debug!(
            distinct_1 = freq1.len(),
            distinct_2 = freq2.len(),
            common = common_words.len(),
            intersection,
            union,
            similarity,
            "Compared texts"
        );

        ComparisonResult {
            count: common_words.len(),
            common_words,
            similarity,
            intersection,
            union,
        }
    }

    fn compare_identical(&self, text: &str) -> ComparisonResult {
        let words: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|word| !self.stop_words.contains(word))
            .collect();
        let occurrences = words.len();
        let common_words: BTreeSet<String> = words.into_iter().collect();

        debug!(
            common = common_words.len(),
            occurrences, "Compared identical texts"
        );

        ComparisonResult {
            count: common_words.len(),
            common_words,
            similarity: 100,
            intersection: occurrences,
            union: occurrences,
        }
    }
}

/// `round(100 * intersection / union)` with halves rounded up; 0 when the
/// union is empty.
pub fn jaccard_percent(intersection: usize, union: usize) -> u8 {
    if union == 0 {
        return 0;
    }
    let intersection = intersection.min(union) as u128;
    let union = union as u128;
    ((200 * intersection + union) / (2 * union)) as u8
}

/// Compare two texts using the default stop-word list.
pub fn compare(text1: &str, text2: &str) -> ComparisonResult {
    Comparator::default().compare(text1, text2)
}

/// Case-insensitive test against the default stop-word list.
pub fn is_stop_word(word: &str) -> bool {
    StopWordList::default().is_stop_word(word)
}
