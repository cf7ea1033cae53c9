// Frequency maps: per-text occurrence counts of each token.

use std::collections::HashMap;

/// Token -> number of occurrences within one text.
pub type FrequencyMap = HashMap<String, usize>;

/// Count every token, stop words and duplicates included.
pub fn count_tokens<I>(tokens: I) -> FrequencyMap
where
    I: IntoIterator<Item = String>,
{
    let mut counts = FrequencyMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
