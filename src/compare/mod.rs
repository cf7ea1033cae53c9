// Text comparison core: tokenization, stop words, frequency maps, scoring.

pub mod comparator;
pub mod frequency;
pub mod stopwords;
pub mod tokenize;

pub use comparator::{compare, is_stop_word, Comparator, ComparisonResult};
pub use stopwords::StopWordList;
