// Unit tests for tokenization policy.
//
// Pins down the boundary rules the comparison depends on: what counts as a
// word character, how case is folded, and which runs are dropped as numbers.

use wordshare::compare::tokenize::{tokenize, tokens};

#[test]
fn punctuation_is_a_boundary() {
    assert_eq!(
        tokenize("hello, world! How are you?"),
        vec!["hello", "world", "how", "are", "you"]
    );
    assert_eq!(tokenize("Hello... World: testing!"), vec!["hello", "world", "testing"]);
}

#[test]
fn hyphen_splits_but_underscore_does_not() {
    assert_eq!(tokenize("hello-world"), vec!["hello", "world"]);
    assert_eq!(tokenize("test_case"), vec!["test_case"]);
    assert_eq!(tokenize("_private"), vec!["_private"]);
}

#[test]
fn lowercases_every_token() {
    assert_eq!(tokenize("HeLLo WORLD Ünïcode"), vec!["hello", "world", "ünïcode"]);
}

#[test]
fn ascii_digit_runs_are_dropped() {
    assert_eq!(tokenize("123 456 7"), Vec::<String>::new());
    assert_eq!(tokenize("test 123 world"), vec!["test", "world"]);
    // A decimal point splits the number into two numeric runs
    assert!(tokenize("3.14").is_empty());
}

#[test]
fn mixed_letter_digit_runs_are_kept() {
    assert_eq!(tokenize("world2 test3 2fast"), vec!["world2", "test3", "2fast"]);
}

#[test]
fn unicode_letters_are_word_characters() {
    assert_eq!(tokenize("世界和平 peace"), vec!["世界和平", "peace"]);
    assert_eq!(tokenize("Ünïcode naïve"), vec!["ünïcode", "naïve"]);
}

#[test]
fn decomposed_accents_stay_attached() {
    // e + U+0301 COMBINING ACUTE ACCENT
    assert_eq!(tokenize("Cafe\u{301}!"), vec!["cafe\u{301}"]);
    assert_eq!(tokenize("cafe"), vec!["cafe"]);
}

#[test]
fn indic_words_are_not_split_at_vowel_signs() {
    // Virama and vowel signs are combining marks inside the word
    assert_eq!(tokenize("नमस्ते"), vec!["नमस्ते"]);
    assert_eq!(tokenize("नमस्ते, मित्र"), vec!["नमस्ते", "मित्र"]);
}

#[test]
fn blank_input_has_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \n\t  ").is_empty());
    assert!(tokenize("... !!! ---").is_empty());
}

#[test]
fn token_spans_cover_source_words() {
    let text = "  Rust-lang,  ROCKS ";
    let found: Vec<(String, &str)> = tokens(text)
        .map(|t| (t.key, &text[t.span]))
        .collect();
    assert_eq!(
        found,
        vec![
            ("rust".to_string(), "Rust"),
            ("lang".to_string(), "lang"),
            ("rocks".to_string(), "ROCKS"),
        ]
    );
}
