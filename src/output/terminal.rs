// Colored terminal output for comparisons and stop-word lookups.
//
// main.rs decides what to show; this module owns how it looks.

use colored::Colorize;

use super::{similarity_bar, truncate_chars};
use crate::compare::ComparisonResult;
use crate::highlight::{segments, Span};
use crate::stats::ComparisonStats;

/// Longest common-word list line before it gets cut off.
const MAX_WORD_LIST_CHARS: usize = 400;

/// Display the headline similarity, per-text stats, and shared words.
pub fn display_comparison(result: &ComparisonResult, stats: &ComparisonStats) {
    println!("\n{}", "=== Text Comparison ===".bold());
    println!();

    let bar = similarity_bar(result.similarity);
    let colored_bar = if result.similarity >= 60 {
        bar.bright_green()
    } else if result.similarity >= 30 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    };
    println!(
        "  Similarity: {} {}",
        colored_bar,
        format!("{}%", result.similarity).bold()
    );
    println!(
        "  {}",
        format!(
            "(shared {} of {} non-stop-word occurrences)",
            result.intersection, result.union
        )
        .dimmed()
    );
    println!();

    println!(
        "  {:<8} {:>7} {:>8} {:>7} {:>8}",
        "".dimmed(),
        "Words".dimmed(),
        "Common".dimmed(),
        "Unique".dimmed(),
        "Match".dimmed(),
    );
    for (label, side) in [("Text 1", &stats.text1), ("Text 2", &stats.text2)] {
        println!(
            "  {:<8} {:>7} {:>8} {:>7} {:>8}",
            label,
            side.word_count,
            side.common_occurrences,
            side.unique_words,
            format_match(side.match_percent)
        );
    }
    println!();

    if result.common_words.is_empty() {
        println!("  No common words.");
        return;
    }

    let list = result
        .common_words
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "  {} ({}): {}",
        "Common words".bold(),
        result.count,
        truncate_chars(&list, MAX_WORD_LIST_CHARS).bright_green()
    );
}

/// `66.7%`, or a bare `0%` for texts with nothing to match.
pub fn format_match(percent: f64) -> String {
    if percent == 0.0 {
        "0%".to_string()
    } else {
        format!("{percent:.1}%")
    }
}

/// Echo a text with its common words highlighted.
pub fn display_highlighted(label: &str, text: &str, spans: &[Span]) {
    println!("\n{}", format!("--- {label} ---").dimmed());
    println!("{}", render_highlighted(text, spans));
}

/// Build the highlighted form of `text`; plain pieces are left unstyled.
pub fn render_highlighted(text: &str, spans: &[Span]) -> String {
    segments(text, spans)
        .into_iter()
        .map(|(piece, hit)| {
            if hit {
                piece.bright_green().bold().to_string()
            } else {
                piece.to_string()
            }
        })
        .collect()
}

/// Display one line per word saying whether it is a stop word.
pub fn display_stop_words(list_name: &str, answers: &[(String, bool)]) {
    for (word, is_stop) in answers {
        if *is_stop {
            println!("  {:<24} {}", word, format!("stop word ({list_name})").yellow());
        } else {
            println!("  {:<24} {}", word, "not a stop word".green());
        }
    }
}
