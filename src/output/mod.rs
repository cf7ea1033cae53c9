// Output formatting: terminal display of comparison results.

pub mod terminal;

/// Width of the similarity bar in characters.
pub const BAR_WIDTH: usize = 20;

/// Render a similarity percentage as a fixed-width bar, e.g. `[=====     ]`.
pub fn similarity_bar(similarity: u8) -> String {
    let filled = (usize::from(similarity.min(100)) * BAR_WIDTH + 50) / 100;
    let empty = BAR_WIDTH - filled;
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so it never panics on CJK text or
/// accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
