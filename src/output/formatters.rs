//! Formatting utilities for terminal output

use crate::core::Word;

/// Separator used when listing words
pub const COMMA_SEPARATOR: &str = ", ";

/// Join words with `, ` in iteration order
///
/// `Round` keeps its sets ordered, so this yields alphabetical lists.
#[must_use]
pub fn join_words<'a, I>(words: I) -> String
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(COMMA_SEPARATOR)
}

/// Describe the fragment length in words, e.g. "two letters"
#[must_use]
pub fn letters_phrase(bits: usize) -> String {
    match bits {
        1 => "letter".to_string(),
        2 => "two letters".to_string(),
        3 => "three letters".to_string(),
        n => format!("{n} letters"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
