//! Word list loading utilities
//!
//! Builds a `Lexicon` from the embedded word bank or from a file.

use crate::core::{Lexicon, LexiconError, Word};
use std::path::Path;

/// Name accepted on the command line for the embedded word bank
pub const BUILTIN: &str = "builtin";

/// Load a lexicon from a file
///
/// # Errors
///
/// Returns `LexiconError::Load` if the file cannot be read, or
/// `LexiconError::Empty` if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use two_bits::wordlists::loader::load_from_file;
///
/// let lexicon = load_from_file("data/word_bank.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, LexiconError> {
    Lexicon::load(path)
}

/// Resolve a word list source: `builtin` or a file path
///
/// # Errors
///
/// Propagates `LexiconError` from loading or from an empty list.
pub fn load_source(source: &str) -> Result<Lexicon, LexiconError> {
    if source == BUILTIN {
        Lexicon::from_words(words_from_slice(crate::wordlists::WORD_BANK))
    } else {
        load_from_file(source)
    }
}

/// Convert an embedded string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use two_bits::wordlists::loader::words_from_slice;
/// use two_bits::wordlists::WORD_BANK;
///
/// let words = words_from_slice(WORD_BANK);
/// assert_eq!(words.len(), WORD_BANK.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
