//! Word analysis command
//!
//! Shows what a single starting word shifts into and which round it expands to.

use crate::core::{Lexicon, Word, WordError};
use crate::puzzle::{PLACEHOLDER, Round, RoundGenerator, solutions_for};
use std::collections::BTreeSet;
use thiserror::Error;

/// Result of analyzing a starting word
pub struct AnalysisResult {
    pub word: String,
    pub masked: String,
    /// Solutions reachable from this word alone
    pub own_solutions: BTreeSet<Word>,
    /// The expanded round, present when the word has solutions
    pub round: Option<Round>,
}

/// Reasons a word cannot be analyzed
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("word '{0}' not in word list")]
    NotInLexicon(String),
    #[error("word '{word}' needs more than {bits} letters")]
    TooShort { word: String, bits: usize },
}

/// Analyze `word` as a potential starting word
///
/// # Errors
///
/// Returns an error if:
/// - The word is not a single alphabetic word
/// - The word is not in the lexicon
/// - The word is too short to split at the fragment size
pub fn analyze_word(
    word: &str,
    lexicon: &Lexicon,
    generator: &RoundGenerator<'_>,
) -> Result<AnalysisResult, AnalyzeError> {
    let word = Word::new(word)?;
    let bits = generator.config().bits;

    if !lexicon.contains(word.text()) {
        return Err(AnalyzeError::NotInLexicon(word.text().to_string()));
    }

    let Some(base) = word.base(bits) else {
        return Err(AnalyzeError::TooShort {
            word: word.text().to_string(),
            bits,
        });
    };

    Ok(AnalysisResult {
        masked: format!("{}{base}", PLACEHOLDER.to_string().repeat(bits)),
        own_solutions: solutions_for(lexicon, &word, bits),
        round: generator.round_from_seed(&word),
        word: word.text().to_string(),
    })
}
