//! Word representation
//!
//! A Word is a non-empty, lower-cased run of ASCII letters. Everything the
//! puzzle compares (lexicon entries, solutions, player guesses) goes through
//! this type so case never matters.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A lexicon word, normalized to lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lower-cased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use two_bits::core::Word;
    ///
    /// let word = Word::new("Reward").unwrap();
    /// assert_eq!(word.text(), "reward");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("w0rd").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if !trimmed.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: trimmed.to_ascii_lowercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word has no letters (never true once constructed)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split into the leading `bits`-letter fragment and the remaining base
    ///
    /// Returns `None` when the word is not longer than `bits`, since such a
    /// word leaves no base to shift the fragment into.
    ///
    /// # Examples
    /// ```
    /// use two_bits::core::Word;
    ///
    /// let word = Word::new("reward").unwrap();
    /// assert_eq!(word.split(2), Some(("re", "ward")));
    /// assert_eq!(Word::new("re").unwrap().split(2), None);
    /// ```
    #[must_use]
    pub fn split(&self, bits: usize) -> Option<(&str, &str)> {
        if self.text.len() > bits {
            Some(self.text.split_at(bits))
        } else {
            None
        }
    }

    /// The base left after removing the leading `bits` letters, if any
    #[inline]
    #[must_use]
    pub fn base(&self, bits: usize) -> Option<&str> {
        self.split(bits).map(|(_, base)| base)
    }
}

// Hash must agree with `str` for the `Borrow<str>` lookups in `Lexicon`
impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("reward").unwrap();
        assert_eq!(word.text(), "reward");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("WARRED").unwrap();
        assert_eq!(word.text(), "warred");

        let word2 = Word::new("WaRrEd").unwrap();
        assert_eq!(word2.text(), "warred");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  siren\r\n").unwrap();
        assert_eq!(word.text(), "siren");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("w0rd"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("two words"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("don't"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_split_at_fragment() {
        let word = Word::new("reward").unwrap();
        assert_eq!(word.split(2), Some(("re", "ward")));
        assert_eq!(word.split(3), Some(("rew", "ard")));
        assert_eq!(word.base(2), Some("ward"));
    }

    #[test]
    fn word_split_too_short() {
        assert_eq!(Word::new("re").unwrap().split(2), None);
        assert_eq!(Word::new("a").unwrap().split(2), None);
        assert_eq!(Word::new("abc").unwrap().split(2), Some(("ab", "c")));
    }

    #[test]
    fn word_hash_matches_str() {
        let mut set = rustc_hash::FxHashSet::default();
        set.insert(Word::new("siren").unwrap());
        assert!(set.contains("siren"));
        assert!(!set.contains("resin"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("Mitre").unwrap();
        assert_eq!(format!("{word}"), "mitre");
    }

    #[test]
    fn word_ordering_is_alphabetical() {
        let mut words = vec![
            Word::new("slot").unwrap(),
            Word::new("shot").unwrap(),
            Word::new("spot").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["shot", "slot", "spot"]);
    }
}
