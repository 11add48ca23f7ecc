//! The in-memory word list
//!
//! A `Lexicon` holds each word once, in the order it was first seen, plus a
//! hash set for constant-time membership checks.

use super::word::Word;
use log::info;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal problems building a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The word list could not be read
    #[error("failed to load word list from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The word list held no usable words
    #[error("word list contains no usable words")]
    Empty,
}

/// A set of unique words supporting membership tests and random sampling
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Lexicon {
    /// Build a lexicon from already-validated words
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `LexiconError::Empty` if no words remain.
    pub fn from_words<I>(words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = Word>,
    {
        let mut index = FxHashSet::default();
        let mut unique = Vec::new();

        for word in words {
            if index.insert(word.clone()) {
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(LexiconError::Empty);
        }

        Ok(Self {
            words: unique,
            index,
        })
    }

    /// Build a lexicon from raw text, one word per line
    ///
    /// Blank lines and lines that are not a single alphabetic word are
    /// skipped.
    ///
    /// # Errors
    /// Returns `LexiconError::Empty` if no line holds a usable word.
    pub fn parse(content: &str) -> Result<Self, LexiconError> {
        let mut skipped = 0usize;
        let words: Vec<Word> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let word = Word::new(line).ok();
                if word.is_none() {
                    skipped += 1;
                }
                word
            })
            .collect();

        let lexicon = Self::from_words(words)?;
        info!(
            "Loaded {} words ({skipped} lines skipped)",
            lexicon.len()
        );
        Ok(lexicon)
    }

    /// Load a lexicon from a word list file
    ///
    /// # Errors
    /// Returns `LexiconError::Load` if the file is missing or unreadable, and
    /// `LexiconError::Empty` if it holds no usable words.
    ///
    /// # Examples
    /// ```no_run
    /// use two_bits::core::Lexicon;
    ///
    /// let lexicon = Lexicon::load("data/word_bank.txt").unwrap();
    /// println!("Loaded {} words", lexicon.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Pick a word uniformly at random
    ///
    /// The lexicon is never empty, so this always yields a word.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // `from_words` rejects empty input, so `choose` cannot miss
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    /// Check whether `candidate` is in the lexicon (case-sensitive, lowercase)
    #[inline]
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.index.contains(candidate)
    }

    /// Number of unique words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no words (never true once constructed)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// The words as a slice, in first-seen order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
