//! Fragment shifting
//!
//! Re-inserts a removed fragment at every non-leading position of the base and
//! keeps the candidates the lexicon knows. Bases are short, so a linear scan
//! with hash lookups is all this needs.

use crate::core::{Lexicon, Word};
use std::collections::BTreeSet;

/// Build the candidate formed by inserting `fragment` into `base` at `index`
///
/// Index 0 reproduces the original word; `enumerate_solutions` never uses it.
///
/// # Panics
/// Panics if `index > base.len()` or `index` is not on a char boundary.
#[must_use]
pub fn insert_fragment(base: &str, fragment: &str, index: usize) -> String {
    let (head, tail) = base.split_at(index);
    let mut candidate = String::with_capacity(base.len() + fragment.len());
    candidate.push_str(head);
    candidate.push_str(fragment);
    candidate.push_str(tail);
    candidate
}

/// Every lexicon word formed by inserting `fragment` into `base` at an index
/// in `1..=base.len()`
///
/// An empty base has no valid index and yields no solutions.
///
/// # Examples
/// ```
/// use two_bits::core::{Lexicon, Word};
/// use two_bits::puzzle::enumerate_solutions;
///
/// let lexicon = Lexicon::from_words(
///     ["reward", "warred"].iter().map(|w| Word::new(w).unwrap()),
/// ).unwrap();
///
/// let solutions = enumerate_solutions(&lexicon, "ward", "re");
/// let texts: Vec<&str> = solutions.iter().map(Word::text).collect();
/// assert_eq!(texts, ["warred"]);
/// ```
#[must_use]
pub fn enumerate_solutions(lexicon: &Lexicon, base: &str, fragment: &str) -> BTreeSet<Word> {
    (1..=base.len())
        .filter(|&index| base.is_char_boundary(index))
        .map(|index| insert_fragment(base, fragment, index))
        .filter(|candidate| lexicon.contains(candidate))
        .filter_map(|candidate| Word::new(candidate).ok())
        .collect()
}

/// Solutions for `word` split at `bits`; empty if the word is too short
#[must_use]
pub fn solutions_for(lexicon: &Lexicon, word: &Word, bits: usize) -> BTreeSet<Word> {
    word.split(bits)
        .map(|(fragment, base)| enumerate_solutions(lexicon, base, fragment))
        .unwrap_or_default()
}
