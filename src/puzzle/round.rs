//! A single puzzle round

use crate::core::Word;
use std::collections::BTreeSet;

/// Placeholder printed in place of each hidden fragment letter
pub const PLACEHOLDER: char = '?';

/// One playable puzzle
///
/// `starting_word` decides what is displayed. Any word in
/// `valid_starting_words` would display the same puzzle, and `solutions`
/// holds every answer derivable from any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    starting_word: Word,
    bits: usize,
    valid_starting_words: BTreeSet<Word>,
    solutions: BTreeSet<Word>,
}

impl Round {
    /// Assemble a round from already-computed parts
    #[must_use]
    pub const fn new(
        starting_word: Word,
        bits: usize,
        valid_starting_words: BTreeSet<Word>,
        solutions: BTreeSet<Word>,
    ) -> Self {
        Self {
            starting_word,
            bits,
            valid_starting_words,
            solutions,
        }
    }

    #[must_use]
    pub const fn starting_word(&self) -> &Word {
        &self.starting_word
    }

    #[must_use]
    pub const fn bits(&self) -> usize {
        self.bits
    }

    #[must_use]
    pub const fn valid_starting_words(&self) -> &BTreeSet<Word> {
        &self.valid_starting_words
    }

    #[must_use]
    pub const fn solutions(&self) -> &BTreeSet<Word> {
        &self.solutions
    }

    /// The base shown to the player (starting word minus its fragment)
    #[must_use]
    pub fn base(&self) -> &str {
        self.starting_word.base(self.bits).unwrap_or_default()
    }

    /// The puzzle as displayed, e.g. `??ward`
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use two_bits::core::Word;
    /// use two_bits::puzzle::Round;
    ///
    /// let round = Round::new(Word::new("reward").unwrap(), 2, BTreeSet::new(), BTreeSet::new());
    /// assert_eq!(round.masked(), "??ward");
    /// ```
    #[must_use]
    pub fn masked(&self) -> String {
        let mut masked: String = std::iter::repeat_n(PLACEHOLDER, self.bits).collect();
        masked.push_str(self.base());
        masked
    }

    /// Whether `guess` is an accepted answer, ignoring case and surrounding
    /// whitespace
    #[must_use]
    pub fn accepts(&self, guess: &str) -> bool {
        Word::new(guess).is_ok_and(|word| self.solutions.contains(&word))
    }

    /// True when the only starting word is also the only solution
    ///
    /// Such a round asks the player to find the word they were shown.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        is_degenerate(&self.valid_starting_words, &self.solutions)
    }
}

/// Degeneracy test on raw sets: both singletons holding the same word
#[must_use]
pub fn is_degenerate(valid_starting_words: &BTreeSet<Word>, solutions: &BTreeSet<Word>) -> bool {
    valid_starting_words.len() == 1 && solutions.len() == 1 && valid_starting_words == solutions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<Word> {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn reward_round() -> Round {
        Round::new(
            Word::new("reward").unwrap(),
            2,
            set(&["reward"]),
            set(&["warred"]),
        )
    }

    #[test]
    fn masked_hides_fragment() {
        assert_eq!(reward_round().masked(), "??ward");

        let three = Round::new(Word::new("reward").unwrap(), 3, set(&[]), set(&[]));
        assert_eq!(three.masked(), "???ard");
    }

    #[test]
    fn accepts_is_case_insensitive() {
        let round = reward_round();
        assert!(round.accepts("warred"));
        assert!(round.accepts("WARRED"));
        assert!(round.accepts("  Warred\n"));
        assert!(!round.accepts("reward"));
        assert!(!round.accepts(""));
        assert!(!round.accepts("war red"));
    }

    #[test]
    fn degenerate_only_when_same_singleton() {
        assert!(is_degenerate(&set(&["tutu"]), &set(&["tutu"])));
        assert!(!is_degenerate(&set(&["reward"]), &set(&["warred"])));
        assert!(!is_degenerate(&set(&["tutu", "mama"]), &set(&["tutu"])));
        assert!(!is_degenerate(&set(&["tutu"]), &set(&["tutu", "mama"])));
        assert!(!reward_round().is_degenerate());
    }
}
