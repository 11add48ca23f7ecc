//! Round generation
//!
//! Draws random seeds until one shifts into a lexicon word, widens the round
//! to every word that would display the same puzzle, and throws away rounds
//! whose only answer is the word itself.

use super::round::Round;
use super::shifter::solutions_for;
use crate::core::{DEFAULT_BITS, LengthPartition, Lexicon, Word};
use log::{debug, trace};
use rand::Rng;
use std::collections::BTreeSet;
use thiserror::Error;

/// Default cap on seed draws per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Failure to produce a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No usable round was found within the attempt cap
    #[error("no playable round found after {attempts} attempts; the word list may be too sparse")]
    Exhausted { attempts: usize },
}

/// Settings for round generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Length of the relocated fragment
    pub bits: usize,
    /// Seed draws allowed before giving up
    pub max_attempts: usize,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(bits: usize) -> Self {
        Self {
            bits,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BITS)
    }
}

/// Produces rounds from a lexicon and its length partition
///
/// Termination is probabilistic: it depends on how many lexicon words are
/// viable seeds. `RoundConfig::max_attempts` bounds the search.
pub struct RoundGenerator<'a> {
    lexicon: &'a Lexicon,
    partition: &'a LengthPartition<'a>,
    config: RoundConfig,
}

impl<'a> RoundGenerator<'a> {
    #[must_use]
    pub const fn new(
        lexicon: &'a Lexicon,
        partition: &'a LengthPartition<'a>,
        config: RoundConfig,
    ) -> Self {
        Self {
            lexicon,
            partition,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> RoundConfig {
        self.config
    }

    /// Generate a non-degenerate round
    ///
    /// # Errors
    /// Returns `RoundError::Exhausted` if `max_attempts` seeds were drawn
    /// without producing a usable round.
    pub fn generate_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Round, RoundError> {
        for attempt in 1..=self.config.max_attempts {
            let seed = self.lexicon.random_word(rng);

            let Some(round) = self.round_from_seed(seed) else {
                trace!("Seed {seed} has no solutions (attempt {attempt})");
                continue;
            };

            if round.is_degenerate() {
                trace!("Seed {seed} only shifts into itself (attempt {attempt})");
                continue;
            }

            debug!(
                "Round {} from {seed}: {} starting word(s), {} solution(s) after {attempt} attempt(s)",
                round.masked(),
                round.valid_starting_words().len(),
                round.solutions().len(),
            );
            return Ok(round);
        }

        Err(RoundError::Exhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// Build the round `seed` would produce, or `None` if it has no solutions
    ///
    /// The result may be degenerate; `generate_round` filters those out.
    #[must_use]
    pub fn round_from_seed(&self, seed: &Word) -> Option<Round> {
        let mut solutions = solutions_for(self.lexicon, seed, self.config.bits);
        if solutions.is_empty() {
            return None;
        }

        let base = seed.base(self.config.bits)?;
        let all_starting_words = self.find_all_starting_words(base, seed.len());
        let (valid_starting_words, other_solutions) =
            self.expand_starting_words(&all_starting_words);
        solutions.extend(other_solutions);

        Some(Round::new(
            seed.clone(),
            self.config.bits,
            valid_starting_words,
            solutions,
        ))
    }

    /// Whether `seed` produces a playable, non-degenerate round
    #[must_use]
    pub fn is_viable_seed(&self, seed: &Word) -> bool {
        self.round_from_seed(seed)
            .is_some_and(|round| !round.is_degenerate())
    }

    /// Every word of `len` letters whose base is `base`
    #[must_use]
    pub fn find_all_starting_words(&self, base: &str, len: usize) -> Vec<&'a Word> {
        self.partition
            .bucket(len)
            .iter()
            .copied()
            .filter(|word| word.base(self.config.bits) == Some(base))
            .collect()
    }

    /// Keep the starting words that have solutions of their own
    ///
    /// Returns the valid starting words and the union of their solutions.
    #[must_use]
    pub fn expand_starting_words(
        &self,
        starting_words: &[&Word],
    ) -> (BTreeSet<Word>, BTreeSet<Word>) {
        let mut valid_starting_words = BTreeSet::new();
        let mut solutions = BTreeSet::new();

        for &word in starting_words {
            let found = solutions_for(self.lexicon, word, self.config.bits);
            if !found.is_empty() {
                valid_starting_words.insert(word.clone());
                solutions.extend(found);
            }
        }

        (valid_starting_words, solutions)
    }
}
