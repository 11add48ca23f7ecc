//! Word lists for the puzzle
//!
//! Provides the embedded word bank and file loading.

mod embedded;
pub mod loader;

pub use embedded::{WORD_BANK, WORD_BANK_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Lexicon, partition};
    use crate::puzzle::{RoundConfig, RoundGenerator};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn word_bank_count_matches_const() {
        assert_eq!(WORD_BANK.len(), WORD_BANK_COUNT);
    }

    #[test]
    fn word_bank_entries_are_lowercase_letters() {
        for &word in WORD_BANK {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn word_bank_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = WORD_BANK.iter().collect();
        assert_eq!(unique.len(), WORD_BANK.len());
    }

    #[test]
    fn word_bank_contains_description_example() {
        assert!(WORD_BANK.contains(&"reward"));
        assert!(WORD_BANK.contains(&"warred"));
    }

    #[test]
    fn word_bank_produces_rounds() {
        let lexicon = Lexicon::from_words(loader::words_from_slice(WORD_BANK)).unwrap();
        let parts = partition(&lexicon);
        let generator = RoundGenerator::new(&lexicon, &parts, RoundConfig::default());
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..10 {
            let round = generator.generate_round(&mut rng).unwrap();
            assert!(!round.is_degenerate());
            assert!(!round.solutions().is_empty());
        }
    }
}
