//! Words grouped by length
//!
//! Built once from a `Lexicon` so the round generator only scans words that
//! could share a displayed puzzle with the seed.

use super::lexicon::Lexicon;
use super::word::Word;
use rustc_hash::FxHashMap;

/// Mapping from word length to the words of that length
///
/// Every lexicon word lands in exactly one bucket. Within a bucket words keep
/// lexicon order.
#[derive(Debug, Clone)]
pub struct LengthPartition<'a> {
    buckets: FxHashMap<usize, Vec<&'a Word>>,
}

impl<'a> LengthPartition<'a> {
    /// Group the lexicon's words by length in a single pass
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        let mut buckets: FxHashMap<usize, Vec<&'a Word>> = FxHashMap::default();
        for word in lexicon {
            buckets.entry(word.len()).or_default().push(word);
        }
        Self { buckets }
    }

    /// Words of exactly `len` letters; empty if there are none
    #[inline]
    #[must_use]
    pub fn bucket(&self, len: usize) -> &[&'a Word] {
        self.buckets.get(&len).map_or(&[], Vec::as_slice)
    }

    /// All lengths that have at least one word, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Total number of words across all buckets
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Group a lexicon by word length
#[must_use]
pub fn partition(lexicon: &Lexicon) -> LengthPartition<'_> {
    LengthPartition::new(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::from_words(words.iter().map(|w| Word::new(w).unwrap())).unwrap()
    }

    #[test]
    fn groups_by_length() {
        let lex = lexicon(&["host", "reward", "shot", "siren", "warred"]);
        let parts = partition(&lex);

        let fours: Vec<&str> = parts.bucket(4).iter().map(|w| w.text()).collect();
        let fives: Vec<&str> = parts.bucket(5).iter().map(|w| w.text()).collect();
        let sixes: Vec<&str> = parts.bucket(6).iter().map(|w| w.text()).collect();

        assert_eq!(fours, ["host", "shot"]);
        assert_eq!(fives, ["siren"]);
        assert_eq!(sixes, ["reward", "warred"]);
    }

    #[test]
    fn every_word_in_exactly_one_bucket() {
        let lex = lexicon(&["a", "to", "tea", "team", "teams", "meat", "mate"]);
        let parts = partition(&lex);

        assert_eq!(parts.word_count(), lex.len());
        for word in &lex {
            let hits = parts
                .lengths()
                .into_iter()
                .filter(|&len| parts.bucket(len).contains(&word))
                .count();
            assert_eq!(hits, 1, "{word} should be in exactly one bucket");
            assert!(parts.bucket(word.len()).contains(&word));
        }
    }

    #[test]
    fn missing_length_is_empty() {
        let lex = lexicon(&["lyre", "rely"]);
        let parts = partition(&lex);
        assert!(parts.bucket(9).is_empty());
        assert_eq!(parts.lengths(), vec![4]);
    }
}
