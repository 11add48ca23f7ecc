//! Lexicon survey
//!
//! Tries every word as a seed and reports how many would deal a round.

use crate::core::{Lexicon, Word};
use crate::puzzle::{Round, RoundGenerator};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

/// Statistics from surveying a lexicon
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_words: usize,
    pub viable_seeds: usize,
    pub degenerate_seeds: usize,
    pub unsolvable_seeds: usize,
    /// Distinct displayed puzzles among viable seeds
    pub distinct_puzzles: usize,
    /// Length -> (words surveyed, viable seeds)
    pub by_length: BTreeMap<usize, (usize, usize)>,
    /// Displayed puzzle with the most accepted answers
    pub richest_puzzle: Option<(String, usize)>,
    pub duration: Duration,
}

enum SeedKind {
    Unsolvable,
    Degenerate,
    Viable(Round),
}

/// Classify every word (or the first `limit`) as a seed
///
/// Seeds are evaluated in parallel. A progress bar is drawn when
/// `show_progress` is set.
#[must_use]
pub fn run_survey(
    generator: &RoundGenerator<'_>,
    lexicon: &Lexicon,
    limit: Option<usize>,
    show_progress: bool,
) -> SurveyStatistics {
    let words: &[Word] = &lexicon.words()[..limit.unwrap_or(lexicon.len()).min(lexicon.len())];

    let pb = if show_progress {
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );
    pb.set_message("Surveying seeds");

    let start = Instant::now();

    let classified: Vec<(usize, SeedKind)> = words
        .par_iter()
        .map(|word| {
            let kind = match generator.round_from_seed(word) {
                None => SeedKind::Unsolvable,
                Some(round) if round.is_degenerate() => SeedKind::Degenerate,
                Some(round) => SeedKind::Viable(round),
            };
            pb.inc(1);
            (word.len(), kind)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut stats = SurveyStatistics {
        total_words: words.len(),
        viable_seeds: 0,
        degenerate_seeds: 0,
        unsolvable_seeds: 0,
        distinct_puzzles: 0,
        by_length: BTreeMap::new(),
        richest_puzzle: None,
        duration: Duration::ZERO,
    };
    let mut puzzles: BTreeSet<String> = BTreeSet::new();

    for (len, kind) in classified {
        let entry = stats.by_length.entry(len).or_insert((0, 0));
        entry.0 += 1;

        match kind {
            SeedKind::Unsolvable => stats.unsolvable_seeds += 1,
            SeedKind::Degenerate => stats.degenerate_seeds += 1,
            SeedKind::Viable(round) => {
                stats.viable_seeds += 1;
                entry.1 += 1;

                let answers = round.solutions().len();
                if stats
                    .richest_puzzle
                    .as_ref()
                    .is_none_or(|(_, best)| answers > *best)
                {
                    stats.richest_puzzle = Some((round.masked(), answers));
                }
                puzzles.insert(round.masked());
            }
        }
    }

    stats.distinct_puzzles = puzzles.len();
    stats.duration = start.elapsed();
    debug!(
        "Survey: {}/{} viable seeds, {} distinct puzzles",
        stats.viable_seeds, stats.total_words, stats.distinct_puzzles
    );

    stats
}
