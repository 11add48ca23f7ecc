//! Display functions for rounds and command results

use super::formatters::{create_progress_bar, join_words, letters_phrase};
use crate::commands::{AnalysisResult, SurveyStatistics};
use crate::commands::play::{GIVE_UP, QUIT};
use crate::puzzle::Round;
use colored::Colorize;
use std::io::{self, Write};

const DELINEATE: &str = "=====";
const STARTING_WORDS: &str = "The following were all valid starting word(s): ";
const SOLUTIONS: &str = "The following were all valid solution(s): ";

/// Print the game description and instructions
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_banner<W: Write>(out: &mut W, bits: usize) -> io::Result<()> {
    let letters = letters_phrase(bits);

    writeln!(out, "{}", "GAME DESCRIPTION".bold())?;
    writeln!(
        out,
        "We have taken a word and replaced its first {letters} with question marks."
    )?;
    writeln!(
        out,
        "These {letters}, as a unit, can be shifted elsewhere to form a new word."
    )?;
    if bits == 2 {
        writeln!(out, "For example, ??WARD could represent REWARD.")?;
        writeln!(
            out,
            "Shifting the RE three positions to the right would make WARRED, the answer."
        )?;
    }
    writeln!(
        out,
        "The shifted letters may end up in any position within or at the end of the new word."
    )?;
    writeln!(out, "{DELINEATE}")?;

    writeln!(out, "{}", "INSTRUCTIONS".bold())?;
    writeln!(out, "When prompted, type in your answer.")?;
    writeln!(out, "You get 1 point for each correct answer.")?;
    writeln!(out, "There are no penalties for incorrect answers.")?;
    writeln!(out, "You will play multiple rounds and receive a final score.")?;
    writeln!(
        out,
        "If you give up for that round, type the letter \"{GIVE_UP}\"."
    )?;
    writeln!(out, "If you want to quit the game, type the letter \"{QUIT}\".")?;
    writeln!(out, "{DELINEATE}")
}

/// Print every valid starting word and solution for a finished round
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_reveal<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(
        out,
        "{STARTING_WORDS}{}",
        join_words(round.valid_starting_words())
    )?;
    writeln!(out, "{SOLUTIONS}{}", join_words(round.solutions()))
}

/// Print the result of analyzing one starting word
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Puzzle:        {}", result.masked.bright_white().bold());

    if result.own_solutions.is_empty() {
        println!("   Solutions:     {}", "none".red());
        println!(
            "\n{}",
            "This word cannot seed a round.".bright_black()
        );
        return;
    }

    println!("   Solutions:     {}", join_words(&result.own_solutions).green());

    if let Some(round) = &result.round {
        println!(
            "\n📖 {}",
            "Same puzzle, all starting words:".bright_cyan().bold()
        );
        println!("   Starting words: {}", join_words(round.valid_starting_words()));
        println!("   Accepted:       {}", join_words(round.solutions()));

        if round.is_degenerate() {
            println!(
                "\n{}",
                "Degenerate: the only answer is the word itself, so this round is never dealt."
                    .yellow()
            );
        }
    }
}

/// Print statistics from surveying a lexicon
pub fn print_survey_result(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEXICON SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let viable_pct = if stats.total_words == 0 {
        0.0
    } else {
        stats.viable_seeds as f64 / stats.total_words as f64 * 100.0
    };

    println!("\n📊 {}", "Seeds:".bright_cyan().bold());
    println!("   Words surveyed:   {}", stats.total_words);
    println!(
        "   Viable seeds:     {} ({viable_pct:.1}%)",
        stats.viable_seeds.to_string().green().bold()
    );
    println!("   Degenerate seeds: {}", stats.degenerate_seeds.to_string().yellow());
    println!("   No solutions:     {}", stats.unsolvable_seeds);
    println!("   Distinct puzzles: {}", stats.distinct_puzzles);
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    if let Some((puzzle, count)) = &stats.richest_puzzle {
        println!(
            "   Richest puzzle:   {} ({count} accepted answers)",
            puzzle.bright_white().bold()
        );
    }

    println!("\n📈 {}", "Viable seeds by length:".bright_cyan().bold());
    for (len, &(total, viable)) in &stats.by_length {
        let bar = create_progress_bar(viable as f64, total as f64, 30);
        println!("   {len:2}: {} {viable:4}/{total:<4}", bar.green());
    }
}
