//! Two Bits - CLI
//!
//! Play the fragment-shifting word puzzle, or inspect how a word list
//! behaves as a source of rounds.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use two_bits::{
    commands::{Session, analyze_word, run_survey},
    core::{DEFAULT_BITS, Lexicon, partition},
    output::{print_analysis_result, print_survey_result},
    puzzle::{DEFAULT_MAX_ATTEMPTS, RoundConfig, RoundGenerator},
    wordlists::loader::{BUILTIN, load_source},
};

#[derive(Parser)]
#[command(
    name = "two_bits",
    about = "Find the word formed by shifting a hidden two-letter fragment",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'builtin' (default) or path to a one-word-per-line file
    #[arg(short = 'w', long, global = true, default_value = BUILTIN)]
    wordlist: String,

    /// Number of hidden letters shifted to form the answer
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_BITS as u8,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    bits: u8,

    /// Seed for reproducible rounds
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Random seeds to try per round before giving up
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds interactively (default)
    Play,

    /// Show the solutions and round a starting word would produce
    Analyze {
        /// Starting word to analyze
        word: String,
    },

    /// Count how many words in the list can seed a round
    Survey {
        /// Only survey the first N words
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let lexicon = load_source(&cli.wordlist)
        .with_context(|| format!("could not build a lexicon from '{}'", cli.wordlist))?;
    let parts = partition(&lexicon);
    let config = RoundConfig::new(usize::from(cli.bits)).with_max_attempts(cli.max_attempts);
    let generator = RoundGenerator::new(&lexicon, &parts, config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&generator, cli.seed),
        Commands::Analyze { word } => run_analyze_command(&word, &lexicon, &generator),
        Commands::Survey { limit } => {
            run_survey_command(&generator, &lexicon, limit);
            Ok(())
        }
    }
}

fn run_play_command(generator: &RoundGenerator<'_>, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let mut session = Session::new(generator);
    session
        .run(&mut input, &mut out, &mut rng)
        .context("game session ended unexpectedly")?;
    Ok(())
}

fn run_analyze_command(
    word: &str,
    lexicon: &Lexicon,
    generator: &RoundGenerator<'_>,
) -> Result<()> {
    let result = analyze_word(word, lexicon, generator)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_survey_command(generator: &RoundGenerator<'_>, lexicon: &Lexicon, limit: Option<usize>) {
    println!(
        "Surveying {} words with {}-letter fragments...",
        limit.map_or(lexicon.len(), |n| n.min(lexicon.len())),
        generator.config().bits
    );

    let stats = run_survey(generator, lexicon, limit, true);
    print_survey_result(&stats);
}
