//! Interactive play mode
//!
//! Text prompts on any reader/writer pair: stdin/stdout in the binary,
//! in-memory buffers in tests.

use crate::output::display::{print_banner, print_reveal};
use crate::puzzle::{Round, RoundError, RoundGenerator};
use colored::Colorize;
use log::info;
use rand::Rng;
use std::fmt;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Token that gives up the current round
pub const GIVE_UP: &str = "a";
/// Token that ends the session
pub const QUIT: &str = "q";

const SEARCHING: &str = "Searching for a new starting word...";
const PROMPT: &str = "Find the solution for: ";
const CORRECT: &str = "Correct";
const WRONG: &str = "Incorrect";

/// What the player typed at a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    GiveUp,
    Quit,
    Guess(String),
}

impl PlayerInput {
    /// Classify a line of input; sentinels are matched case-insensitively
    ///
    /// # Examples
    /// ```
    /// use two_bits::commands::PlayerInput;
    ///
    /// assert_eq!(PlayerInput::parse("Q\n"), PlayerInput::Quit);
    /// assert_eq!(PlayerInput::parse("a"), PlayerInput::GiveUp);
    /// assert_eq!(PlayerInput::parse(" Warred "), PlayerInput::Guess("warred".to_string()));
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let normalized = line.trim().to_lowercase();
        match normalized.as_str() {
            GIVE_UP => Self::GiveUp,
            QUIT => Self::Quit,
            _ => Self::Guess(normalized),
        }
    }
}

/// How a single round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Solved,
    GaveUp,
    Quit,
}

/// Running score for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub points: usize,
    pub rounds: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You have scored {} point(s) out of {} round(s)",
            self.points, self.rounds
        )
    }
}

/// Errors that end a session early
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// A sequence of rounds played against one generator
pub struct Session<'a> {
    generator: &'a RoundGenerator<'a>,
    score: Score,
}

impl<'a> Session<'a> {
    #[must_use]
    pub const fn new(generator: &'a RoundGenerator<'a>) -> Self {
        Self {
            generator,
            score: Score {
                points: 0,
                rounds: 0,
            },
        }
    }

    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Play rounds until the player quits or input ends
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if reading or writing fails, and
    /// `SessionError::Round` if no round can be generated.
    pub fn run<I, W, R>(
        &mut self,
        input: &mut I,
        out: &mut W,
        rng: &mut R,
    ) -> Result<Score, SessionError>
    where
        I: BufRead,
        W: Write,
        R: Rng + ?Sized,
    {
        print_banner(out, self.generator.config().bits)?;

        loop {
            writeln!(out, "{SEARCHING}")?;
            self.score.rounds += 1;
            let round = self.generator.generate_round(rng)?;

            let outcome = self.play_round(&round, input, out)?;
            info!(
                "Round {} ({}) ended: {outcome:?}",
                self.score.rounds,
                round.masked()
            );

            if outcome == RoundOutcome::Quit {
                return Ok(self.score);
            }
        }
    }

    /// Prompt for guesses on one round until it is resolved
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the reader or writer.
    pub fn play_round<I, W>(
        &mut self,
        round: &Round,
        input: &mut I,
        out: &mut W,
    ) -> io::Result<RoundOutcome>
    where
        I: BufRead,
        W: Write,
    {
        loop {
            writeln!(out, "{PROMPT}{}", round.masked())?;
            out.flush()?;

            let mut line = String::new();
            let command = if input.read_line(&mut line)? == 0 {
                // End of input behaves like quitting
                PlayerInput::Quit
            } else {
                PlayerInput::parse(&line)
            };

            match command {
                PlayerInput::Quit => {
                    print_reveal(out, round)?;
                    writeln!(out, "{}", self.score)?;
                    return Ok(RoundOutcome::Quit);
                }
                PlayerInput::GiveUp => {
                    print_reveal(out, round)?;
                    writeln!(out, "{}", self.score)?;
                    return Ok(RoundOutcome::GaveUp);
                }
                PlayerInput::Guess(guess) if round.accepts(&guess) => {
                    self.score.points += 1;
                    writeln!(out, "{}", CORRECT.green().bold())?;
                    writeln!(out, "{}", self.score)?;
                    return Ok(RoundOutcome::Solved);
                }
                PlayerInput::Guess(_) => {
                    writeln!(out, "{}", WRONG.red())?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Lexicon, Word, partition};
    use crate::puzzle::RoundConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::from_words(words.iter().map(|w| Word::new(w).unwrap())).unwrap()
    }

    fn play(words: &[&str], script: &str) -> (Score, String) {
        let lex = lexicon(words);
        let parts = partition(&lex);
        let generator = RoundGenerator::new(&lex, &parts, RoundConfig::default());
        let mut session = Session::new(&generator);
        let mut rng = StdRng::seed_from_u64(42);

        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let score = session.run(&mut input, &mut out, &mut rng).unwrap();
        (score, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_sentinels_and_guesses() {
        assert_eq!(PlayerInput::parse("a"), PlayerInput::GiveUp);
        assert_eq!(PlayerInput::parse("A"), PlayerInput::GiveUp);
        assert_eq!(PlayerInput::parse("q\r\n"), PlayerInput::Quit);
        assert_eq!(PlayerInput::parse("Q"), PlayerInput::Quit);
        assert_eq!(
            PlayerInput::parse("WARRED"),
            PlayerInput::Guess("warred".to_string())
        );
        assert_eq!(PlayerInput::parse(""), PlayerInput::Guess(String::new()));
    }

    #[test]
    fn score_display() {
        let score = Score {
            points: 1,
            rounds: 1,
        };
        assert_eq!(
            score.to_string(),
            "You have scored 1 point(s) out of 1 round(s)"
        );
    }

    #[test]
    fn correct_answer_scores_one_of_one() {
        let (score, output) = play(&["reward", "warred"], "warred\nq\n");

        assert!(output.contains("Find the solution for: ??ward"));
        assert!(output.contains("Correct"));
        assert!(output.contains("You have scored 1 point(s) out of 1 round(s)"));
        // Quitting during the second round
        assert_eq!(score, Score { points: 1, rounds: 2 });
    }

    #[test]
    fn uppercase_guess_is_accepted() {
        let (score, output) = play(&["reward", "warred"], "WARRED\nq\n");
        assert!(output.contains("You have scored 1 point(s) out of 1 round(s)"));
        assert_eq!(score.points, 1);
    }

    #[test]
    fn give_up_scores_zero_of_one() {
        let (score, output) = play(&["reward", "warred"], "a\nq\n");

        assert!(output.contains("The following were all valid starting word(s): reward"));
        assert!(output.contains("The following were all valid solution(s): warred"));
        assert!(output.contains("You have scored 0 point(s) out of 1 round(s)"));
        assert!(output.contains("You have scored 0 point(s) out of 2 round(s)"));
        assert_eq!(score, Score { points: 0, rounds: 2 });
    }

    #[test]
    fn wrong_guess_reprompts() {
        let (score, output) = play(&["reward", "warred"], "drawer\nwarred\nq\n");

        assert!(output.contains("Incorrect"));
        assert_eq!(output.matches("Find the solution for: ??ward").count(), 3);
        assert_eq!(score.points, 1);
    }

    #[test]
    fn quit_reveals_and_stops() {
        let (score, output) = play(&["host", "shot", "post", "spot"], "q\n");

        assert!(output.contains("Searching for a new starting word..."));
        assert!(output.contains("The following were all valid starting word(s): host, post"));
        assert!(output.contains("The following were all valid solution(s): shot, spot"));
        assert!(output.contains("You have scored 0 point(s) out of 1 round(s)"));
        assert_eq!(score, Score { points: 0, rounds: 1 });
    }

    #[test]
    fn end_of_input_quits() {
        let (score, _) = play(&["reward", "warred"], "");
        assert_eq!(score, Score { points: 0, rounds: 1 });
    }

    #[test]
    fn banner_printed_once() {
        let (_, output) = play(&["reward", "warred"], "a\na\nq\n");
        assert_eq!(output.matches("GAME DESCRIPTION").count(), 1);
        assert_eq!(output.matches("Searching for a new starting word...").count(), 3);
    }

    #[test]
    fn exhausted_generator_is_an_error() {
        let lex = lexicon(&["tutu"]);
        let parts = partition(&lex);
        let config = RoundConfig::default().with_max_attempts(10);
        let generator = RoundGenerator::new(&lex, &parts, config);
        let mut session = Session::new(&generator);
        let mut rng = StdRng::seed_from_u64(0);

        let mut input = Cursor::new(b"q\n".to_vec());
        let mut out = Vec::new();
        let result = session.run(&mut input, &mut out, &mut rng);
        assert!(matches!(result, Err(SessionError::Round(_))));
    }
}
