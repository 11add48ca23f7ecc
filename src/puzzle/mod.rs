//! Puzzle generation
//!
//! Fragment shifting and the round generator built on top of it.

pub mod generator;
mod round;
pub mod shifter;

pub use generator::{DEFAULT_MAX_ATTEMPTS, RoundConfig, RoundError, RoundGenerator};
pub use round::{PLACEHOLDER, Round, is_degenerate};
pub use shifter::{enumerate_solutions, insert_fragment, solutions_for};
