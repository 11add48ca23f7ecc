//! Core domain types for the puzzle
//!
//! Words, the lexicon they live in, and the by-length index over it.
//! These are built once at startup and never mutated afterwards.

mod lexicon;
mod partition;
mod word;

pub use lexicon::{Lexicon, LexiconError};
pub use partition::{LengthPartition, partition};
pub use word::{Word, WordError};

/// Default size of the relocated fragment
pub const DEFAULT_BITS: usize = 2;
