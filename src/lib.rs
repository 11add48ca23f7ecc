//! Two Bits
//!
//! A word puzzle: the first two letters of a word are hidden, and the player
//! must find the other word formed by shifting those letters elsewhere.
//! `??ward` comes from REWARD, and moving RE along gives WARRED.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use two_bits::core::{Lexicon, Word, partition};
//! use two_bits::puzzle::{RoundConfig, RoundGenerator};
//!
//! let lexicon = Lexicon::from_words(
//!     ["reward", "warred"].iter().map(|w| Word::new(w).unwrap()),
//! ).unwrap();
//! let parts = partition(&lexicon);
//! let generator = RoundGenerator::new(&lexicon, &parts, RoundConfig::default());
//!
//! let round = generator.generate_round(&mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(round.masked(), "??ward");
//! assert!(round.accepts("WARRED"));
//! ```

// Core domain types
pub mod core;

// Fragment shifting and round generation
pub mod puzzle;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
