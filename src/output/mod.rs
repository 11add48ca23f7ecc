//! Terminal output formatting
//!
//! Display utilities for the game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_banner, print_reveal, print_survey_result};
