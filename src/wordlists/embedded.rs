//! Embedded word bank
//!
//! Word bank compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/word_bank.rs"));
