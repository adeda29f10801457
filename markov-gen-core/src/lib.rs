//! Word-level Markov chain text generation library.
//!
//! This crate builds an n-gram transition table from a whitespace-tokenized
//! corpus and generates new text by a random walk over that table:
//! - Transition table construction (`ChainBuilder`, `ChainTable`)
//! - Random-walk generation starting from a capitalized n-gram (`TextGenerator`)
//! - Injected randomness: every sampling point takes the caller's RNG
//!
//! File reading, argument parsing, and printing live in the companion CLI
//! crate; this crate only consumes an in-memory token stream and hands back
//! a generated string.

/// Failures surfaced by table construction and generation.
pub mod error;

/// Core chain model and generation logic.
pub mod model;
