use thiserror::Error;

/// Failures surfaced by chain construction and text generation.
///
/// All variants are local, synchronous failures with no partial side
/// effects: no table and no partial output is exposed when one is returned.
/// Translating them into user-facing messages and exit codes is the
/// caller's job; this crate does not log or print on the failure path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
	/// The requested window size cannot form an n-gram.
	#[error("window size must be at least 1, got {0}")]
	InvalidWindowSize(usize),

	/// The table has no keys: the corpus was too short for the window size.
	#[error("chain table is empty (corpus too short for the window size)")]
	EmptyChainTable,

	/// No key's first token begins with an uppercase letter, so a walk has
	/// nowhere to start.
	#[error("no n-gram in the table starts with a capitalized token")]
	NoCapitalizedStart,
}
