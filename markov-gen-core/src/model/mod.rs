//! Top-level module for the Markov chain generation system.
//!
//! This module provides a word-level n-gram text generator, including:
//! - Corpus tokenization and table construction (`ChainBuilder`)
//! - The transition table and its key type (`ChainTable`, `NGram`)
//! - Follower entries with frequency-preserving sampling (`FollowerList`)
//! - Random-walk text generation (`TextGenerator`)

/// Corpus tokenization and transition-table construction.
///
/// Slides an n-token window over the corpus and records every observed
/// follower, including the terminal stop sentinel.
pub mod builder;

/// The n-gram transition table.
///
/// Maps each observed n-gram to the ordered list of its followers.
/// Built once, read-only afterwards.
pub mod chain_table;

/// Follower entries and per-key follower lists.
///
/// Tracks observed continuations in corpus order and supports uniform
/// random sampling with an injected RNG.
pub mod followers;

/// Random-walk text generation over a built table.
///
/// Picks a capitalized start key, then samples followers until the stop
/// sentinel is drawn.
pub mod generator;
