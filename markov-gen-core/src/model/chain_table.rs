use std::collections::HashMap;

use super::followers::{Follower, FollowerList};

/// An n-gram key: exactly `n` consecutive corpus tokens.
pub type NGram = Vec<String>;

/// The transition table of a word-level Markov chain.
///
/// Maps every n-gram observed in the corpus to the ordered list of tokens
/// (or the stop sentinel) seen to follow it. Built once by
/// [`ChainBuilder`](super::builder::ChainBuilder), read-only afterwards;
/// generation never mutates it, so any number of walks may run against the
/// same table.
///
/// # Invariants
/// - Every key has length exactly `n`
/// - Every stored `FollowerList` is non-empty
/// - The final window of the source corpus maps to a list whose terminal
///   entry is `Stop`
/// - The stop sentinel only ever appears as a list entry, never inside a key
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainTable {
	/// Window size the table was built with.
	n: usize,
	/// n-gram -> observed followers, in corpus order.
	entries: HashMap<NGram, FollowerList>,
}

impl ChainTable {
	/// Creates an empty table for n-token keys.
	pub(crate) fn new(n: usize) -> Self {
		Self { n, entries: HashMap::new() }
	}

	/// Window size this table was built with.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Number of distinct n-gram keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True if the corpus was too short to produce any key.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over the n-gram keys in arbitrary order.
	pub fn keys(&self) -> impl Iterator<Item = &NGram> {
		self.entries.keys()
	}

	/// Looks up the follower list for a key.
	pub fn followers(&self, key: &[String]) -> Option<&FollowerList> {
		self.entries.get(key)
	}

	/// Records one observed follower for `key`, creating the list on first
	/// sight of the key.
	pub(crate) fn record(&mut self, key: NGram, follower: Follower) {
		self.entries.entry(key).or_insert_with(FollowerList::new).push(follower);
	}
}
