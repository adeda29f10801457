use rand::Rng;
use rand::prelude::IndexedRandom;

/// One observed continuation of an n-gram.
///
/// A follower is either a real corpus token or the stop sentinel marking
/// the end of generatable text. The sentinel is its own variant rather than
/// a reserved string, so it can never collide with a token that actually
/// appears in the corpus and can never be joined into output text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Follower {
	/// A token observed to follow the n-gram in the corpus.
	Token(String),
	/// End of the corpus; drawing it terminates a generation walk.
	Stop,
}

/// Ordered list of observed followers for a single n-gram.
///
/// Conceptually, this is a node in the Markov chain: entries are outgoing
/// edges, and an edge observed k times appears k times, giving it k times
/// the sampling weight.
///
/// # Responsibilities
/// - Accumulate follower entries during table construction
/// - Sample one entry uniformly at random during generation
///
/// # Invariants
/// - Entry order reflects the order followers were encountered in the corpus
/// - Duplicates are preserved, never collapsed into counts
/// - Never empty once stored in a `ChainTable`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FollowerList {
	entries: Vec<Follower>,
}

impl FollowerList {
	/// Creates an empty list.
	pub(crate) fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Appends an observed follower, preserving duplicates.
	pub(crate) fn push(&mut self, follower: Follower) {
		self.entries.push(follower);
	}

	/// Samples one entry uniformly at random.
	///
	/// An entry present k times is k times as likely to be drawn; this is
	/// how corpus frequency weights the walk.
	///
	/// Returns `None` if the list is empty.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Follower> {
		self.entries.choose(rng)
	}

	/// Number of entries, counting duplicates.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True if no follower has been recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over entries in observation order.
	pub fn iter(&self) -> impl Iterator<Item = &Follower> {
		self.entries.iter()
	}
}
