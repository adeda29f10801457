use rand::Rng;
use rand::prelude::IteratorRandom;

use super::chain_table::ChainTable;
use super::followers::Follower;
use crate::error::ChainError;

/// Random-walk text generation over a built [`ChainTable`].
///
/// # Responsibilities
/// - Pick a start key uniformly among keys whose first token is capitalized
/// - Walk the chain, sampling one follower per step until the stop sentinel
///   is drawn
/// - Join the walked tokens into the output string
///
/// # Notes
/// - Borrows the table read-only; any number of walks may run against the
///   same table.
/// - All randomness comes from the caller's RNG, so seeded walks are
///   reproducible.
#[derive(Clone, Copy, Debug)]
pub struct TextGenerator<'a> {
	table: &'a ChainTable,
}

impl<'a> TextGenerator<'a> {
	/// Creates a generator over a built table.
	pub fn new(table: &'a ChainTable) -> Self {
		Self { table }
	}

	/// Generates one text by walking the chain.
	///
	/// The walk starts from a key chosen uniformly at random among all keys
	/// whose first token begins with an uppercase letter, and ends when the
	/// stop sentinel is drawn from a follower list. Every adjacent window of
	/// the output is therefore a key/follower pair actually observed in the
	/// corpus.
	///
	/// Termination is probabilistic: the corpus's final window always maps
	/// to the stop sentinel, and following each key's most recent
	/// observation leads there, so the sentinel stays reachable from every
	/// key the walk can visit.
	///
	/// # Errors
	/// - [`ChainError::EmptyChainTable`] if the table has no keys.
	/// - [`ChainError::NoCapitalizedStart`] if no key starts with a
	///   capitalized token. No retry with relaxed criteria is attempted.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ChainError> {
		if self.table.is_empty() {
			return Err(ChainError::EmptyChainTable);
		}

		let start = self
			.table
			.keys()
			.filter(|key| starts_capitalized(key))
			.choose(rng)
			.ok_or(ChainError::NoCapitalizedStart)?;

		let mut words: Vec<String> = start.clone();
		let mut key: Vec<String> = start.clone();

		// Sliding the window always lands on another corpus window, so the
		// lookup only misses on a table this walk did not start from.
		while let Some(list) = self.table.followers(&key) {
			match list.sample(rng) {
				Some(Follower::Token(token)) => {
					words.push(token.clone());
					key.remove(0);
					key.push(token.clone());
				}
				Some(Follower::Stop) | None => break,
			}
		}

		Ok(words.join(" "))
	}
}

/// True if the key's first token begins with an uppercase letter.
fn starts_capitalized(key: &[String]) -> bool {
	key.first()
		.and_then(|token| token.chars().next())
		.is_some_and(char::is_uppercase)
}
