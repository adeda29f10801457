use super::chain_table::{ChainTable, NGram};
use super::followers::Follower;
use crate::error::ChainError;

/// Splits corpus text into tokens on whitespace runs.
///
/// This is the only pre-processing a corpus goes through: punctuation stays
/// attached to its word and case is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}

/// Builds a [`ChainTable`] from a token stream.
///
/// # Responsibilities
/// - Validate the window size `n` at construction
/// - Slide an n-token window over the corpus, one token at a time
/// - Record every observed follower, including the terminal stop sentinel
///
/// # Invariants
/// - `n` is always >= 1
#[derive(Clone, Copy, Debug)]
pub struct ChainBuilder {
	/// Window size (number of tokens in each key).
	n: usize,
}

impl ChainBuilder {
	/// Creates a builder for n-token windows.
	///
	/// # Errors
	/// Returns [`ChainError::InvalidWindowSize`] if `n < 1`.
	pub fn new(n: usize) -> Result<Self, ChainError> {
		if n < 1 {
			return Err(ChainError::InvalidWindowSize(n));
		}
		Ok(Self { n })
	}

	/// Window size this builder produces keys for.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Builds the transition table for `tokens`.
	///
	/// The stop sentinel is appended to the working sequence, then every
	/// window of `n` consecutive tokens is recorded together with the
	/// element that follows it. Windows advance by one token and overlap by
	/// `n - 1`, which is what gives the chain its Markov structure.
	///
	/// A corpus of fewer than `n` tokens produces an empty table; a corpus
	/// of exactly `n` tokens produces a single key mapping to the stop
	/// sentinel alone.
	///
	/// Fully deterministic: entry order exactly reflects corpus order, and
	/// no randomness is involved.
	pub fn build(&self, tokens: &[String]) -> ChainTable {
		let mut table = ChainTable::new(self.n);
		if tokens.len() < self.n {
			return table;
		}

		// Index `tokens.len()` stands in for the appended stop sentinel, so
		// the last window recorded is the corpus's final n tokens.
		for i in 0..=tokens.len() - self.n {
			let key: NGram = tokens[i..i + self.n].to_vec();
			let follower = match tokens.get(i + self.n) {
				Some(token) => Follower::Token(token.clone()),
				None => Follower::Stop,
			};
			table.record(key, follower);
		}

		table
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn toks(words: &[&str]) -> Vec<String> {
		words.iter().map(|w| (*w).to_owned()).collect()
	}

	fn entries(table: &ChainTable, key: &[&str]) -> Vec<Follower> {
		table
			.followers(&toks(key))
			.expect("key should exist")
			.iter()
			.cloned()
			.collect()
	}

	#[test]
	fn rejects_zero_window() {
		assert_eq!(
			ChainBuilder::new(0).unwrap_err(),
			ChainError::InvalidWindowSize(0)
		);
	}

	#[test]
	fn tokenize_splits_on_whitespace_runs() {
		assert_eq!(tokenize("hi  there\n\tmary"), toks(&["hi", "there", "mary"]));
		assert_eq!(tokenize("   "), Vec::<String>::new());
	}

	#[test]
	fn tokenize_keeps_punctuation_and_case() {
		assert_eq!(tokenize("Hi, there!"), toks(&["Hi,", "there!"]));
	}

	#[test]
	fn bigram_table_matches_observed_followers() {
		let tokens = toks(&["hi", "there", "mary", "hi", "there", "juanita"]);
		let table = ChainBuilder::new(2).unwrap().build(&tokens);

		assert_eq!(table.len(), 4);
		assert_eq!(
			entries(&table, &["hi", "there"]),
			vec![
				Follower::Token("mary".to_owned()),
				Follower::Token("juanita".to_owned()),
			]
		);
		assert_eq!(
			entries(&table, &["there", "mary"]),
			vec![Follower::Token("hi".to_owned())]
		);
		assert_eq!(
			entries(&table, &["mary", "hi"]),
			vec![Follower::Token("there".to_owned())]
		);
		assert_eq!(entries(&table, &["there", "juanita"]), vec![Follower::Stop]);
	}

	#[test]
	fn duplicate_followers_are_preserved() {
		let tokens = toks(&["so", "it", "goes", "so", "it", "goes", "so", "it", "stops"]);
		let table = ChainBuilder::new(2).unwrap().build(&tokens);

		assert_eq!(
			entries(&table, &["so", "it"]),
			vec![
				Follower::Token("goes".to_owned()),
				Follower::Token("goes".to_owned()),
				Follower::Token("stops".to_owned()),
			]
		);
	}

	#[test]
	fn corpus_shorter_than_window_builds_empty_table() {
		let table = ChainBuilder::new(3).unwrap().build(&toks(&["hi", "there"]));
		assert!(table.is_empty());

		let table = ChainBuilder::new(2).unwrap().build(&toks(&["hi"]));
		assert!(table.is_empty());

		let table = ChainBuilder::new(2).unwrap().build(&[]);
		assert!(table.is_empty());
	}

	#[test]
	fn corpus_of_exactly_window_size_maps_to_stop() {
		let table = ChainBuilder::new(2).unwrap().build(&toks(&["hi", "there"]));
		assert_eq!(table.len(), 1);
		assert_eq!(entries(&table, &["hi", "there"]), vec![Follower::Stop]);
	}

	#[test]
	fn unigram_window_is_supported() {
		let table = ChainBuilder::new(1).unwrap().build(&toks(&["Hello", "world"]));
		assert_eq!(
			entries(&table, &["Hello"]),
			vec![Follower::Token("world".to_owned())]
		);
		assert_eq!(entries(&table, &["world"]), vec![Follower::Stop]);
	}

	#[test]
	fn every_key_has_window_length() {
		let tokens = tokenize("One two three four five six seven");
		for n in 1..=4 {
			let table = ChainBuilder::new(n).unwrap().build(&tokens);
			assert!(table.keys().all(|key| key.len() == n));
		}
	}

	#[test]
	fn keys_are_contiguous_corpus_slices() {
		let tokens = tokenize("a b c d e f g");
		let table = ChainBuilder::new(3).unwrap().build(&tokens);
		for key in table.keys() {
			assert!(tokens.windows(3).any(|window| window == key.as_slice()));
		}
	}

	#[test]
	fn rebuild_is_deterministic() {
		let tokens = tokenize("Mary had a little lamb whose fleece was white as snow");
		let builder = ChainBuilder::new(2).unwrap();
		assert_eq!(builder.build(&tokens), builder.build(&tokens));
	}
}
