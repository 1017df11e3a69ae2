use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::corpus;
use super::error::ModelError;

/// Word-level Markov chain built from a text corpus.
///
/// The chain maps each observed prefix (a fixed number of consecutive corpus
/// words joined by single spaces) to the list of words seen immediately
/// after it. A word following a prefix three times appears three times in
/// the list, so corpus frequency carries over directly into selection
/// probability during generation.
///
/// # Responsibilities
/// - Tokenize the corpus (whitespace splitting, alphanumeric filtering)
/// - Record every prefix occurrence together with its following word
/// - Track registered prefixes in first-seen order for uniform start selection
///
/// # Invariants
/// - `prefix_length` is always >= 1
/// - Every registered key has a suffix list with at least one entry
/// - Suffix lists are never deduplicated
/// - The chain is never mutated after construction
#[derive(Debug, Clone)]
pub struct MarkovChain {
	/// Number of words forming each prefix key.
	prefix_length: usize,
	/// Mapping from a prefix to every suffix observed after it.
	/// The empty string marks "the corpus ended after this prefix".
	suffixes: HashMap<String, Vec<String>>,
	/// Registered prefixes in first-seen order. `HashMap` iteration order is
	/// arbitrary, so uniform start selection needs this separate list.
	keys: Vec<String>,
}

impl MarkovChain {
	/// Builds a chain from raw corpus text.
	///
	/// Scans the tokenized corpus with a sliding window of `prefix_length`
	/// words, advancing one word at a time. Each window becomes a prefix
	/// key; the word right after the window (or `""` when the window ends
	/// the corpus) is appended to that key's suffix list.
	///
	/// A corpus with fewer than `prefix_length` words produces an empty
	/// chain. This is not an error here; generation reports it.
	///
	/// # Errors
	/// Returns `ModelError::InvalidPrefixLength` if `prefix_length` is 0.
	pub fn from_text(text: &str, prefix_length: usize) -> Result<Self, ModelError> {
		if prefix_length == 0 {
			return Err(ModelError::InvalidPrefixLength(prefix_length));
		}

		let tokens = corpus::tokenize(text);
		let mut suffixes: HashMap<String, Vec<String>> = HashMap::new();
		let mut keys: Vec<String> = Vec::new();

		if tokens.len() >= prefix_length {
			for start in 0..=tokens.len() - prefix_length {
				let end = start + prefix_length;
				let key = corpus::join_key(&tokens[start..end]);
				let suffix = tokens.get(end).cloned().unwrap_or_default();

				match suffixes.entry(key) {
					Entry::Vacant(slot) => {
						keys.push(slot.key().clone());
						slot.insert(vec![suffix]);
					}
					Entry::Occupied(mut slot) => slot.get_mut().push(suffix),
				}
			}
		}

		Ok(Self { prefix_length, suffixes, keys })
	}

	/// Returns the prefix length the chain was built with.
	pub fn prefix_length(&self) -> usize {
		self.prefix_length
	}

	/// Returns the registered prefixes in first-seen order.
	pub fn keys(&self) -> &[String] {
		&self.keys
	}

	/// Returns the suffixes observed after `key`, or `None` for an
	/// unregistered prefix.
	pub fn suffixes_of(&self, key: &str) -> Option<&[String]> {
		self.suffixes.get(key).map(Vec::as_slice)
	}

	/// Returns the number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Returns `true` if no prefix was registered (corpus shorter than the
	/// prefix length).
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::super::corpus;
	use super::*;

	fn suffixes<'c>(chain: &'c MarkovChain, key: &str) -> Vec<&'c str> {
		chain
			.suffixes_of(key)
			.unwrap_or_else(|| panic!("missing prefix `{key}`"))
			.iter()
			.map(String::as_str)
			.collect()
	}

	#[test]
	fn builds_the_expected_chain() {
		let chain = MarkovChain::from_text("hi my name is alice", 2).unwrap();

		let keys: Vec<&str> = chain.keys().iter().map(String::as_str).collect();
		assert_eq!(keys, ["hi my", "my name", "name is", "is alice"]);

		assert_eq!(suffixes(&chain, "hi my"), ["name"]);
		assert_eq!(suffixes(&chain, "my name"), ["is"]);
		assert_eq!(suffixes(&chain, "name is"), ["alice"]);
		assert_eq!(suffixes(&chain, "is alice"), [""]);
	}

	#[test]
	fn repeated_suffixes_are_kept() {
		let chain = MarkovChain::from_text("a b a b a c", 1).unwrap();

		assert_eq!(suffixes(&chain, "a"), ["b", "b", "c"]);
		assert_eq!(suffixes(&chain, "b"), ["a", "a"]);
		assert_eq!(suffixes(&chain, "c"), [""]);
	}

	#[test]
	fn punctuation_is_stripped_from_keys_and_suffixes() {
		let chain = MarkovChain::from_text("Don't stop!", 1).unwrap();

		let keys: Vec<&str> = chain.keys().iter().map(String::as_str).collect();
		assert_eq!(keys, ["Dont", "stop"]);
		assert_eq!(suffixes(&chain, "Dont"), ["stop"]);
	}

	#[test]
	fn fully_stripped_tokens_stay_in_the_chain() {
		let chain = MarkovChain::from_text("a -- b", 1).unwrap();

		let keys: Vec<&str> = chain.keys().iter().map(String::as_str).collect();
		assert_eq!(keys, ["a", "", "b"]);
		assert_eq!(suffixes(&chain, "a"), [""]);
		assert_eq!(suffixes(&chain, ""), ["b"]);
	}

	#[test]
	fn a_corpus_matching_the_window_exactly_ends_with_the_marker() {
		let chain = MarkovChain::from_text("hi my", 2).unwrap();

		assert_eq!(chain.len(), 1);
		assert_eq!(suffixes(&chain, "hi my"), [""]);
	}

	#[test]
	fn a_short_corpus_builds_an_empty_chain() {
		let chain = MarkovChain::from_text("hi", 2).unwrap();

		assert!(chain.is_empty());
		assert_eq!(chain.len(), 0);
	}

	#[test]
	fn a_zero_prefix_length_is_rejected() {
		assert_eq!(
			MarkovChain::from_text("hi my name", 0).unwrap_err(),
			ModelError::InvalidPrefixLength(0)
		);
	}

	#[test]
	fn every_full_window_is_a_registered_prefix() {
		let text = "the quick brown fox jumps over the lazy dog while the quick brown cat naps";
		let chain = MarkovChain::from_text(text, 3).unwrap();

		let tokens = corpus::tokenize(text);
		for window in tokens.windows(3) {
			let key = corpus::join_key(window);
			assert!(chain.suffixes_of(&key).is_some(), "missing prefix `{key}`");
		}
	}
}
