use rand::Rng;

use super::chain::MarkovChain;
use super::corpus;
use super::error::ModelError;

/// Sentence generator walking a built [`MarkovChain`].
///
/// # Responsibilities
/// - Pick a uniformly random starting prefix from the key registry
/// - Extend the word list by sampling a suffix of the trailing prefix
/// - Surface dead ends as errors instead of retrying internally
///
/// Suffix lists keep duplicates, so sampling uniformly over a list picks
/// each word with probability proportional to how often it followed the
/// prefix in the corpus.
#[derive(Debug, Clone)]
pub struct Generator {
	chain: MarkovChain,
}

impl Generator {
	/// Wraps a built chain for generation.
	pub fn new(chain: MarkovChain) -> Self {
		Self { chain }
	}

	/// Returns the wrapped chain.
	pub fn chain(&self) -> &MarkovChain {
		&self.chain
	}

	/// Generates a sentence of `word_length` words using an entropy-seeded
	/// random source.
	///
	/// See [`Generator::generate_with_rng`] for the walk semantics and the
	/// possible errors.
	pub fn generate(&self, word_length: usize) -> Result<String, ModelError> {
		self.generate_with_rng(word_length, &mut rand::rng())
	}

	/// Generates a sentence of `word_length` words using the given random
	/// source.
	///
	/// The output is fully determined by the random sequence, so a seeded
	/// source reproduces the same sentence on every call.
	///
	/// # Behavior
	/// - Starts from a uniformly random registered prefix, then appends one
	///   sampled suffix of that prefix.
	/// - Repeatedly joins the last `prefix_length` words into the next
	///   lookup key and appends a sampled suffix of it, until `word_length`
	///   words are accumulated.
	/// - An empty-string suffix (the corpus ended there during construction)
	///   is appended literally, like any other word. Chaining on after one
	///   usually leads to an unknown prefix, which ends the attempt.
	///
	/// # Errors
	/// - `ModelError::InvalidWordLength` if `word_length` cannot hold a full
	///   prefix plus one suffix.
	/// - `ModelError::EmptyChain` if the chain has no registered prefixes.
	/// - `ModelError::UnknownPrefix` if the walk reaches a prefix that was
	///   never observed in the corpus. The walk is not retried internally;
	///   the caller may start a fresh one.
	pub fn generate_with_rng<R: Rng>(&self, word_length: usize, rng: &mut R) -> Result<String, ModelError> {
		let prefix_length = self.chain.prefix_length();
		let minimum = prefix_length + 1;
		if word_length < minimum {
			return Err(ModelError::InvalidWordLength { requested: word_length, minimum });
		}

		let keys = self.chain.keys();
		if keys.is_empty() {
			return Err(ModelError::EmptyChain);
		}

		let key = &keys[rng.random_range(0..keys.len())];
		let mut words: Vec<String> = key.split_whitespace().map(str::to_owned).collect();
		let first = self.pick_suffix(key, rng)?;
		words.push(first);

		while words.len() < word_length {
			let start = words.len().saturating_sub(prefix_length);
			let key = corpus::join_key(&words[start..]);
			let suffix = self.pick_suffix(&key, rng)?;
			words.push(suffix);
		}

		Ok(words.join(" "))
	}

	/// Samples one suffix of `key`, each recorded occurrence weighing equally.
	fn pick_suffix<R: Rng>(&self, key: &str, rng: &mut R) -> Result<String, ModelError> {
		let suffixes = self
			.chain
			.suffixes_of(key)
			.filter(|list| !list.is_empty())
			.ok_or_else(|| ModelError::UnknownPrefix(key.to_owned()))?;

		Ok(suffixes[rng.random_range(0..suffixes.len())].clone())
	}
}
