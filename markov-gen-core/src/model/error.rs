use thiserror::Error;

/// Failure modes of chain construction and sentence generation.
///
/// Configuration mistakes (`InvalidPrefixLength`, `InvalidWordLength`) are
/// rejected before any model work happens. The remaining variants are data
/// dependent: they describe corpora too small or too sparse for the
/// requested walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
	/// The prefix window must hold at least one word.
	#[error("prefix length must be at least 1, got {0}")]
	InvalidPrefixLength(usize),

	/// The requested sentence cannot hold a full prefix plus one suffix.
	#[error("word length must be at least {minimum}, got {requested}")]
	InvalidWordLength { requested: usize, minimum: usize },

	/// The chain has no registered prefixes to start a walk from.
	#[error("no prefixes available, the corpus is shorter than the prefix length")]
	EmptyChain,

	/// The walk reached a prefix that was never observed in the corpus.
	#[error("no suffixes recorded for prefix `{0}`")]
	UnknownPrefix(String),
}
