//! Top-level module for the Markov sentence generation system.
//!
//! This crate provides a word-level Markov chain generator, including:
//! - Chain construction from raw corpus text (`MarkovChain`)
//! - Internal tokenization and key-formation helpers
//! - A sentence generation interface (`Generator`)
//! - A shared error taxonomy (`ModelError`)

/// Word-level Markov chain built from a corpus.
///
/// Maps fixed-length word prefixes to the suffixes observed after them
/// and tracks registered prefixes in first-seen order.
pub mod chain;

/// Internal corpus tokenization and key-formation helpers.
///
/// This module is not exposed publicly.
mod corpus;

/// Error type shared by chain construction and sentence generation.
pub mod error;

/// Sentence generation by frequency-weighted random walk over a built chain.
///
/// Exposes entropy-seeded generation as well as generation from a caller
/// supplied random source for reproducible output.
pub mod generator;
