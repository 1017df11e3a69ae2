//! Markov-chain sentence generation library.
//!
//! This crate provides a word-level Markov chain system including:
//! - Corpus tokenization (whitespace splitting, alphanumeric filtering)
//! - Chain construction mapping fixed-length word prefixes to observed suffixes
//! - Pseudo-random sentence generation by walking the chain
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core chain model and generation logic.
///
/// This module exposes chain construction and sentence generation while
/// keeping tokenization internals private.
pub mod model;
