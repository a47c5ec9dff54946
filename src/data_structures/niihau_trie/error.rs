//! Error types for the Niihau Trie.
//!
//! This module defines the error types that can occur during Niihau Trie operations.

/// Errors that can occur in Niihau Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum NiihauTrieError {
    /// Error when a word exceeds the maximum depth allowed.
    #[error("Word '{word}' exceeds maximum trie depth of {max_depth}")]
    KeyTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// Error when the trie is configured with an unusable depth limit.
    #[error("Invalid trie configuration: {0}")]
    InvalidConfiguration(String),
}
