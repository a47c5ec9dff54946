//! Dictionary error module.
//!
//! This module defines error types that may occur while loading a word list,
//! transcoding words, and inserting them into the dictionary.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::NiihauTrieError;
use crate::dictionary::WordEncoding;

/// Errors that can occur while decoding or normalizing a single word.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The raw bytes are not valid in the configured encoding.
    #[error("Invalid {encoding} byte 0x{byte:02x} at offset {offset}")]
    UndecodableByte {
        /// The encoding used for decoding
        encoding: WordEncoding,
        /// The offending byte
        byte: u8,
        /// Offset of the byte within the line
        offset: usize,
    },

    /// The character cannot be represented in the configured encoding.
    #[error("Character {ch:?} cannot be encoded as {encoding}")]
    Unrepresentable {
        /// The offending character
        ch: char,
        /// The encoding the word must fit
        encoding: WordEncoding,
    },

    /// The encoding name is not recognised.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
}

/// Errors that can occur during dictionary operations.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when the word source cannot be opened or read.
    #[error("Failed to read word list {}: {}", .path.display(), .source)]
    Io {
        /// Path of the word source
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error when a line of the word source cannot be transcoded.
    #[error("Line {line} of the word list: {source}")]
    Load {
        /// One-based line number within the word source
        line: usize,
        /// The underlying encoding error
        #[source]
        source: EncodingError,
    },

    /// Error when a word cannot be normalized.
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Error when the trie rejects a word.
    #[error("Trie error: {0}")]
    Trie(#[from] NiihauTrieError),
}
