//! Kilo Spell Library
//!
//! This library contains the core components of the Kilo spell checker:
//! the trie that stores known words, the dictionary façade that loads and
//! normalizes them, and the checker that tokenizes free text.
//!
//! # Architecture
//!
//! - [`data_structures::niihau_trie`] stores words in a tree of
//!   exclusively-owned nodes and enumerates them in a fixed child order.
//! - [`dictionary`] owns a trie plus the normalization policy and bulk-loads
//!   a word list.
//! - [`checker`] splits text into tokens and reports the unknown ones.
//! - [`config`] and [`error`] carry the ambient configuration and error types.

pub mod checker;
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

use checker::SpellChecker;
use config::KiloConfig;
use dictionary::{Dictionary, DictionaryOptions};

/// Version information for the Kilo spell checker.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds a spell checker from a loaded configuration.
///
/// The word list named by `config.dictionary.word_list` is read in full.
///
/// # Errors
///
/// Returns [`error::KiloError::Dictionary`] if the word list cannot be read or
/// one of its lines cannot be stored.
pub fn build_checker(config: &KiloConfig) -> error::KiloResult<SpellChecker> {
    let options = DictionaryOptions::from(&config.dictionary);
    let dictionary = Dictionary::from_path(&config.dictionary.word_list, options)?;
    Ok(SpellChecker::new(dictionary, config.checker.clone()))
}
