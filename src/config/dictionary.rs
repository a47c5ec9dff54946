//! Dictionary configuration module.
//!
//! This module defines where the word list comes from and how its words are
//! normalized and stored.

use super::ConfigResult;
use super::Validate;
use crate::dictionary::WordEncoding;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path to the word list, one word per line
    pub word_list: PathBuf,

    /// Encoding of the word list and character set of stored words
    pub encoding: WordEncoding,

    /// Whether words are enumerated in sorted order
    pub ordered: bool,

    /// Whether word-list lines that cannot be stored are skipped instead of
    /// failing the load
    pub skip_unencodable: bool,

    /// Maximum length of a stored word in characters, unlimited when unset
    pub max_word_length: Option<usize>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            word_list: PathBuf::from("words.txt"),
            encoding: WordEncoding::default(),
            ordered: true,
            skip_unencodable: false,
            max_word_length: None,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.word_list.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary.word_list cannot be empty".to_string(),
            ));
        }

        if self.max_word_length == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_word_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
