//! Word encodings and normalization.
//!
//! Every word goes through the same normalization before it reaches the
//! trie: surrounding whitespace is trimmed, the word is lower-cased, and each
//! character must be representable in the dictionary's encoding. Two words
//! that normalize to the same characters are the same dictionary entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::dictionary::EncodingError;

/// Encoding of the word source and character set of stored words.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WordEncoding {
    /// ISO-8859-1: one byte per character, U+0000 to U+00FF
    #[default]
    #[serde(alias = "iso-8859-1", alias = "latin-1")]
    Latin1,
    /// US-ASCII: U+0000 to U+007F
    #[serde(alias = "us-ascii")]
    Ascii,
    /// UTF-8: any Unicode scalar value
    #[serde(alias = "utf-8")]
    Utf8,
}

impl WordEncoding {
    /// Canonical name of the encoding.
    pub fn name(self) -> &'static str {
        match self {
            Self::Latin1 => "iso-8859-1",
            Self::Ascii => "us-ascii",
            Self::Utf8 => "utf-8",
        }
    }

    /// Checks whether `ch` can be represented in this encoding.
    pub fn can_encode(self, ch: char) -> bool {
        match self {
            Self::Latin1 => u32::from(ch) <= 0xff,
            Self::Ascii => ch.is_ascii(),
            Self::Utf8 => true,
        }
    }

    /// Decodes one raw line of the word source.
    ///
    /// Latin-1 maps every byte to the code point of the same value and never
    /// fails.
    pub fn decode(self, bytes: &[u8]) -> Result<String, EncodingError> {
        match self {
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(EncodingError::UndecodableByte {
                    encoding: self,
                    byte: bytes[offset],
                    offset,
                }),
                None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            },
            Self::Utf8 => match std::str::from_utf8(bytes) {
                Ok(text) => Ok(text.to_owned()),
                Err(e) => {
                    let offset = e.valid_up_to();
                    Err(EncodingError::UndecodableByte {
                        encoding: self,
                        byte: bytes[offset],
                        offset,
                    })
                }
            },
        }
    }

    /// Normalizes a word into the characters stored in the trie.
    ///
    /// The result is empty for blank input.
    pub fn normalize(self, word: &str) -> Result<Vec<char>, EncodingError> {
        let mut chars = Vec::with_capacity(word.len());
        for ch in word.trim().chars().flat_map(char::to_lowercase) {
            if !self.can_encode(ch) {
                return Err(EncodingError::Unrepresentable { ch, encoding: self });
            }
            chars.push(ch);
        }
        Ok(chars)
    }
}

impl fmt::Display for WordEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WordEncoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" => Ok(Self::Latin1),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            "utf8" | "utf-8" => Ok(Self::Utf8),
            _ => Err(EncodingError::UnknownEncoding(s.to_string())),
        }
    }
}
