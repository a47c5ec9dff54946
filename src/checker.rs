//! Spell checking of free text.
//!
//! Text is split into tokens the way the dictionary expects them: ASCII
//! punctuation other than the apostrophe is removed and the remainder is
//! split on whitespace. Each token is then looked up case-insensitively.

use std::fmt;

use fnv::FnvHashMap;
use serde::Serialize;
use tracing::debug;

use crate::config::checker::CheckerConfig;
use crate::dictionary::Dictionary;

/// Splits free text into lookup tokens.
///
/// Apostrophes survive so that contractions such as `don't` stay one token.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|&c| c == '\'' || !c.is_ascii_punctuation())
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// A token that was not found in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    /// The token as it appeared in the text, punctuation removed
    pub word: String,

    /// Index of the first occurrence among all tokens
    pub position: usize,

    /// Number of occurrences in the text
    pub occurrences: usize,
}

/// Result of checking a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpellReport {
    /// Number of tokens checked
    pub tokens: usize,

    /// Tokens not found, in order of first appearance
    pub misspelled: Vec<Misspelling>,
}

impl SpellReport {
    /// Whether every token was found.
    pub fn is_clean(&self) -> bool {
        self.misspelled.is_empty()
    }
}

impl fmt::Display for SpellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for miss in &self.misspelled {
            writeln!(f, "'{}' not found", miss.word)?;
        }
        Ok(())
    }
}

/// Checks text against a dictionary.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Dictionary,
    config: CheckerConfig,
}

impl SpellChecker {
    /// Creates a checker over `dictionary`.
    pub fn new(dictionary: Dictionary, config: CheckerConfig) -> Self {
        Self { dictionary, config }
    }

    /// The dictionary used for lookups.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Mutable access to the dictionary, for adding words at runtime.
    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.dictionary
    }

    /// Checks a single token.
    pub fn is_known(&self, token: &str) -> bool {
        self.dictionary.lookup(token)
    }

    /// Checks every token of `text`.
    ///
    /// Every misspelled occurrence is reported by default. With
    /// `report_duplicates` off, a token that is misspelled several times is
    /// reported once, with its occurrence count. Tokens are compared
    /// case-insensitively for this purpose.
    pub fn check(&self, text: &str) -> SpellReport {
        let tokens = tokenize(text);
        let mut report = SpellReport {
            tokens: tokens.len(),
            misspelled: Vec::new(),
        };
        let mut seen: FnvHashMap<String, usize> = FnvHashMap::default();

        for (position, token) in tokens.into_iter().enumerate() {
            if self.dictionary.lookup(&token) {
                continue;
            }

            if !self.config.report_duplicates {
                let key = token.to_lowercase();
                if let Some(&idx) = seen.get(&key) {
                    report.misspelled[idx].occurrences += 1;
                    continue;
                }
                seen.insert(key, report.misspelled.len());
            }

            report.misspelled.push(Misspelling {
                word: token,
                position,
                occurrences: 1,
            });
        }

        debug!(
            tokens = report.tokens,
            misspelled = report.misspelled.len(),
            "checked text"
        );
        report
    }
}
