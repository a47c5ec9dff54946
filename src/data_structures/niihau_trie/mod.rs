//! Niihau Trie Implementation
//!
//! This module provides a character-indexed trie for storing a set of words
//! with shared-prefix storage, exact membership lookup and ordered
//! enumeration. It is the matching engine behind the dictionary.

mod error;
mod iter;
mod node;

use tracing::trace;

pub use error::NiihauTrieError;
pub use iter::Words;
pub use node::{ChildOrder, TrieNode};

/// Result type for Niihau Trie operations
pub type NiihauTrieResult<T> = Result<T, NiihauTrieError>;

/// Configuration options for the Niihau Trie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NiihauTrieConfig {
    /// Order in which every node keeps its children
    pub order: ChildOrder,

    /// Maximum length of a stored word, `usize::MAX` for no limit
    pub max_depth: usize,
}

impl Default for NiihauTrieConfig {
    fn default() -> Self {
        Self {
            order: ChildOrder::Sorted,
            max_depth: usize::MAX,
        }
    }
}

/// Niihau Trie stores a set of words in a tree of exclusively-owned nodes.
///
/// Key features:
/// * Shared storage for common prefixes
/// * Exact membership lookup by plain descent
/// * Lazy enumeration in sorted or first-insertion order
///
/// The child order is fixed when the trie is built and applies to every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NiihauTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Configuration options
    config: NiihauTrieConfig,

    /// Number of distinct stored words
    len: usize,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie` with sorted children and no length limit.
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
            config: NiihauTrieConfig::default(),
            len: 0,
        }
    }

    /// Creates a new empty `NiihauTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    ///
    /// # Returns
    ///
    /// * `Ok(NiihauTrie)` - The new trie.
    /// * `Err(NiihauTrieError)` - If `max_depth` is zero.
    pub fn with_config(config: NiihauTrieConfig) -> NiihauTrieResult<Self> {
        if config.max_depth == 0 {
            return Err(NiihauTrieError::InvalidConfiguration(
                "max_depth must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            root: TrieNode::root(),
            config,
            len: 0,
        })
    }

    /// Creates a new empty `NiihauTrie` with the given child order.
    pub fn with_order(order: ChildOrder) -> Self {
        Self {
            root: TrieNode::root(),
            config: NiihauTrieConfig {
                order,
                ..NiihauTrieConfig::default()
            },
            len: 0,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// # Arguments
    ///
    /// * `word` - The characters of the word, already normalized.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if a new word was stored, `false` if the word was
    ///   already present or empty.
    /// * `Err(NiihauTrieError)` - If the word is longer than `max_depth`.
    pub fn insert(&mut self, word: &[char]) -> NiihauTrieResult<bool> {
        if word.len() > self.config.max_depth {
            return Err(NiihauTrieError::KeyTooLong {
                word: word.iter().collect(),
                max_depth: self.config.max_depth,
            });
        }

        let is_new = self.root.insert(word, self.config.order);
        if is_new {
            self.len += 1;
        }
        Ok(is_new)
    }

    /// Checks if a word is stored in the trie.
    pub fn contains(&self, word: &[char]) -> bool {
        let found = self.root.lookup(word);
        trace!(len = word.len(), found, "trie lookup");
        found
    }

    /// Checks if any stored word starts with `prefix`.
    ///
    /// The empty prefix matches when the trie holds at least one word.
    pub fn contains_prefix(&self, prefix: &[char]) -> bool {
        match self.root.find(prefix) {
            Some(node) => node.is_terminal() || !node.children().is_empty(),
            None => false,
        }
    }

    /// Enumerates all stored words in the configured child order.
    pub fn words(&self) -> Words<'_> {
        self.root.words(String::new())
    }

    /// Enumerates the stored words that start with `prefix`.
    pub fn words_with_prefix(&self, prefix: &[char]) -> Words<'_> {
        if prefix.is_empty() {
            return self.words();
        }

        match self.root.find(prefix) {
            // The node's own character is appended by the iterator.
            Some(node) => node.words(prefix[..prefix.len() - 1].iter().collect()),
            None => Words::empty(),
        }
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Returns the child order used by every node.
    pub fn order(&self) -> ChildOrder {
        self.config.order
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &NiihauTrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Removes every word from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
        self.len = 0;
    }
}

impl Default for NiihauTrie {
    fn default() -> Self {
        Self::new()
    }
}
