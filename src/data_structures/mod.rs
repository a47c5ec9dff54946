//! Data structures for the Kilo spell checker.
//!
//! This module contains the storage structures behind the dictionary.

pub mod niihau_trie;

// Re-export common data structures
pub use niihau_trie::{ChildOrder, NiihauTrie, NiihauTrieError, NiihauTrieResult, TrieNode, Words};
