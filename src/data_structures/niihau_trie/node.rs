//! Node implementation for the Niihau Trie.
//!
//! This module provides the TrieNode structure used in the Niihau Trie implementation.
//! Nodes are the fundamental building blocks of the trie: each one owns its
//! children outright, so the whole structure is a strict tree with no sharing.

use super::iter::Words;

/// Order in which a node keeps (and therefore enumerates) its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildOrder {
    /// Children are kept in ascending character order.
    #[default]
    Sorted,
    /// Children are kept in the order their characters were first inserted.
    Insertion,
}

impl ChildOrder {
    /// Maps the `ordered` switch used by dictionaries and configuration.
    pub fn from_ordered(ordered: bool) -> Self {
        if ordered {
            Self::Sorted
        } else {
            Self::Insertion
        }
    }
}

/// A node in the Niihau Trie.
///
/// Each non-root node represents one character of a stored word. Terminal
/// nodes mark the end of a complete word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Character this node represents (`None` for the root)
    character: Option<char>,

    /// Owned child nodes, at most one per character
    children: Vec<TrieNode>,

    /// Whether a word ends exactly at this node
    is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty root node.
    pub fn root() -> Self {
        Self {
            character: None,
            children: Vec::new(),
            is_terminal: false,
        }
    }

    fn with_character(character: char) -> Self {
        Self {
            character: Some(character),
            children: Vec::new(),
            is_terminal: false,
        }
    }

    /// The character this node represents, `None` for the root.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Whether a stored word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// The children of this node in their enumeration order.
    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    /// Returns the child for `character`, if any.
    ///
    /// Fan-out is bounded by the alphabet, so a scan serves both orders.
    pub fn child(&self, character: char) -> Option<&TrieNode> {
        self.children
            .iter()
            .find(|child| child.character == Some(character))
    }

    /// Inserts a word below this node.
    ///
    /// Missing nodes are created on the way down and placed according to
    /// `order`. The node reached by the last character is marked terminal.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` if it was already
    /// present or `word` is empty.
    pub fn insert(&mut self, word: &[char], order: ChildOrder) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = self;
        for &c in word {
            node = node.child_or_insert(c, order);
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        is_new
    }

    fn child_or_insert(&mut self, character: char, order: ChildOrder) -> &mut TrieNode {
        let idx = match order {
            ChildOrder::Sorted => match self
                .children
                .binary_search_by_key(&Some(character), |child| child.character)
            {
                Ok(idx) => idx,
                Err(idx) => {
                    self.children.insert(idx, TrieNode::with_character(character));
                    idx
                }
            },
            ChildOrder::Insertion => {
                match self
                    .children
                    .iter()
                    .position(|child| child.character == Some(character))
                {
                    Some(idx) => idx,
                    None => {
                        self.children.push(TrieNode::with_character(character));
                        self.children.len() - 1
                    }
                }
            }
        };
        &mut self.children[idx]
    }

    /// Follows `path` from this node without checking terminal flags.
    pub fn find(&self, path: &[char]) -> Option<&TrieNode> {
        let mut node = self;
        for &c in path {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// Checks whether `word` is stored below this node.
    ///
    /// Descends one character at a time; a missing child or a non-terminal
    /// final node means the word is absent. The empty word is never stored.
    pub fn lookup(&self, word: &[char]) -> bool {
        if word.is_empty() {
            return false;
        }
        self.find(word).is_some_and(|node| node.is_terminal)
    }

    /// Enumerates every word stored at or below this node, depth-first.
    ///
    /// `prefix` is prepended to each yielded word. This node's own character
    /// is appended to the prefix; the root contributes nothing.
    pub fn words(&self, prefix: String) -> Words<'_> {
        Words::new(self, prefix)
    }

    /// Number of nodes in this subtree, including this node.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TrieNode::node_count)
            .sum::<usize>()
    }

    /// Number of terminal nodes in this subtree.
    pub fn word_count(&self) -> usize {
        usize::from(self.is_terminal)
            + self
                .children
                .iter()
                .map(TrieNode::word_count)
                .sum::<usize>()
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::root()
    }
}
