//! Lazy depth-first enumeration of stored words.

use std::iter::FusedIterator;
use std::slice;

use super::node::TrieNode;

/// Iterator over the words stored below a [`TrieNode`].
///
/// Words come out in pre-order: a word is yielded before any longer word
/// that extends it, and siblings are visited in the node's child order.
/// The iterator keeps one shared buffer and an explicit stack, so deep
/// tries do not recurse.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    /// Pending children per level, with the buffer length at that level
    stack: Vec<(slice::Iter<'a, TrieNode>, usize)>,

    /// Characters from the start node down to the current node
    buffer: String,

    /// Word produced by the start node itself
    pending: Option<String>,
}

impl<'a> Words<'a> {
    pub(super) fn new(start: &'a TrieNode, prefix: String) -> Self {
        let mut buffer = prefix;
        if let Some(c) = start.character() {
            buffer.push(c);
        }
        let pending = start.is_terminal().then(|| buffer.clone());
        let stack = vec![(start.children().iter(), buffer.len())];

        Self {
            stack,
            buffer,
            pending,
        }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Self {
            stack: Vec::new(),
            buffer: String::new(),
            pending: None,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(word) = self.pending.take() {
            return Some(word);
        }

        loop {
            let step = {
                let (children, depth) = self.stack.last_mut()?;
                children.next().map(|child| (child, *depth))
            };

            match step {
                Some((child, depth)) => {
                    self.buffer.truncate(depth);
                    if let Some(c) = child.character() {
                        self.buffer.push(c);
                    }
                    self.stack.push((child.children().iter(), self.buffer.len()));
                    if child.is_terminal() {
                        return Some(self.buffer.clone());
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for Words<'_> {}
