//! Dictionary of known words.
//!
//! The [`Dictionary`] is a thin façade over a [`NiihauTrie`]. It owns the
//! normalization policy, bulk-loads a word list at construction, and answers
//! membership queries for single, already-tokenized words.

mod encoding;

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::niihau_trie::{
    ChildOrder, NiihauTrie, NiihauTrieConfig, Words,
};
use crate::error::dictionary::DictionaryError;

pub use encoding::WordEncoding;

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Name used in errors for word sources that are not files.
const READER_SOURCE: &str = "<reader>";

/// Options that shape a dictionary when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryOptions {
    /// Encoding of the word source and character set of stored words
    pub encoding: WordEncoding,

    /// Whether enumeration is sorted (`true`) or in first-insertion order
    pub ordered: bool,

    /// Whether word-list lines that fail to normalize are skipped
    pub skip_unencodable: bool,

    /// Maximum length of a stored word in characters, unlimited when `None`
    pub max_word_length: Option<usize>,
}

impl Default for DictionaryOptions {
    fn default() -> Self {
        Self {
            encoding: WordEncoding::default(),
            ordered: true,
            skip_unencodable: false,
            max_word_length: None,
        }
    }
}

impl From<&DictionaryConfig> for DictionaryOptions {
    fn from(config: &DictionaryConfig) -> Self {
        Self {
            encoding: config.encoding,
            ordered: config.ordered,
            skip_unencodable: config.skip_unencodable,
            max_word_length: config.max_word_length,
        }
    }
}

/// Line counts of a word-list load, for the load summary log.
#[derive(Debug, Clone, Copy, Default)]
struct LoadStats {
    lines: usize,
    skipped: usize,
}

/// A set of known words backed by a trie.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Trie holding the normalized words
    trie: NiihauTrie,

    /// Options the dictionary was built with
    options: DictionaryOptions,
}

impl Dictionary {
    /// Creates an empty dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Trie`] if `max_word_length` is `Some(0)`.
    pub fn new(options: DictionaryOptions) -> DictionaryResult<Self> {
        let trie = NiihauTrie::with_config(NiihauTrieConfig {
            order: ChildOrder::from_ordered(options.ordered),
            max_depth: options.max_word_length.unwrap_or(usize::MAX),
        })?;
        Ok(Self { trie, options })
    }

    /// Builds a dictionary from a word-list file, one word per line.
    ///
    /// # Errors
    ///
    /// * [`DictionaryError::Io`] if the file cannot be opened or read.
    /// * [`DictionaryError::Load`] if a line cannot be transcoded and
    ///   `skip_unencodable` is off.
    /// * [`DictionaryError::Trie`] if a word exceeds a configured
    ///   `max_word_length` and `skip_unencodable` is off.
    pub fn from_path<P: AsRef<Path>>(path: P, options: DictionaryOptions) -> DictionaryResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut dictionary = Self::new(options)?;
        let stats = dictionary.load(BufReader::new(file), path)?;
        debug!(
            path = %path.display(),
            lines = stats.lines,
            words = dictionary.len(),
            skipped = stats.skipped,
            "loaded word list"
        );
        Ok(dictionary)
    }

    /// Builds a dictionary from any buffered reader, one word per line.
    ///
    /// # Errors
    ///
    /// Same as [`Dictionary::from_path`].
    pub fn from_reader<R: BufRead>(reader: R, options: DictionaryOptions) -> DictionaryResult<Self> {
        let mut dictionary = Self::new(options)?;
        dictionary.load(reader, Path::new(READER_SOURCE))?;
        Ok(dictionary)
    }

    /// Streams a word source into the trie.
    fn load<R: BufRead>(&mut self, reader: R, path: &Path) -> DictionaryResult<LoadStats> {
        let mut stats = LoadStats::default();

        for (idx, raw) in reader.split(b'\n').enumerate() {
            let raw = raw.map_err(|source| DictionaryError::Io {
                path: PathBuf::from(path),
                source,
            })?;
            let line = idx + 1;
            stats.lines += 1;

            let chars = match self
                .options
                .encoding
                .decode(&raw)
                .and_then(|text| self.options.encoding.normalize(&text))
            {
                Ok(chars) => chars,
                Err(source) if self.options.skip_unencodable => {
                    warn!(line, error = %source, "skipping word list line");
                    stats.skipped += 1;
                    continue;
                }
                Err(source) => return Err(DictionaryError::Load { line, source }),
            };

            if chars.is_empty() {
                continue;
            }

            match self.trie.insert(&chars) {
                Ok(_) => {}
                Err(e) if self.options.skip_unencodable => {
                    warn!(line, error = %e, "skipping word list line");
                    stats.skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(stats)
    }

    /// Inserts a single word.
    ///
    /// The word is normalized exactly as word-list lines are.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if the word was added.
    /// * `Ok(false)` if it was already present or blank.
    /// * `Err(DictionaryError)` if it cannot be normalized or exceeds a
    ///   configured `max_word_length`.
    pub fn insert(&mut self, word: &str) -> DictionaryResult<bool> {
        let chars = self.options.encoding.normalize(word)?;
        Ok(self.trie.insert(&chars)?)
    }

    /// Inserts every word from `words`, stopping at the first failure.
    ///
    /// # Returns
    ///
    /// The number of words that were newly added.
    pub fn insert_all<I, S>(&mut self, words: I) -> DictionaryResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.insert(word.as_ref())? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Checks whether `word` is a known word.
    ///
    /// Blank words and words that cannot be normalized are never known.
    pub fn lookup(&self, word: &str) -> bool {
        match self.options.encoding.normalize(word) {
            Ok(chars) => self.trie.contains(&chars),
            Err(_) => false,
        }
    }

    /// Enumerates every stored word.
    ///
    /// Words are in ascending order for ordered dictionaries, otherwise in
    /// first-insertion order per trie level.
    pub fn words(&self) -> Words<'_> {
        self.trie.words()
    }

    /// Enumerates the stored words that start with `prefix`.
    ///
    /// The prefix is normalized like any other word; a prefix that cannot be
    /// normalized matches nothing.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        match self.options.encoding.normalize(prefix) {
            Ok(chars) => self.trie.words_with_prefix(&chars),
            Err(_) => Words::empty(),
        }
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether no words are stored.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The encoding words are normalized against.
    pub fn encoding(&self) -> WordEncoding {
        self.options.encoding
    }

    /// The options this dictionary was built with.
    pub fn options(&self) -> &DictionaryOptions {
        &self.options
    }

    /// The underlying trie.
    pub fn trie(&self) -> &NiihauTrie {
        &self.trie
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, word) in self.words().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&word)?;
        }
        Ok(())
    }
}
