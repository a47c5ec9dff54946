//! Test utilities and fixtures for the Kilo spell checker.
//!
//! This module provides reusable fixtures and proptest strategies shared by
//! the crate-internal test suites.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use std::path::PathBuf;
use tempfile::TempDir;

/// Maximum number of words in a generated word list.
const MAX_WORDS: usize = 40;

/// Generate a strategy for lower-case ASCII words.
///
/// Words are short and drawn from a small alphabet so that generated lists
/// share prefixes often.
pub fn word_strategy() -> BoxedStrategy<String> {
    "[a-f']{1,8}".boxed()
}

/// Generate a strategy for word lists, duplicates allowed.
pub fn word_list_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 0..MAX_WORDS).boxed()
}

/// Test fixture for tests that need files on disk.
///
/// Environment variables set through the fixture are removed when it is
/// dropped.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Vector of environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file named `name` inside the fixture directory.
    ///
    /// # Returns
    ///
    /// The path of the written file.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
