//! Tests for the dictionary and the trie behind it.
//!
//! Covers loading from files and the membership/enumeration properties that
//! must hold for any word list.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::dictionary::{Dictionary, DictionaryOptions, WordEncoding};
use crate::error::dictionary::DictionaryError;
use crate::tests::{word_list_strategy, word_strategy, TestFixture};

fn dictionary_of(words: &[String], ordered: bool) -> Dictionary {
    let options = DictionaryOptions {
        ordered,
        ..DictionaryOptions::default()
    };
    let mut dictionary = Dictionary::new(options).unwrap();
    dictionary.insert_all(words).unwrap();
    dictionary
}

/// Load the sample word list from a file.
#[test]
fn test_load_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("words.txt", "apple\nape\nbanana\n")
        .unwrap();

    let dictionary = Dictionary::from_path(&path, DictionaryOptions::default()).unwrap();
    assert!(dictionary.lookup("ape"));
    assert!(!dictionary.lookup("app"));
    assert!(dictionary.lookup("banana"));

    let words: Vec<String> = dictionary.words().collect();
    assert_eq!(words, vec!["ape", "apple", "banana"]);
    assert_eq!(dictionary.to_string(), "ape, apple, banana");
}

/// A word list with Windows line endings, padding and mixed case.
#[test]
fn test_load_normalizes_lines() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("messy.txt", "  Zebra \r\nAPPLE\r\n\r\napple\n")
        .unwrap();

    let dictionary = Dictionary::from_path(&path, DictionaryOptions::default()).unwrap();
    let words: Vec<String> = dictionary.words().collect();
    assert_eq!(words, vec!["apple", "zebra"]);
}

/// Loading a UTF-8 list as UTF-8 keeps non-Latin words.
#[test]
fn test_load_utf8_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("pl.txt", "Łódź\nżółw\n").unwrap();

    let options = DictionaryOptions {
        encoding: WordEncoding::Utf8,
        ..DictionaryOptions::default()
    };
    let dictionary = Dictionary::from_path(&path, options).unwrap();
    assert!(dictionary.lookup("ŁÓDŹ"));
    assert!(dictionary.lookup("żółw"));

    // The same bytes read as Latin-1 are a different word entirely.
    let latin1 = Dictionary::from_path(&path, DictionaryOptions::default()).unwrap();
    assert!(!latin1.lookup("łódź"));
    assert_eq!(latin1.len(), 2);
}

/// An unreadable source is fatal at construction.
#[test]
fn test_load_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.txt");

    let err = Dictionary::from_path(&path, DictionaryOptions::default()).unwrap_err();
    assert!(matches!(err, DictionaryError::Io { .. }));
}

/// Prefix sharing does not create false positives.
#[test]
fn test_prefix_sharing() {
    let dictionary = dictionary_of(&["car".to_string(), "card".to_string()], true);
    assert!(dictionary.lookup("car"));
    assert!(dictionary.lookup("card"));
    assert!(!dictionary.lookup("ca"));
    assert!(!dictionary.lookup("car d"));
    assert!(!dictionary.lookup("c"));
}

proptest! {
    /// Every inserted word is found right after insertion.
    #[test]
    fn prop_inserted_words_are_found(words in word_list_strategy()) {
        let mut dictionary = Dictionary::new(DictionaryOptions::default()).unwrap();
        for word in &words {
            dictionary.insert(word).unwrap();
            prop_assert!(dictionary.lookup(word));
        }
        for word in &words {
            prop_assert!(dictionary.lookup(&word.to_uppercase()));
        }
    }

    /// Words that were never inserted are not found.
    #[test]
    fn prop_absent_words_are_not_found(words in word_list_strategy(), probe in word_strategy()) {
        let dictionary = dictionary_of(&words, true);
        prop_assert_eq!(dictionary.lookup(&probe), words.contains(&probe));
    }

    /// Sorted enumeration yields each distinct word once, in ascending order.
    #[test]
    fn prop_sorted_enumeration_is_complete(words in word_list_strategy()) {
        let dictionary = dictionary_of(&words, true);
        let expected: Vec<String> = words.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        let actual: Vec<String> = dictionary.words().collect();
        prop_assert_eq!(dictionary.len(), expected.len());
        prop_assert_eq!(actual, expected);
    }

    /// Insertion-order enumeration yields the same set of words.
    #[test]
    fn prop_unordered_enumeration_is_complete(words in word_list_strategy()) {
        let dictionary = dictionary_of(&words, false);
        let expected: BTreeSet<String> = words.iter().cloned().collect();
        let actual: Vec<String> = dictionary.words().collect();
        prop_assert_eq!(actual.len(), expected.len());
        prop_assert_eq!(actual.into_iter().collect::<BTreeSet<_>>(), expected);
    }

    /// Inserting the same words again changes nothing.
    #[test]
    fn prop_insert_is_idempotent(words in word_list_strategy()) {
        let mut dictionary = dictionary_of(&words, true);
        let before: Vec<String> = dictionary.words().collect();
        let added = dictionary.insert_all(&words).unwrap();
        prop_assert_eq!(added, 0);
        prop_assert_eq!(dictionary.words().collect::<Vec<_>>(), before);
    }

    /// Prefix enumeration matches filtering the full enumeration.
    #[test]
    fn prop_prefix_enumeration(words in word_list_strategy(), prefix in "[a-f]{1,3}") {
        let dictionary = dictionary_of(&words, true);
        let expected: Vec<String> = dictionary
            .words()
            .filter(|w| w.starts_with(prefix.as_str()))
            .collect();
        let actual: Vec<String> = dictionary.words_with_prefix(&prefix).collect();
        prop_assert_eq!(actual, expected);
    }
}
