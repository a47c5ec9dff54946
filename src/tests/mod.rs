//! Test modules for the Kilo spell checker.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error formatting and reporting
//! - Dictionary behavior, including property-based tests using proptest
//! - Shared fixtures and strategies

pub mod config_tests;
pub mod dictionary_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
