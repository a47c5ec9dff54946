//! Checker configuration module.

use super::ConfigResult;
use super::Validate;
use serde::{Deserialize, Serialize};

/// Spell checker configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckerConfig {
    /// Exit with a failure status when any token is misspelled
    pub strict: bool,

    /// Report every occurrence of a misspelled token instead of collapsing
    /// repeats into the first one
    pub report_duplicates: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            strict: false,
            report_duplicates: true,
        }
    }
}

impl Validate for CheckerConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
