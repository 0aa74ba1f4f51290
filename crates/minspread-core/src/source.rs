//! Immutable scan configuration: where to fetch from and which columns to read.
//!
//! Construction validates every field eagerly so a bad configuration fails
//! before any network I/O happens.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Row predicate: decides whether a tokenized row takes part in the scan.
pub type Predicate = Arc<dyn Fn(&[&str]) -> bool + Send + Sync>;

/// Invalid configuration value. Programmer/config-file error; never logged or
/// swallowed by the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("URL must be provided")]
    MissingUrl,
    #[error("key_column_index must be an integer")]
    KeyColumn,
    #[error("spread_columns_indexes must be tuple of 2 integers")]
    SpreadColumns,
}

/// Where to fetch the table and how to pick the winning row.
#[derive(Clone)]
pub struct SpreadConfig {
    url: String,
    key_column_index: usize,
    spread_column_indexes: (usize, usize),
    predicate: Predicate,
}

impl SpreadConfig {
    /// Build from already-typed values. Only the URL can be rejected here.
    pub fn new<F>(
        url: impl Into<String>,
        key_column_index: usize,
        spread_column_indexes: (usize, usize),
        predicate: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&[&str]) -> bool + Send + Sync + 'static,
    {
        Self::with_predicate(
            url,
            key_column_index,
            spread_column_indexes,
            Arc::new(predicate),
        )
    }

    /// Same as [`SpreadConfig::new`] but takes an already shared predicate.
    pub fn with_predicate(
        url: impl Into<String>,
        key_column_index: usize,
        spread_column_indexes: (usize, usize),
        predicate: Predicate,
    ) -> Result<Self, ConfigError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        Ok(Self {
            url,
            key_column_index,
            spread_column_indexes,
            predicate,
        })
    }

    /// Build from untyped values (config file, command line). Checks run in
    /// order url, key column, spread columns; the first failure is returned.
    pub fn from_values(
        url: &str,
        key_column_index: &toml::Value,
        spread_column_indexes: &toml::Value,
        predicate: Predicate,
    ) -> Result<Self, ConfigError> {
        if url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        let key = column_index(key_column_index)?;
        let spread = spread_pair(spread_column_indexes)?;
        Self::with_predicate(url, key, spread, predicate)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn key_column_index(&self) -> usize {
        self.key_column_index
    }

    pub fn spread_column_indexes(&self) -> (usize, usize) {
        self.spread_column_indexes
    }

    /// Runs the row predicate on one tokenized row.
    pub fn accepts(&self, tokens: &[&str]) -> bool {
        (self.predicate)(tokens)
    }
}

impl fmt::Debug for SpreadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpreadConfig")
            .field("url", &self.url)
            .field("key_column_index", &self.key_column_index)
            .field("spread_column_indexes", &self.spread_column_indexes)
            .finish_non_exhaustive()
    }
}

/// Parse a key column index: a non-negative integer.
pub fn column_index(value: &toml::Value) -> Result<usize, ConfigError> {
    as_index(value).ok_or(ConfigError::KeyColumn)
}

/// Parse the spread column pair: an array of exactly two non-negative integers.
pub fn spread_pair(value: &toml::Value) -> Result<(usize, usize), ConfigError> {
    let items = match value {
        toml::Value::Array(items) if items.len() == 2 => items,
        _ => return Err(ConfigError::SpreadColumns),
    };
    match (as_index(&items[0]), as_index(&items[1])) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ConfigError::SpreadColumns),
    }
}

fn as_index(value: &toml::Value) -> Option<usize> {
    value.as_integer().and_then(|n| usize::try_from(n).ok())
}
