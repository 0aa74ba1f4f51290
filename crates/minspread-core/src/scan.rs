//! Top-level scan: fetch, extract valid rows, pick the minimum spread.
//!
//! Fetch and parse failures are logged here and turned into `None`; the
//! helpers in `rows` and `spread` return their errors directly.

use crate::fetch::{CurlFetcher, Fetcher};
use crate::rows::valid_rows;
use crate::source::SpreadConfig;
use crate::spread::{key_of_min_spread, ParseError};

pub const FETCH_ERROR_MESSAGE: &str =
    "Error on fetching the data - please check Internet connection or URL.";
pub const PARSE_ERROR_MESSAGE: &str =
    "Error on parsing the data - please check properties of the spread configuration.";

/// A configured scan bound to a fetcher. Holds no per-run state, so it can be
/// run repeatedly.
#[derive(Debug, Clone)]
pub struct SpreadScan<F = CurlFetcher> {
    config: SpreadConfig,
    fetcher: F,
}

impl SpreadScan<CurlFetcher> {
    pub fn new(config: SpreadConfig) -> Self {
        Self::with_fetcher(config, CurlFetcher::new())
    }
}

impl<F: Fetcher> SpreadScan<F> {
    pub fn with_fetcher(config: SpreadConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Key of the row with the smallest spread, or `None` when the source
    /// could not be fetched or parsed (the cause is logged at error level).
    pub fn min_spread_key(&self) -> Option<String> {
        let url = self.config.url();
        let text = match self.fetcher.fetch(url) {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(url, error = %err, "{}", FETCH_ERROR_MESSAGE);
                return None;
            }
        };

        match self.select(&text) {
            Ok(key) => {
                tracing::debug!(url, key = %key, "min spread found");
                Some(key)
            }
            Err(err) => {
                tracing::error!(url, error = %err, "{}", PARSE_ERROR_MESSAGE);
                None
            }
        }
    }

    fn select(&self, text: &str) -> Result<String, ParseError> {
        let rows = valid_rows(text, |tokens: &[&str]| self.config.accepts(tokens));
        key_of_min_spread(
            rows,
            self.config.key_column_index(),
            self.config.spread_column_indexes(),
        )
    }
}
