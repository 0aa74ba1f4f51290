//! Fetch a whitespace-delimited table over HTTP and report the key of the row
//! whose two designated numeric columns are closest together.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod rows;
pub mod rule;
pub mod scan;
pub mod source;
pub mod spread;

pub use fetch::{CurlFetcher, FetchError, Fetcher};
pub use rule::RowRule;
pub use scan::SpreadScan;
pub use source::{ConfigError, SpreadConfig};
pub use spread::ParseError;
