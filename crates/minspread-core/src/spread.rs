//! Spread computation and minimum selection over tokenized rows.

use std::num::ParseIntError;
use thiserror::Error;

/// Failure while reading values out of already-fetched rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Row is shorter than a configured column index.
    #[error("column {index} missing from row with {len} tokens")]
    MissingColumn { index: usize, len: usize },
    /// Token is not a base-10 integer once `*` markers are stripped.
    #[error("token {token:?} is not an integer: {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// No row passed the predicate, so there is no minimum.
    #[error("no rows left to compare")]
    NoRows,
}

fn column<'r>(row: &[&'r str], index: usize) -> Result<&'r str, ParseError> {
    row.get(index).copied().ok_or(ParseError::MissingColumn {
        index,
        len: row.len(),
    })
}

fn parse_value(token: &str) -> Result<i64, ParseError> {
    token
        .replace('*', "")
        .parse::<i64>()
        .map_err(|source| ParseError::InvalidNumber {
            token: token.to_string(),
            source,
        })
}

/// Absolute difference between the two spread columns of `row`.
/// `*` markers (e.g. `"79*"`) are stripped before parsing.
pub fn spread(row: &[&str], (a, b): (usize, usize)) -> Result<u64, ParseError> {
    let first = parse_value(column(row, a)?)?;
    let second = parse_value(column(row, b)?)?;
    Ok(first.abs_diff(second))
}

/// Key of the row with the smallest spread. On ties the earliest row wins.
pub fn key_of_min_spread<'r, I>(
    rows: I,
    key_index: usize,
    spread_indexes: (usize, usize),
) -> Result<String, ParseError>
where
    I: IntoIterator<Item = Vec<&'r str>>,
{
    min_by_spread(rows, key_index, |row| spread(row, spread_indexes))
}

fn min_by_spread<'r, I, S>(rows: I, key_index: usize, mut spread_of: S) -> Result<String, ParseError>
where
    I: IntoIterator<Item = Vec<&'r str>>,
    S: FnMut(&[&'r str]) -> Result<u64, ParseError>,
{
    let mut best: Option<(&'r str, u64)> = None;
    for row in rows {
        let key = column(row.as_slice(), key_index)?;
        let value = spread_of(row.as_slice())?;
        match best {
            Some((_, current)) if current <= value => {}
            _ => best = Some((key, value)),
        }
    }
    best.map(|(key, _)| key.to_string()).ok_or(ParseError::NoRows)
}
