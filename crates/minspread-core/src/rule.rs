//! Declarative row rules, the config-file form of a row predicate.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::source::Predicate;

/// Conditions a tokenized row must meet. Unset fields are ignored; an empty
/// rule accepts every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRule {
    /// Row must have exactly this many tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_count: Option<usize>,
    /// Row must have at least this many tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_tokens: Option<usize>,
    /// Token at this index must exist and consist of ASCII digits only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_column: Option<usize>,
}

impl RowRule {
    pub fn matches(&self, tokens: &[&str]) -> bool {
        if let Some(n) = self.token_count {
            if tokens.len() != n {
                return false;
            }
        }
        if let Some(n) = self.min_tokens {
            if tokens.len() < n {
                return false;
            }
        }
        if let Some(idx) = self.numeric_column {
            match tokens.get(idx) {
                Some(tok) if !tok.is_empty() && tok.bytes().all(|b| b.is_ascii_digit()) => {}
                _ => return false,
            }
        }
        true
    }

    pub fn into_predicate(self) -> Predicate {
        Arc::new(move |tokens: &[&str]| self.matches(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: [&str; 10] = ["1.", "Arsenal", "38", "26", "9", "3", "79", "-", "36", "87"];

    #[test]
    fn empty_rule_accepts_everything() {
        let rule = RowRule::default();
        assert!(rule.matches(&ROW));
        assert!(rule.matches(&[]));
    }

    #[test]
    fn token_count_is_exact() {
        let rule = RowRule {
            token_count: Some(10),
            ..Default::default()
        };
        assert!(rule.matches(&ROW));
        assert!(!rule.matches(&ROW[..9]));
        assert!(!rule.matches(&["-----------"]));
    }

    #[test]
    fn min_tokens_is_lower_bound() {
        let rule = RowRule {
            min_tokens: Some(4),
            ..Default::default()
        };
        assert!(rule.matches(&["1", "88", "59", "74"]));
        assert!(!rule.matches(&["1", "88", "59"]));
    }

    #[test]
    fn numeric_column_requires_digits() {
        let rule = RowRule {
            numeric_column: Some(0),
            ..Default::default()
        };
        assert!(rule.matches(&["14", "61", "59"]));
        assert!(!rule.matches(&["mo", "82.9", "60.5"]));
        assert!(!rule.matches(&["1.", "Arsenal"]));
        assert!(!rule.matches(&[]));
    }

    #[test]
    fn conditions_combine() {
        let pred = RowRule {
            min_tokens: Some(4),
            numeric_column: Some(0),
            ..Default::default()
        }
        .into_predicate();
        assert!(pred(&["9", "86", "32*", "59"]));
        assert!(!pred(&["9", "86"]));
        assert!(!pred(&["Dy", "MxT", "MnT", "AvT"]));
    }

    #[test]
    fn toml_form() {
        let rule: RowRule = toml::from_str("token_count = 10").unwrap();
        assert_eq!(rule.token_count, Some(10));
        assert_eq!(rule.min_tokens, None);
        assert_eq!(rule.numeric_column, None);
    }
}
