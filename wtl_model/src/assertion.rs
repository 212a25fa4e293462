//! Assertion model types (EBNF: assertion)
//!
//! Assertions come in two shapes: existence checks, which carry no expected
//! value component at all, and value comparisons, which always carry one
//! (defaulting to the empty literal when the source omits it).

use crate::value::Value;
use serde::{Deserialize, Serialize};

// === COMPARISONS ===

/// The seven comparison keywords (EBNF: comparison)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssertionComparison {
    Is,
    IsNot,
    Exists,
    NotExists,
    Includes,
    Excludes,
    Matches,
}

impl AssertionComparison {
    /// Parse a comparison from its keyword (exact match, case-sensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "is" => Some(Self::Is),
            "is-not" => Some(Self::IsNot),
            "exists" => Some(Self::Exists),
            "not-exists" => Some(Self::NotExists),
            "includes" => Some(Self::Includes),
            "excludes" => Some(Self::Excludes),
            "matches" => Some(Self::Matches),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::IsNot => "is-not",
            Self::Exists => "exists",
            Self::NotExists => "not-exists",
            Self::Includes => "includes",
            Self::Excludes => "excludes",
            Self::Matches => "matches",
        }
    }

    /// Existence comparisons take no expected value
    pub fn is_existence(&self) -> bool {
        matches!(self, Self::Exists | Self::NotExists)
    }
}

// === ASSERTION NODES ===

/// A compiled assertion
///
/// Equality is structural over examined value, comparison and expected
/// value; the raw source line is provenance, not identity. In particular
/// `".selector" exists` and `".selector" exists "ignored"` compile to equal
/// assertions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Assertion {
    /// `<identifier> exists` / `<identifier> not-exists`
    Existence {
        raw: String,
        examined: Value,
        comparison: AssertionComparison,
    },
    /// `<identifier> is|is-not|includes|excludes|matches <expected>`
    Comparison {
        raw: String,
        examined: Value,
        comparison: AssertionComparison,
        expected: Value,
    },
}

impl PartialEq for Assertion {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Existence {
                    examined, comparison, ..
                },
                Self::Existence {
                    examined: other_examined,
                    comparison: other_comparison,
                    ..
                },
            ) => examined == other_examined && comparison == other_comparison,
            (
                Self::Comparison {
                    examined,
                    comparison,
                    expected,
                    ..
                },
                Self::Comparison {
                    examined: other_examined,
                    comparison: other_comparison,
                    expected: other_expected,
                    ..
                },
            ) => {
                examined == other_examined
                    && comparison == other_comparison
                    && expected == other_expected
            }
            _ => false,
        }
    }
}

impl Eq for Assertion {}

impl Assertion {
    pub fn raw(&self) -> &str {
        match self {
            Self::Existence { raw, .. } | Self::Comparison { raw, .. } => raw,
        }
    }

    pub fn examined(&self) -> &Value {
        match self {
            Self::Existence { examined, .. } | Self::Comparison { examined, .. } => examined,
        }
    }

    pub fn comparison(&self) -> AssertionComparison {
        match self {
            Self::Existence { comparison, .. } | Self::Comparison { comparison, .. } => *comparison,
        }
    }

    pub fn expected(&self) -> Option<&Value> {
        match self {
            Self::Existence { .. } => None,
            Self::Comparison { expected, .. } => Some(expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_round_trip() {
        for comparison in [
            AssertionComparison::Is,
            AssertionComparison::IsNot,
            AssertionComparison::Exists,
            AssertionComparison::NotExists,
            AssertionComparison::Includes,
            AssertionComparison::Excludes,
            AssertionComparison::Matches,
        ] {
            assert_eq!(
                AssertionComparison::parse(comparison.as_str()),
                Some(comparison)
            );
        }
        assert_eq!(AssertionComparison::parse("equals"), None);
    }

    #[test]
    fn test_existence_classification() {
        assert!(AssertionComparison::Exists.is_existence());
        assert!(AssertionComparison::NotExists.is_existence());
        assert!(!AssertionComparison::Is.is_existence());
    }

    #[test]
    fn test_existence_assertion_has_no_expected_value() {
        let assertion = Assertion::Existence {
            raw: "\".selector\" exists".to_string(),
            examined: Value::empty(),
            comparison: AssertionComparison::Exists,
        };
        assert_eq!(assertion.expected(), None);
    }
}
