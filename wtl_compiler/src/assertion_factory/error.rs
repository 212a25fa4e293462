//! Assertion compilation errors

use crate::identifier_factory::IdentifierError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
    #[error("Empty assertion string")]
    EmptyAssertionString,

    /// A comparison token outside the seven known keywords
    #[error("Invalid comparison '{comparison}' in assertion: '{raw}'")]
    InvalidComparison { raw: String, comparison: String },

    #[error(transparent)]
    Identifier(#[from] IdentifierError),
}

impl AssertionError {
    pub fn invalid_comparison(raw: &str, comparison: &str) -> Self {
        Self::InvalidComparison {
            raw: raw.to_string(),
            comparison: comparison.to_string(),
        }
    }
}
