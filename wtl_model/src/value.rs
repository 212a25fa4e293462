//! Value model types for action and assertion operands
//!
//! Values are the leaf operands of the grammar: literals, typed parameter
//! references (`$data.`, `$elements.`, `$env.`), and DOM-identifier-backed
//! values produced when an assertion examines a selector directly.

use crate::identifier::DomIdentifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Any value the WTL grammar can produce (EBNF: value, expected_value)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Literal text, already quote-stripped and unescaped
    Literal(String),
    /// `$data.name` reference into the owning test's data set
    DataParameter { raw: String, property: String },
    /// `$elements.name[.attr]` reference to a named element
    ElementParameter { raw: String, property: String },
    /// `$env.KEY` reference with optional `|"default"` clause
    EnvironmentParameter {
        raw: String,
        property: String,
        default: Option<String>,
    },
    /// A value examined directly from the DOM via a selector
    DomIdentifier(DomIdentifier),
}

impl Value {
    /// The empty literal, used where the grammar tolerates an absent value
    pub fn empty() -> Self {
        Self::Literal(String::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Literal(text) if text.is_empty())
    }

    /// Literal text, if this value is a literal
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "\"{}\"", text),
            Self::DataParameter { raw, .. }
            | Self::ElementParameter { raw, .. }
            | Self::EnvironmentParameter { raw, .. } => write!(f, "{}", raw),
            Self::DomIdentifier(identifier) => write!(f, "{}", identifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(Value::empty().is_empty());
        assert!(!Value::Literal("text".to_string()).is_empty());
        assert!(!Value::DataParameter {
            raw: "$data.name".to_string(),
            property: "name".to_string(),
        }
        .is_empty());
    }

    #[test]
    fn test_as_literal() {
        assert_eq!(
            Value::Literal("text".to_string()).as_literal(),
            Some("text")
        );
        assert_eq!(
            Value::DataParameter {
                raw: "$data.name".to_string(),
                property: "name".to_string(),
            }
            .as_literal(),
            None
        );
    }

    #[test]
    fn test_display_keeps_raw_parameter_form() {
        let value = Value::ElementParameter {
            raw: "$elements.input.value".to_string(),
            property: "input.value".to_string(),
        };
        assert_eq!(value.to_string(), "$elements.input.value");
    }
}
