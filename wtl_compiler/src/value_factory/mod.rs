//! Leaf value construction
//!
//! `ValueFactory` classifies a value string into a literal or a typed
//! parameter reference. It never fails: an empty string is the empty
//! literal, a supposedly-quoted value without quotes is taken as-is.

pub mod assertion_examined;

pub use assertion_examined::AssertionExaminedValueFactory;

use wtl_model::Value;

const DATA_PARAMETER_PREFIX: &str = "$data.";
const ELEMENT_PARAMETER_PREFIX: &str = "$elements.";
const ENVIRONMENT_PARAMETER_PREFIX: &str = "$env.";

#[derive(Debug, Default, Clone, Copy)]
pub struct ValueFactory;

impl ValueFactory {
    /// Build a value from its trimmed string form.
    pub fn create_from_value_string(&self, value_string: &str) -> Value {
        let trimmed = value_string.trim();
        if trimmed.is_empty() {
            return Value::empty();
        }

        if let Some(property) = trimmed.strip_prefix(DATA_PARAMETER_PREFIX) {
            return Value::DataParameter {
                raw: trimmed.to_string(),
                property: property.to_string(),
            };
        }

        if let Some(property) = trimmed.strip_prefix(ELEMENT_PARAMETER_PREFIX) {
            return Value::ElementParameter {
                raw: trimmed.to_string(),
                property: property.to_string(),
            };
        }

        if let Some(reference_part) = trimmed.strip_prefix(ENVIRONMENT_PARAMETER_PREFIX) {
            let (property, default) = match reference_part.split_once('|') {
                Some((property, default)) => (property, Some(unquote(default))),
                None => (reference_part, None),
            };
            return Value::EnvironmentParameter {
                raw: trimmed.to_string(),
                property: property.to_string(),
                default,
            };
        }

        Value::Literal(unquote(trimmed))
    }
}

/// Strip one layer of surrounding quotes if present, then unescape `\"`.
fn unquote(text: &str) -> String {
    let stripped = text
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text);
    stripped.replace("\\\"", "\"")
}
