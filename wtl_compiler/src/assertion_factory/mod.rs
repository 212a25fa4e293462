//! Assertion compilation
//!
//! An assertion line is `identifier comparison [expected_value]`. The
//! identifier substring is extracted from the start and becomes the examined
//! value; the remainder splits on the first space into the comparison token
//! and the expected-value string. Existence comparisons build an assertion
//! with no expected value component at all; any trailing text after
//! `exists`/`not-exists` is discarded by design.

pub mod error;

pub use error::AssertionError;

use crate::identifier_string::IdentifierStringExtractor;
use crate::value_factory::{AssertionExaminedValueFactory, ValueFactory};
use log::debug;
use wtl_model::{Assertion, AssertionComparison};

pub struct AssertionFactory {
    identifier_string_extractor: IdentifierStringExtractor,
    examined_value_factory: AssertionExaminedValueFactory,
    value_factory: ValueFactory,
}

impl AssertionFactory {
    pub fn new() -> Self {
        Self {
            identifier_string_extractor: IdentifierStringExtractor::new(),
            examined_value_factory: AssertionExaminedValueFactory::default(),
            value_factory: ValueFactory,
        }
    }

    /// Compile a raw assertion line into a typed assertion.
    pub fn create_assertion(&self, raw_assertion: &str) -> Result<Assertion, AssertionError> {
        let raw = raw_assertion.trim();
        if raw.is_empty() {
            return Err(AssertionError::EmptyAssertionString);
        }

        // lenient fallback: an unclaimable start means the whole line is
        // the examined operand and the comparison is missing
        let identifier_string = self
            .identifier_string_extractor
            .extract_from_start(raw)
            .unwrap_or_else(|| raw.to_string());

        let examined = self.examined_value_factory.create(&identifier_string);

        let remainder = raw[identifier_string.len()..].trim();
        let (comparison_token, expected_string) = match remainder.split_once(' ') {
            Some((comparison_token, expected_string)) => (comparison_token, expected_string),
            None => (remainder, ""),
        };

        let comparison = AssertionComparison::parse(comparison_token)
            .ok_or_else(|| AssertionError::invalid_comparison(raw, comparison_token))?;

        if comparison.is_existence() {
            if !expected_string.is_empty() {
                debug!("discarding trailing tokens after '{}'", comparison.as_str());
            }
            return Ok(Assertion::Existence {
                raw: raw.to_string(),
                examined,
                comparison,
            });
        }

        Ok(Assertion::Comparison {
            raw: raw.to_string(),
            examined,
            comparison,
            expected: self.value_factory.create_from_value_string(expected_string),
        })
    }
}

impl Default for AssertionFactory {
    fn default() -> Self {
        Self::new()
    }
}
