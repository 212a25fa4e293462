//! Factory for selector-backed element identifiers

use super::{IdentifierError, IdentifierTypeFactory};
use crate::identifier_string::value_and_position;
use crate::identifier_type;
use wtl_model::{ElementExpression, ElementExpressionType, ElementIdentifier, Identifier};

/// Strip one layer of surrounding quotes from a selector value
pub(super) fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|stripped| stripped.strip_suffix('"'))
        .unwrap_or(value)
}

/// Expression language of a quoted selector value
pub(super) fn expression_type(identifier_string: &str) -> ElementExpressionType {
    if identifier_string.starts_with("\"/") {
        ElementExpressionType::XPath
    } else {
        ElementExpressionType::CssSelector
    }
}

/// Builds `ElementIdentifier` models from CSS/XPath selector shapes
#[derive(Debug, Default, Clone, Copy)]
pub struct ElementIdentifierFactory;

impl ElementIdentifierFactory {
    /// Build the bare element identifier, for callers that need the concrete
    /// type rather than the `Identifier` sum.
    pub fn build(&self, identifier_string: &str) -> Option<ElementIdentifier> {
        if !self.handles(identifier_string) {
            return None;
        }

        let (value, position) = value_and_position::extract(identifier_string);
        let expression =
            ElementExpression::new(strip_quotes(&value), expression_type(identifier_string));

        Some(ElementIdentifier::new(expression, position))
    }
}

impl IdentifierTypeFactory for ElementIdentifierFactory {
    fn handles(&self, identifier_string: &str) -> bool {
        identifier_type::is_element_identifier(identifier_string)
    }

    fn create(&self, identifier_string: &str) -> Result<Option<Identifier>, IdentifierError> {
        Ok(self.build(identifier_string).map(Identifier::Element))
    }
}
