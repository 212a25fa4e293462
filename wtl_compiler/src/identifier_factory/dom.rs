//! Unified DOM identifier factory
//!
//! Element and attribute selector shapes collapse into one flat
//! `DomIdentifier` (expression + position + optional attribute name) instead
//! of the nested element/attribute types. Assertion examined values use this
//! form so the execution engine receives a single identifier kind for
//! anything read from the DOM.

use super::element::{expression_type, strip_quotes};
use super::{IdentifierError, IdentifierTypeFactory};
use crate::identifier_string::value_and_position;
use crate::identifier_type;
use wtl_model::{DomIdentifier, ElementExpression, Identifier};

#[derive(Debug, Default, Clone, Copy)]
pub struct DomIdentifierFactory;

impl DomIdentifierFactory {
    /// Build the bare DOM identifier, for callers that need the concrete
    /// type rather than the `Identifier` sum.
    pub fn build(&self, identifier_string: &str) -> Option<DomIdentifier> {
        if !self.handles(identifier_string) {
            return None;
        }

        let (element_part, attribute_name) =
            if identifier_type::is_attribute_identifier(identifier_string) {
                let (element_part, attribute_name) = identifier_string.rsplit_once('.')?;
                (element_part, Some(attribute_name))
            } else {
                (identifier_string, None)
            };

        let (value, position) = value_and_position::extract(element_part);
        let expression = ElementExpression::new(strip_quotes(&value), expression_type(element_part));

        let identifier = DomIdentifier::new(expression, position);
        Some(match attribute_name {
            Some(attribute_name) => identifier.with_attribute_name(attribute_name),
            None => identifier,
        })
    }
}

impl IdentifierTypeFactory for DomIdentifierFactory {
    fn handles(&self, identifier_string: &str) -> bool {
        identifier_type::is_element_identifier(identifier_string)
            || identifier_type::is_attribute_identifier(identifier_string)
    }

    fn create(&self, identifier_string: &str) -> Result<Option<Identifier>, IdentifierError> {
        Ok(self.build(identifier_string).map(Identifier::Dom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wtl_model::ElementExpressionType;

    #[test]
    fn test_element_shape_has_no_attribute() {
        let factory = DomIdentifierFactory;

        let identifier = factory.build("\".selector\":3").unwrap();
        assert_eq!(identifier.expression().expression(), ".selector");
        assert_eq!(identifier.position(), 3);
        assert_eq!(identifier.attribute_name(), None);
    }

    #[test]
    fn test_attribute_shape_is_flattened() {
        let factory = DomIdentifierFactory;

        let identifier = factory.build("\"//h1\":first.id").unwrap();
        assert_eq!(identifier.expression().expression(), "//h1");
        assert_eq!(
            identifier.expression().expression_type(),
            ElementExpressionType::XPath
        );
        assert_eq!(identifier.position(), 1);
        assert_eq!(identifier.attribute_name(), Some("id"));
    }

    #[test]
    fn test_reference_shapes_are_not_handled() {
        let factory = DomIdentifierFactory;

        assert_eq!(factory.build("$elements.name"), None);
        assert_eq!(factory.build("page_import.elements.button"), None);
    }
}
