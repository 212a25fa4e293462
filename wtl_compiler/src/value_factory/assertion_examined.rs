//! Examined-value construction for assertions
//!
//! The left-hand operand of an assertion is usually an identifier string.
//! Element and attribute selector shapes are routed through the unified DOM
//! identifier factory and wrapped as DOM-identifier-backed values; every
//! other shape falls through to the plain value factory.

use super::ValueFactory;
use crate::identifier_factory::DomIdentifierFactory;
use crate::identifier_type;
use wtl_model::Value;

#[derive(Debug, Default, Clone, Copy)]
pub struct AssertionExaminedValueFactory {
    dom_identifier_factory: DomIdentifierFactory,
    value_factory: ValueFactory,
}

impl AssertionExaminedValueFactory {
    pub fn create(&self, value_string: &str) -> Value {
        if identifier_type::is_element_identifier(value_string)
            || identifier_type::is_attribute_identifier(value_string)
        {
            if let Some(identifier) = self.dom_identifier_factory.build(value_string) {
                return Value::DomIdentifier(identifier);
            }
        }

        self.value_factory.create_from_value_string(value_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_selector_shapes_become_dom_identifier_values() {
        let factory = AssertionExaminedValueFactory::default();

        let value = factory.create("\".selector\":2.data-id");
        let Value::DomIdentifier(identifier) = value else {
            panic!("expected dom identifier value");
        };
        assert_eq!(identifier.expression().expression(), ".selector");
        assert_eq!(identifier.position(), 2);
        assert_eq!(identifier.attribute_name(), Some("data-id"));
    }

    #[test]
    fn test_other_shapes_fall_through_to_value_factory() {
        let factory = AssertionExaminedValueFactory::default();

        assert_matches!(
            factory.create("$elements.name"),
            Value::ElementParameter { .. }
        );
        assert_matches!(factory.create("$data.name"), Value::DataParameter { .. });
        assert_matches!(
            factory.create("page_import.elements.button"),
            Value::Literal(_)
        );
    }
}
