//! Factory for attribute identifiers (`"selector".attribute_name`)

use super::element::ElementIdentifierFactory;
use super::{IdentifierError, IdentifierTypeFactory};
use crate::identifier_type;
use wtl_model::{AttributeIdentifier, Identifier};

/// Builds `AttributeIdentifier` models by splitting at the last `.` and
/// delegating the element portion to `ElementIdentifierFactory`. Fails
/// closed (returns None) when the element portion cannot be built.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeIdentifierFactory {
    element_factory: ElementIdentifierFactory,
}

impl IdentifierTypeFactory for AttributeIdentifierFactory {
    fn handles(&self, identifier_string: &str) -> bool {
        identifier_type::is_attribute_identifier(identifier_string)
    }

    fn create(&self, identifier_string: &str) -> Result<Option<Identifier>, IdentifierError> {
        if !self.handles(identifier_string) {
            return Ok(None);
        }

        let Some((element_part, attribute_name)) = identifier_string.rsplit_once('.') else {
            return Ok(None);
        };

        Ok(self
            .element_factory
            .build(element_part)
            .map(|element| Identifier::Attribute(AttributeIdentifier::new(element, attribute_name))))
    }
}
