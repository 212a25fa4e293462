//! Factory for element references with an optional attribute component
//! (`$elements.name` / `$elements.name.attr`)

use super::{IdentifierError, IdentifierTypeFactory};
use crate::identifier_type::{self, ELEMENT_PARAMETER_PREFIX};
use wtl_model::{ElementReference, Identifier, ReferenceIdentifier};

/// Branches on the presence of a second dot after the `$elements.` prefix:
/// without one the reference targets the element itself, with one it targets
/// a named attribute of that element.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElementReferenceIdentifierFactory;

impl IdentifierTypeFactory for ElementReferenceIdentifierFactory {
    fn handles(&self, identifier_string: &str) -> bool {
        identifier_type::is_element_parameter_reference(identifier_string)
    }

    fn create(&self, identifier_string: &str) -> Result<Option<Identifier>, IdentifierError> {
        let Some(property) = identifier_string.strip_prefix(ELEMENT_PARAMETER_PREFIX) else {
            return Ok(None);
        };

        let (element_name, attribute_name) = match property.split_once('.') {
            Some((element_name, attribute_name)) => (element_name, Some(attribute_name)),
            None => (property, None),
        };

        let attribute_name = attribute_name
            .filter(|attribute_name| !attribute_name.is_empty())
            .map(str::to_string);

        Ok(Some(Identifier::Reference(ReferenceIdentifier::Element(
            ElementReference::new(identifier_string, element_name, attribute_name),
        ))))
    }
}
