//! Factory for pure element parameter references (`$elements.name`)

use super::{IdentifierError, IdentifierTypeFactory};
use crate::identifier_type::ELEMENT_PARAMETER_PREFIX;
use wtl_model::{ElementReference, Identifier, ReferenceIdentifier};

/// Handles `$elements.` shapes without a second dot: a reference to a named
/// element with no attribute component.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElementParameterIdentifierFactory;

impl IdentifierTypeFactory for ElementParameterIdentifierFactory {
    fn handles(&self, identifier_string: &str) -> bool {
        match identifier_string.strip_prefix(ELEMENT_PARAMETER_PREFIX) {
            Some(element_name) => !element_name.is_empty() && !element_name.contains('.'),
            None => false,
        }
    }

    fn create(&self, identifier_string: &str) -> Result<Option<Identifier>, IdentifierError> {
        let Some(element_name) = identifier_string
            .strip_prefix(ELEMENT_PARAMETER_PREFIX)
            .filter(|element_name| !element_name.is_empty() && !element_name.contains('.'))
        else {
            return Ok(None);
        };

        Ok(Some(Identifier::Reference(ReferenceIdentifier::Element(
            ElementReference::new(identifier_string, element_name, None),
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_element_reference() {
        let factory = ElementParameterIdentifierFactory;

        let identifier = factory.create("$elements.input").unwrap().unwrap();
        let Identifier::Reference(ReferenceIdentifier::Element(reference)) = identifier else {
            panic!("expected element reference");
        };
        assert_eq!(reference.element_name(), "input");
        assert_eq!(reference.attribute_name(), None);
        assert_eq!(reference.raw(), "$elements.input");
    }

    #[test]
    fn test_attribute_suffixed_references_are_not_handled() {
        let factory = ElementParameterIdentifierFactory;

        assert!(!factory.handles("$elements.input.value"));
        assert!(!factory.handles("$elements."));
        assert!(!factory.handles("$data.input"));
    }
}
