//! Factory for DOM identifier references
//!
//! Like `ElementReferenceIdentifierFactory` this handles
//! `$elements.name[.attr]`, but it produces the flat reference form carrying
//! the raw source string and the dotted property path, tagged with whether
//! the reference resolves to an element or an attribute. Input actions use
//! this form for their `$elements.` targets.

use super::{IdentifierError, IdentifierTypeFactory};
use crate::identifier_type::{self, ELEMENT_PARAMETER_PREFIX};
use wtl_model::{DomIdentifierReference, Identifier, ReferenceIdentifier, ReferenceKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct DomReferenceIdentifierFactory;

impl IdentifierTypeFactory for DomReferenceIdentifierFactory {
    fn handles(&self, identifier_string: &str) -> bool {
        identifier_type::is_element_parameter_reference(identifier_string)
    }

    fn create(&self, identifier_string: &str) -> Result<Option<Identifier>, IdentifierError> {
        let Some(reference_part) = identifier_string.strip_prefix(ELEMENT_PARAMETER_PREFIX) else {
            return Ok(None);
        };

        let kind = if reference_part.contains('.') {
            ReferenceKind::Attribute
        } else {
            ReferenceKind::Element
        };

        // property path keeps the `elements.` component, dollar sign dropped
        let property = &identifier_string[1..];

        Ok(Some(Identifier::Reference(ReferenceIdentifier::Dom(
            DomIdentifierReference::new(kind, identifier_string, property),
        ))))
    }
}
