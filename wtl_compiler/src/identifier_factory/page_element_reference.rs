//! Fallback factory for page element references
//!
//! The classifier routes everything unclassified into this bucket, so unlike
//! the other factories a recognized string can still be malformed here. The
//! reference value object performs its own validity check; an invalid
//! reference raises `MalformedPageElementReference` carrying the offending
//! string.

use super::{IdentifierError, IdentifierTypeFactory};
use crate::identifier_type::{self, IdentifierType};
use wtl_model::{Identifier, PageElementReference, ReferenceIdentifier};

#[derive(Debug, Default, Clone, Copy)]
pub struct PageElementReferenceIdentifierFactory;

impl IdentifierTypeFactory for PageElementReferenceIdentifierFactory {
    fn handles(&self, identifier_string: &str) -> bool {
        identifier_type::find_type(identifier_string) == IdentifierType::PageElementReference
    }

    fn create(&self, identifier_string: &str) -> Result<Option<Identifier>, IdentifierError> {
        if !self.handles(identifier_string) {
            return Ok(None);
        }

        let reference = PageElementReference::new(identifier_string);
        if !reference.is_valid() {
            return Err(IdentifierError::malformed_page_element_reference(
                identifier_string,
            ));
        }

        Ok(Some(Identifier::Reference(
            ReferenceIdentifier::PageElement(reference),
        )))
    }
}
