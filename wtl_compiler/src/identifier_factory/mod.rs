//! Identifier factories: one per identifier shape, plus the composition root
//!
//! Every factory implements the same two-method capability: `handles` decides
//! applicability from the string shape, `create` builds the typed identifier
//! model (None when the factory does not own the shape). The composition
//! root iterates an ordered factory list, first-match-wins; only the
//! fallback page element reference factory can fail after claiming a string.

pub mod attribute;
pub mod dom;
pub mod dom_reference;
pub mod element;
pub mod element_parameter;
pub mod element_reference;
pub mod error;
pub mod page_element_reference;

pub use attribute::AttributeIdentifierFactory;
pub use dom::DomIdentifierFactory;
pub use dom_reference::DomReferenceIdentifierFactory;
pub use element::ElementIdentifierFactory;
pub use element_parameter::ElementParameterIdentifierFactory;
pub use element_reference::ElementReferenceIdentifierFactory;
pub use error::IdentifierError;
pub use page_element_reference::PageElementReferenceIdentifierFactory;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use wtl_model::Identifier;

/// Shared capability of every identifier shape factory
pub trait IdentifierTypeFactory {
    /// Does this factory own the shape of `identifier_string`?
    fn handles(&self, identifier_string: &str) -> bool;

    /// Build the typed identifier. None when `handles` is false; the
    /// fallback factory errors for recognized-but-malformed references.
    fn create(&self, identifier_string: &str) -> Result<Option<Identifier>, IdentifierError>;
}

/// Leading `"{{ parent_name }} selector..."` back-reference inside a quoted
/// selector
static ELEMENT_BACK_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^"\s*\{\{\s*(?P<parent>[^{}]+?)\s*\}\}\s*(?P<selector>.*)$"#)
        .expect("element back-reference pattern")
});

/// Composition root over the identifier shape factories
pub struct IdentifierFactory {
    factories: Vec<Box<dyn IdentifierTypeFactory>>,
}

impl IdentifierFactory {
    pub fn new() -> Self {
        Self {
            factories: vec![
                Box::new(ElementIdentifierFactory),
                Box::new(AttributeIdentifierFactory::default()),
                Box::new(ElementParameterIdentifierFactory),
                Box::new(ElementReferenceIdentifierFactory),
                Box::new(PageElementReferenceIdentifierFactory),
            ],
        }
    }

    /// Build an identifier from its string form, attaching `name` when given.
    pub fn create(
        &self,
        identifier_string: &str,
        name: Option<&str>,
    ) -> Result<Option<Identifier>, IdentifierError> {
        for factory in &self.factories {
            if factory.handles(identifier_string) {
                let identifier = factory.create(identifier_string)?;
                return Ok(match (identifier, name) {
                    (Some(identifier), Some(name)) => Some(identifier.with_name(name)),
                    (identifier, _) => identifier,
                });
            }
        }

        Ok(None)
    }

    /// Like `create`, but additionally resolves a leading `{{ parent }}`
    /// back-reference against the caller-supplied table of already-built
    /// named identifiers.
    ///
    /// A parent name missing from the table degrades silently to an
    /// unparented identifier: pages are built incrementally in declaration
    /// order, so a forward reference is not an error at this layer.
    pub fn create_with_element_reference(
        &self,
        identifier_string: &str,
        name: Option<&str>,
        existing_identifiers: &HashMap<String, Identifier>,
    ) -> Result<Option<Identifier>, IdentifierError> {
        let Some((parent_name, reduced_string)) = split_element_back_reference(identifier_string)
        else {
            return self.create(identifier_string, name);
        };

        let identifier = self.create(&reduced_string, name)?;

        match (identifier, existing_identifiers.get(parent_name.as_str())) {
            (Some(Identifier::Element(child)), Some(Identifier::Element(parent))) => Ok(Some(
                Identifier::Element(child.with_parent(parent.clone())),
            )),
            (identifier, parent) => {
                if parent.is_none() {
                    debug!("unresolved parent reference '{}', identifier left unparented", parent_name);
                }
                Ok(identifier)
            }
        }
    }
}

impl Default for IdentifierFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a quoted selector with a leading `{{ parent }}` token into the
/// parent name and the reduced selector string (re-quoted).
fn split_element_back_reference(identifier_string: &str) -> Option<(String, String)> {
    let captures = ELEMENT_BACK_REFERENCE.captures(identifier_string)?;

    let parent_name = captures.name("parent")?.as_str().to_string();
    let reduced_string = format!("\"{}", captures.name("selector")?.as_str());

    Some((parent_name, reduced_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use wtl_model::{
        ElementExpression, ElementExpressionType, ElementIdentifier, ReferenceIdentifier,
    };

    fn css(selector: &str) -> Identifier {
        Identifier::Element(ElementIdentifier::new(
            ElementExpression::new(selector, ElementExpressionType::CssSelector),
            1,
        ))
    }

    #[test]
    fn test_first_matching_factory_wins() {
        let factory = IdentifierFactory::new();

        assert_matches!(
            factory.create("\".selector\"", None).unwrap().unwrap(),
            Identifier::Element(_)
        );
        assert_matches!(
            factory
                .create("\".selector\".attribute_name", None)
                .unwrap()
                .unwrap(),
            Identifier::Attribute(_)
        );
        assert_matches!(
            factory.create("$elements.name", None).unwrap().unwrap(),
            Identifier::Reference(ReferenceIdentifier::Element(_))
        );
        assert_matches!(
            factory
                .create("page_import.elements.button", None)
                .unwrap()
                .unwrap(),
            Identifier::Reference(ReferenceIdentifier::PageElement(_))
        );
    }

    #[test]
    fn test_name_is_attached_post_construction() {
        let factory = IdentifierFactory::new();

        let identifier = factory
            .create("\".selector\"", Some("heading"))
            .unwrap()
            .unwrap();
        assert_eq!(identifier.name(), Some("heading"));
    }

    #[test]
    fn test_malformed_fallback_reference_errors() {
        let factory = IdentifierFactory::new();

        let error = factory
            .create("invalid-page-model-element-reference", None)
            .unwrap_err();
        assert_eq!(error.reference(), "invalid-page-model-element-reference");
    }

    #[test]
    fn test_parent_reference_attaches_table_entry() {
        let factory = IdentifierFactory::new();
        let mut existing = HashMap::new();
        existing.insert("form".to_string(), css(".form"));

        let identifier = factory
            .create_with_element_reference("\"{{ form }} .field\"", Some("form_field"), &existing)
            .unwrap()
            .unwrap();

        let Identifier::Element(element) = identifier else {
            panic!("expected element identifier");
        };
        assert_eq!(element.expression().expression(), ".field");
        assert_eq!(element.name(), Some("form_field"));
        assert_eq!(
            Identifier::Element(element.parent().unwrap().clone()),
            css(".form")
        );
    }

    #[test]
    fn test_unresolved_parent_degrades_to_unparented() {
        let factory = IdentifierFactory::new();
        let existing = HashMap::new();

        let identifier = factory
            .create_with_element_reference("\"{{ form }} .field\"", None, &existing)
            .unwrap()
            .unwrap();

        let Identifier::Element(element) = identifier else {
            panic!("expected element identifier");
        };
        assert_eq!(element.expression().expression(), ".field");
        assert_eq!(element.parent(), None);
    }

    #[test]
    fn test_plain_selector_passes_through_reference_aware_create() {
        let factory = IdentifierFactory::new();
        let existing = HashMap::new();

        let identifier = factory
            .create_with_element_reference("\".selector\"", None, &existing)
            .unwrap()
            .unwrap();
        assert_eq!(identifier, css(".selector"));
    }
}
