//! Identifier model types for the WTL grammar
//!
//! Identifiers are typed references to DOM elements, DOM attributes, or
//! external element/page parameters, derived from single-line DSL strings.
//!
//! Design principles:
//! - Immutable values: every `with_*` method returns a new value
//! - Parent chains are owned by value (a child holds its parent, not an ID)
//! - Names are attached post-construction and never mutated afterwards
//! - Serde compatible: full serialization support for downstream consumers

use crate::page_element_reference::PageElementReference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default match position for a selector: the first match.
pub const DEFAULT_POSITION: i32 = 1;

// === ELEMENT EXPRESSIONS ===

/// Expression language of an element selector (EBNF: quoted_selector)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementExpressionType {
    CssSelector,
    XPath,
}

impl ElementExpressionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CssSelector => "css",
            Self::XPath => "xpath",
        }
    }
}

/// A raw selector expression together with its expression language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementExpression {
    expression: String,
    expression_type: ElementExpressionType,
}

impl ElementExpression {
    pub fn new(expression: impl Into<String>, expression_type: ElementExpressionType) -> Self {
        Self {
            expression: expression.into(),
            expression_type,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn expression_type(&self) -> ElementExpressionType {
        self.expression_type
    }
}

impl fmt::Display for ElementExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.expression)
    }
}

// === ELEMENT IDENTIFIERS ===

/// A selector-backed element identifier with match position and an optional
/// owned parent chain.
///
/// Position semantics: `1` is the first match (the default), negative values
/// count from the end (`-1` is the last match).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementIdentifier {
    expression: ElementExpression,
    position: i32,
    parent: Option<Box<ElementIdentifier>>,
    name: Option<String>,
}

impl ElementIdentifier {
    pub fn new(expression: ElementExpression, position: i32) -> Self {
        Self {
            expression,
            position,
            parent: None,
            name: None,
        }
    }

    pub fn expression(&self) -> &ElementExpression {
        &self.expression
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn parent(&self) -> Option<&ElementIdentifier> {
        self.parent.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Derive a new identifier scoped beneath `parent`.
    ///
    /// The grammar only ever creates single-hop nesting, but the type permits
    /// deeper chains so a grammar extension does not require a model change.
    pub fn with_parent(self, parent: ElementIdentifier) -> Self {
        Self {
            parent: Some(Box::new(parent)),
            ..self
        }
    }

    pub fn with_position(self, position: i32) -> Self {
        Self { position, ..self }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
}

impl fmt::Display for ElementIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)?;
        if self.position != DEFAULT_POSITION {
            write!(f, ":{}", self.position)?;
        }
        Ok(())
    }
}

/// An attribute of a selector-backed element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeIdentifier {
    element: ElementIdentifier,
    attribute_name: String,
    name: Option<String>,
}

impl AttributeIdentifier {
    pub fn new(element: ElementIdentifier, attribute_name: impl Into<String>) -> Self {
        Self {
            element,
            attribute_name: attribute_name.into(),
            name: None,
        }
    }

    pub fn element(&self) -> &ElementIdentifier {
        &self.element
    }

    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
}

/// Unified element-or-attribute identifier: a selector expression, a match
/// position, and an optional attribute name in one flat carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomIdentifier {
    expression: ElementExpression,
    position: i32,
    attribute_name: Option<String>,
    name: Option<String>,
}

impl DomIdentifier {
    pub fn new(expression: ElementExpression, position: i32) -> Self {
        Self {
            expression,
            position,
            attribute_name: None,
            name: None,
        }
    }

    pub fn expression(&self) -> &ElementExpression {
        &self.expression
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute_name.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_attribute_name(self, attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: Some(attribute_name.into()),
            ..self
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
}

impl fmt::Display for DomIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)?;
        if self.position != DEFAULT_POSITION {
            write!(f, ":{}", self.position)?;
        }
        if let Some(attribute_name) = &self.attribute_name {
            write!(f, ".{}", attribute_name)?;
        }
        Ok(())
    }
}

// === REFERENCE IDENTIFIERS ===

/// Whether a reference resolves to an element or one of its attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    Element,
    Attribute,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Attribute => "attribute",
        }
    }
}

/// A `$elements.name` or `$elements.name.attr` reference to a named element
/// declared elsewhere in the owning page or step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementReference {
    raw: String,
    element_name: String,
    attribute_name: Option<String>,
    name: Option<String>,
}

impl ElementReference {
    pub fn new(
        raw: impl Into<String>,
        element_name: impl Into<String>,
        attribute_name: Option<String>,
    ) -> Self {
        Self {
            raw: raw.into(),
            element_name: element_name.into(),
            attribute_name,
            name: None,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute_name.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
}

/// A reference identifier carrying its raw source string and a dotted
/// property path (`elements.name` or `elements.name.attr`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomIdentifierReference {
    kind: ReferenceKind,
    raw: String,
    property: String,
    name: Option<String>,
}

impl DomIdentifierReference {
    pub fn new(kind: ReferenceKind, raw: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
            property: property.into(),
            name: None,
        }
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
}

/// Reference-shaped identifiers (EBNF: `$elements.` and page-import forms)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceIdentifier {
    Element(ElementReference),
    PageElement(PageElementReference),
    Dom(DomIdentifierReference),
}

// === IDENTIFIER SUM TYPE ===

/// Any identifier the WTL grammar can produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identifier {
    Element(ElementIdentifier),
    Attribute(AttributeIdentifier),
    Dom(DomIdentifier),
    Reference(ReferenceIdentifier),
}

impl Identifier {
    /// Attach a name label, returning the renamed identifier
    pub fn with_name(self, name: impl Into<String>) -> Self {
        match self {
            Self::Element(inner) => Self::Element(inner.with_name(name)),
            Self::Attribute(inner) => Self::Attribute(inner.with_name(name)),
            Self::Dom(inner) => Self::Dom(inner.with_name(name)),
            Self::Reference(ReferenceIdentifier::Element(inner)) => {
                Self::Reference(ReferenceIdentifier::Element(inner.with_name(name)))
            }
            Self::Reference(ReferenceIdentifier::PageElement(inner)) => {
                Self::Reference(ReferenceIdentifier::PageElement(inner.with_name(name)))
            }
            Self::Reference(ReferenceIdentifier::Dom(inner)) => {
                Self::Reference(ReferenceIdentifier::Dom(inner.with_name(name)))
            }
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Element(inner) => inner.name(),
            Self::Attribute(inner) => inner.name(),
            Self::Dom(inner) => inner.name(),
            Self::Reference(ReferenceIdentifier::Element(inner)) => inner.name(),
            Self::Reference(ReferenceIdentifier::PageElement(inner)) => inner.name(),
            Self::Reference(ReferenceIdentifier::Dom(inner)) => inner.name(),
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    pub fn as_element(&self) -> Option<&ElementIdentifier> {
        match self {
            Self::Element(inner) => Some(inner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css(selector: &str) -> ElementIdentifier {
        ElementIdentifier::new(
            ElementExpression::new(selector, ElementExpressionType::CssSelector),
            DEFAULT_POSITION,
        )
    }

    #[test]
    fn test_with_parent_preserves_original() {
        let parent = css(".form");
        let child = css(".field");

        let nested = child.clone().with_parent(parent.clone());

        assert_eq!(nested.parent(), Some(&parent));
        assert_eq!(child.parent(), None);
    }

    #[test]
    fn test_with_name_dispatches_through_sum_type() {
        let identifier = Identifier::Element(css(".selector")).with_name("heading");
        assert_eq!(identifier.name(), Some("heading"));

        let reference = Identifier::Reference(ReferenceIdentifier::Element(
            ElementReference::new("$elements.input", "input", None),
        ))
        .with_name("input");
        assert_eq!(reference.name(), Some("input"));
    }

    #[test]
    fn test_element_accessors_on_sum_type() {
        let element = Identifier::Element(css(".selector"));
        assert!(element.is_element());
        assert_eq!(element.as_element(), Some(&css(".selector")));

        let reference = Identifier::Reference(ReferenceIdentifier::Element(
            ElementReference::new("$elements.input", "input", None),
        ));
        assert!(!reference.is_element());
        assert_eq!(reference.as_element(), None);
    }

    #[test]
    fn test_display_omits_default_position() {
        assert_eq!(css(".selector").to_string(), "\".selector\"");
        assert_eq!(
            css(".selector").with_position(-1).to_string(),
            "\".selector\":-1"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let identifier = Identifier::Attribute(AttributeIdentifier::new(
            css(".selector").with_position(3),
            "data-id",
        ));

        let json = serde_json::to_string(&identifier).unwrap();
        let restored: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, identifier);
    }
}
