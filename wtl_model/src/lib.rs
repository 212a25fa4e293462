// Internal modules
pub mod action;
pub mod assertion;
pub mod identifier;
pub mod page_element_reference;
pub mod value;

// Re-export key types for library consumers
pub use action::{Action, ActionType};
pub use assertion::{Assertion, AssertionComparison};
pub use identifier::{
    AttributeIdentifier, DomIdentifier, DomIdentifierReference, ElementExpression,
    ElementExpressionType, ElementIdentifier, ElementReference, Identifier, ReferenceIdentifier,
    ReferenceKind, DEFAULT_POSITION,
};
pub use page_element_reference::PageElementReference;
pub use value::Value;
