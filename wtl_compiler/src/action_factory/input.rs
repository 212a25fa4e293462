//! Factory for input actions (`set <identifier> to <value>`)
//!
//! The most involved action shape. The identifier substring is extracted
//! from the start of the arguments and must classify as an element
//! selector, element parameter reference or page element reference; any
//! other classification is a malformed reference. The `to` keyword is then
//! detected against the remainder only, so a `" to "` embedded inside a
//! quoted selector never terminates the identifier. A missing keyword is a
//! lenient parse, not an error: the whole remainder becomes the value.

use super::{ActionError, ActionTypeFactory};
use crate::identifier_factory::{
    DomReferenceIdentifierFactory, ElementIdentifierFactory, IdentifierError, IdentifierTypeFactory,
    PageElementReferenceIdentifierFactory,
};
use crate::identifier_string::IdentifierStringExtractor;
use crate::identifier_type::{self, IdentifierType};
use crate::value_factory::ValueFactory;
use wtl_model::{Action, ActionType, Identifier};

const TO_KEYWORD: &str = " to ";
const TRAILING_TO_KEYWORD: &str = " to";

pub struct InputActionTypeFactory {
    identifier_string_extractor: IdentifierStringExtractor,
    element_factory: ElementIdentifierFactory,
    reference_factory: DomReferenceIdentifierFactory,
    page_element_factory: PageElementReferenceIdentifierFactory,
    value_factory: ValueFactory,
}

impl InputActionTypeFactory {
    pub fn new() -> Self {
        Self {
            identifier_string_extractor: IdentifierStringExtractor::new(),
            element_factory: ElementIdentifierFactory,
            reference_factory: DomReferenceIdentifierFactory,
            page_element_factory: PageElementReferenceIdentifierFactory,
            value_factory: ValueFactory,
        }
    }

    fn create_identifier(&self, identifier_string: &str) -> Result<Identifier, ActionError> {
        let identifier = match identifier_type::find_type(identifier_string) {
            IdentifierType::ElementSelector => self.element_factory.create(identifier_string)?,
            IdentifierType::ElementParameterReference => {
                self.reference_factory.create(identifier_string)?
            }
            IdentifierType::PageElementReference => {
                self.page_element_factory.create(identifier_string)?
            }
            // attribute targets cannot be set
            IdentifierType::AttributeSelector => None,
        };

        identifier.ok_or_else(|| {
            IdentifierError::malformed_page_element_reference(identifier_string).into()
        })
    }
}

impl Default for InputActionTypeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionTypeFactory for InputActionTypeFactory {
    fn handles(&self, action_type: &str) -> bool {
        action_type == ActionType::Set.as_str()
    }

    fn create(&self, raw: &str, action_type: &str, arguments: &str) -> Result<Action, ActionError> {
        if !self.handles(action_type) {
            return Err(ActionError::invalid_action_type(action_type));
        }

        let identifier_string = self
            .identifier_string_extractor
            .extract_from_start(arguments)
            .ok_or_else(|| IdentifierError::malformed_page_element_reference(arguments))?;

        let identifier = self.create_identifier(&identifier_string)?;

        // identifier_string is a prefix of arguments, so the slice boundary
        // is always a char boundary
        let remainder = &arguments[identifier_string.len()..];

        let value = if remainder.trim().is_empty() || arguments == identifier_string {
            None
        } else if remainder == TRAILING_TO_KEYWORD {
            None
        } else if let Some(value_string) = remainder.strip_prefix(TO_KEYWORD) {
            Some(self.value_factory.create_from_value_string(value_string))
        } else {
            // missing "to" keyword: the entire remainder is the value
            Some(self.value_factory.create_from_value_string(remainder))
        };

        Ok(Action::Input {
            raw: raw.to_string(),
            identifier,
            value,
            arguments: arguments.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use wtl_model::Value;

    fn create(arguments: &str) -> Result<Action, ActionError> {
        let raw = format!("set {arguments}");
        InputActionTypeFactory::new().create(&raw, "set", arguments)
    }

    #[test]
    fn test_to_keyword_and_its_omission_are_equivalent() {
        let with_keyword = create("\".selector\" to \"value\"").unwrap();
        let without_keyword = create("\".selector\" \"value\"").unwrap();

        let Action::Input {
            identifier, value, ..
        } = with_keyword
        else {
            panic!("expected input action");
        };
        let Action::Input {
            identifier: lenient_identifier,
            value: lenient_value,
            ..
        } = without_keyword
        else {
            panic!("expected input action");
        };

        assert_eq!(identifier, lenient_identifier);
        assert_eq!(value, lenient_value);
        assert_eq!(value, Some(Value::Literal("value".to_string())));
    }

    #[test]
    fn test_identifier_only_arguments_have_no_value() {
        for arguments in ["\".selector\"", "\".selector\" to"] {
            let action = create(arguments).unwrap();
            assert_matches!(action, Action::Input { value: None, .. });
        }
    }

    #[test]
    fn test_to_inside_quoted_selector_is_not_a_keyword() {
        let action = create("\"a to b\" to \"value\"").unwrap();

        let Action::Input {
            identifier, value, ..
        } = action
        else {
            panic!("expected input action");
        };
        let Identifier::Element(element) = identifier else {
            panic!("expected element identifier");
        };
        assert_eq!(element.expression().expression(), "a to b");
        assert_eq!(value, Some(Value::Literal("value".to_string())));
    }

    #[test]
    fn test_element_parameter_and_page_element_targets() {
        assert_matches!(
            create("$elements.input to \"value\"").unwrap(),
            Action::Input { .. }
        );
        assert_matches!(
            create("page_import.elements.input to $data.name").unwrap(),
            Action::Input {
                value: Some(Value::DataParameter { .. }),
                ..
            }
        );
    }

    #[test]
    fn test_disallowed_identifier_type_is_malformed() {
        let error = create("\".selector\".attribute_name to \"value\"").unwrap_err();

        assert_matches!(
            error,
            ActionError::Identifier(IdentifierError::MalformedPageElementReference { .. })
        );
    }

    #[test]
    fn test_direct_invocation_with_unowned_type_errors() {
        let factory = InputActionTypeFactory::new();

        let error = factory
            .create("click \".selector\"", "click", "\".selector\"")
            .unwrap_err();
        assert_matches!(
            error,
            ActionError::InvalidActionType { ref action_type } if action_type == "click"
        );
    }
}
