//! Factory for interaction actions (`click`, `submit`, `wait-for`)
//!
//! The whole argument string is the identifier; construction errors from the
//! identifier layer propagate unchanged.

use super::{ActionError, ActionTypeFactory};
use crate::identifier_factory::{IdentifierError, IdentifierFactory};
use wtl_model::{Action, ActionType};

const HANDLED_TYPES: &[ActionType] = &[ActionType::Click, ActionType::Submit, ActionType::WaitFor];

pub struct InteractionActionTypeFactory {
    identifier_factory: IdentifierFactory,
}

impl InteractionActionTypeFactory {
    pub fn new() -> Self {
        Self {
            identifier_factory: IdentifierFactory::new(),
        }
    }
}

impl Default for InteractionActionTypeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionTypeFactory for InteractionActionTypeFactory {
    fn handles(&self, action_type: &str) -> bool {
        HANDLED_TYPES
            .iter()
            .any(|handled| handled.as_str() == action_type)
    }

    fn create(&self, raw: &str, action_type: &str, arguments: &str) -> Result<Action, ActionError> {
        if !self.handles(action_type) {
            return Err(ActionError::invalid_action_type(action_type));
        }

        let action_type =
            ActionType::parse(action_type).ok_or_else(|| ActionError::invalid_action_type(action_type))?;

        let identifier_string = arguments.trim();
        let identifier = self
            .identifier_factory
            .create(identifier_string, None)?
            .ok_or_else(|| IdentifierError::malformed_page_element_reference(identifier_string))?;

        Ok(Action::Interaction {
            raw: raw.to_string(),
            action_type,
            identifier,
            arguments: arguments.to_string(),
        })
    }
}
