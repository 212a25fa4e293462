//! Factory for argument-free actions (`back`, `forward`, `reload`)

use super::{ActionError, ActionTypeFactory};
use wtl_model::{Action, ActionType};

const HANDLED_TYPES: &[ActionType] = &[ActionType::Back, ActionType::Forward, ActionType::Reload];

#[derive(Debug, Default, Clone, Copy)]
pub struct NoArgumentsActionTypeFactory;

impl ActionTypeFactory for NoArgumentsActionTypeFactory {
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

        // arguments are carried for diagnostics but otherwise ignored
        Ok(Action::NoArguments {
            raw: raw.to_string(),
            action_type,
            arguments: arguments.to_string(),
        })
    }
}
