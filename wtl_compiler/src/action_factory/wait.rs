//! Factory for wait actions (`wait <duration>`)

use super::{ActionError, ActionTypeFactory};
use crate::value_factory::ValueFactory;
use wtl_model::{Action, ActionType};

pub struct WaitActionTypeFactory {
    value_factory: ValueFactory,
}

impl WaitActionTypeFactory {
    pub fn new() -> Self {
        Self {
            value_factory: ValueFactory,
        }
    }
}

impl Default for WaitActionTypeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionTypeFactory for WaitActionTypeFactory {
    fn handles(&self, action_type: &str) -> bool {
        action_type == ActionType::Wait.as_str()
    }

    fn create(&self, raw: &str, action_type: &str, arguments: &str) -> Result<Action, ActionError> {
        if !self.handles(action_type) {
            return Err(ActionError::invalid_action_type(action_type));
        }

        let duration = self.value_factory.create_from_value_string(arguments);
        if duration.is_empty() {
            return Err(ActionError::missing_value(raw));
        }

        Ok(Action::Wait {
            raw: raw.to_string(),
            duration,
        })
    }
}
