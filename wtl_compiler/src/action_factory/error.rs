//! Action compilation errors

use crate::identifier_factory::IdentifierError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Raised when a per-type factory is invoked directly with a type
    /// keyword it does not own. The top-level dispatcher never raises this;
    /// it returns an `Unrecognised` placeholder instead.
    #[error("Invalid action type: '{action_type}'")]
    InvalidActionType { action_type: String },

    /// A value-bearing action with no value content at all
    #[error("Missing value in action: '{raw}'")]
    MissingValue { raw: String },

    #[error(transparent)]
    Identifier(#[from] IdentifierError),
}

impl ActionError {
    pub fn invalid_action_type(action_type: &str) -> Self {
        Self::InvalidActionType {
            action_type: action_type.to_string(),
        }
    }

    pub fn missing_value(raw: &str) -> Self {
        Self::MissingValue {
            raw: raw.to_string(),
        }
    }
}
