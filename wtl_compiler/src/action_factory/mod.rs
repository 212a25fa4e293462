//! Action compilation: type/argument splitting and per-type dispatch
//!
//! An action line splits on the first space into a type keyword and an
//! argument string. A fixed, ordered set of per-type factories each declares
//! the keywords it owns; the first owner wins. Two policies coexist by
//! design: the top-level dispatcher is permissive and returns an
//! `Unrecognised` placeholder for unknown keywords, while invoking a
//! per-type factory directly with a keyword it does not own is a typed
//! error.

pub mod error;
pub mod input;
pub mod interaction;
pub mod no_arguments;
pub mod wait;

pub use error::ActionError;
pub use input::InputActionTypeFactory;
pub use interaction::InteractionActionTypeFactory;
pub use no_arguments::NoArgumentsActionTypeFactory;
pub use wait::WaitActionTypeFactory;

use log::debug;
use wtl_model::Action;

/// Shared capability of every per-type action factory
pub trait ActionTypeFactory {
    /// Does this factory own `action_type`?
    fn handles(&self, action_type: &str) -> bool;

    /// Build the typed action. Errors with `InvalidActionType` when invoked
    /// with a type keyword this factory does not own.
    fn create(&self, raw: &str, action_type: &str, arguments: &str) -> Result<Action, ActionError>;
}

/// Composition root over the per-type action factories
pub struct ActionFactory {
    factories: Vec<Box<dyn ActionTypeFactory>>,
}

impl ActionFactory {
    pub fn new() -> Self {
        Self {
            factories: vec![
                Box::new(InputActionTypeFactory::new()),
                Box::new(InteractionActionTypeFactory::new()),
                Box::new(NoArgumentsActionTypeFactory),
                Box::new(WaitActionTypeFactory::new()),
            ],
        }
    }

    /// Compile a raw action line into a typed action.
    pub fn create_action(&self, raw_action: &str) -> Result<Action, ActionError> {
        let raw = raw_action.trim();
        let (type_token, arguments) = match raw.split_once(' ') {
            Some((type_token, arguments)) => (type_token, arguments),
            None => (raw, ""),
        };

        for factory in &self.factories {
            if factory.handles(type_token) {
                return factory.create(raw, type_token, arguments);
            }
        }

        debug!("unrecognised action type '{}', building placeholder", type_token);
        Ok(Action::Unrecognised {
            raw: raw.to_string(),
            type_token: type_token.to_string(),
            arguments: arguments.to_string(),
        })
    }
}

impl Default for ActionFactory {
    fn default() -> Self {
        Self::new()
    }
}
