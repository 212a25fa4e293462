//! Action model types (EBNF: action)
//!
//! An action is a type keyword plus its argument string, compiled into one of
//! four typed shapes. Unknown keywords compile to an `Unrecognised`
//! placeholder at the dispatcher level; stricter callers may reject it.

use crate::identifier::Identifier;
use crate::value::Value;
use serde::{Deserialize, Serialize};

// === ACTION TYPES ===

/// All recognized action type keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Set,
    Click,
    Submit,
    WaitFor,
    Wait,
    Back,
    Forward,
    Reload,
}

impl ActionType {
    /// Parse an action type from its keyword (exact match, case-sensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "set" => Some(Self::Set),
            "click" => Some(Self::Click),
            "submit" => Some(Self::Submit),
            "wait-for" => Some(Self::WaitFor),
            "wait" => Some(Self::Wait),
            "back" => Some(Self::Back),
            "forward" => Some(Self::Forward),
            "reload" => Some(Self::Reload),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Click => "click",
            Self::Submit => "submit",
            Self::WaitFor => "wait-for",
            Self::Wait => "wait",
            Self::Back => "back",
            Self::Forward => "forward",
            Self::Reload => "reload",
        }
    }
}

// === ACTION NODES ===

/// A compiled action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// `set <identifier> to <value>`
    Input {
        raw: String,
        identifier: Identifier,
        value: Option<Value>,
        arguments: String,
    },
    /// `click`/`submit`/`wait-for` on an identifier
    Interaction {
        raw: String,
        action_type: ActionType,
        identifier: Identifier,
        arguments: String,
    },
    /// `wait <duration>`
    Wait { raw: String, duration: Value },
    /// `back`/`forward`/`reload`; arguments are carried but ignored
    NoArguments {
        raw: String,
        action_type: ActionType,
        arguments: String,
    },
    /// Placeholder for an unknown type keyword, kept for error reporting
    Unrecognised {
        raw: String,
        type_token: String,
        arguments: String,
    },
}

impl Action {
    pub fn raw(&self) -> &str {
        match self {
            Self::Input { raw, .. }
            | Self::Interaction { raw, .. }
            | Self::Wait { raw, .. }
            | Self::NoArguments { raw, .. }
            | Self::Unrecognised { raw, .. } => raw,
        }
    }

    pub fn is_recognised(&self) -> bool {
        !matches!(self, Self::Unrecognised { .. })
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Input { identifier, .. } | Self::Interaction { identifier, .. } => {
                Some(identifier)
            }
            _ => None,
        }
    }
}
