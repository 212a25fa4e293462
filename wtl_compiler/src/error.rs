//! Top-level compiler error aggregation
//!
//! Every stage defines its own error enum next to its factory; this module
//! folds them into one `CompilerError` for callers that drive the whole
//! action/assertion pipeline. All variants are deterministic parse failures
//! on malformed static input; an aggregation layer above this crate is
//! expected to attach positional context (test, step, line) before surfacing
//! them to an end user.

use crate::action_factory::ActionError;
use crate::assertion_factory::AssertionError;
use crate::identifier_factory::IdentifierError;

/// Compiler processing errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompilerError {
    #[error("Identifier construction failed: {0}")]
    Identifier(#[from] IdentifierError),

    #[error("Action compilation failed: {0}")]
    Action(#[from] ActionError),

    #[error("Assertion compilation failed: {0}")]
    Assertion(#[from] AssertionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_keeps_offending_string() {
        let error: CompilerError = IdentifierError::malformed_page_element_reference("bad").into();

        assert!(error.to_string().contains("bad"));
    }
}
