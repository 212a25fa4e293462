// Internal modules
pub mod action_factory;
pub mod assertion_factory;
pub mod error;
pub mod identifier_factory;
pub mod identifier_string;
pub mod identifier_type;
pub mod value_factory;

// Re-export key types for library consumers
pub use action_factory::{ActionError, ActionFactory};
pub use assertion_factory::{AssertionError, AssertionFactory};
pub use error::CompilerError;
pub use identifier_factory::{IdentifierError, IdentifierFactory};
pub use identifier_type::IdentifierType;
pub use value_factory::{AssertionExaminedValueFactory, ValueFactory};
