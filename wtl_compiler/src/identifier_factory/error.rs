//! Identifier construction errors

/// Errors raised while constructing identifier models.
///
/// The fallback classification bucket accepts syntactically unconstrained
/// input, so the page element reference factory is the one factory where
/// "handles" followed by "create" can still fail. The offending raw string
/// is carried for point-of-failure diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("Malformed page element reference: '{reference}'")]
    MalformedPageElementReference { reference: String },
}

impl IdentifierError {
    pub fn malformed_page_element_reference(reference: &str) -> Self {
        Self::MalformedPageElementReference {
            reference: reference.to_string(),
        }
    }

    /// The raw string that failed to parse
    pub fn reference(&self) -> &str {
        match self {
            Self::MalformedPageElementReference { reference } => reference,
        }
    }
}
