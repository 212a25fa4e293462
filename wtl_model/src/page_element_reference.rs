//! Cross-file page element references (`import_name.elements.element_name`)
//!
//! The reference is a self-validating value object: construction always
//! succeeds and records the raw string, `is_valid` reports whether the dotted
//! shape is well formed. The fallback identifier factory relies on this to
//! reject recognized-but-malformed references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Required middle component of every page element reference
const ELEMENTS_PART: &str = "elements";

/// A reference to a named element exported by an imported page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageElementReference {
    raw: String,
    import_name: String,
    element_name: String,
    name: Option<String>,
}

impl PageElementReference {
    /// Parse a reference from its raw dotted form. Never fails; malformed
    /// input produces a reference for which `is_valid` returns false.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let mut parts = raw.split('.');

        let import_name = parts.next().unwrap_or_default().to_string();
        let elements_part = parts.next().unwrap_or_default();
        let element_name = if elements_part == ELEMENTS_PART {
            parts.next().unwrap_or_default().to_string()
        } else {
            String::new()
        };

        // Trailing components invalidate the reference
        let element_name = if parts.next().is_some() {
            String::new()
        } else {
            element_name
        };

        Self {
            raw,
            import_name,
            element_name,
            name: None,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn import_name(&self) -> &str {
        &self.import_name
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// A reference is valid when it has exactly the three dot-separated parts
    /// `import_name.elements.element_name` with non-empty import and element
    /// names.
    pub fn is_valid(&self) -> bool {
        !self.import_name.is_empty() && !self.element_name.is_empty()
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
}

impl fmt::Display for PageElementReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
